//! Routed pages

mod mock_index;

pub use mock_index::{
    MockButton, MockCodeBlock, MockFieldError, MockFloatingLabelInput, MockIndex,
    MockProgressSteps, MockSegmentedControl, MockSidebar, MockSkeleton,
};
