//! Component mocks with interactive controls

mod button;
mod code_block;
mod field_error;
mod floating_label_input;
pub mod framework;
mod progress_steps;
mod segmented_control;
mod sidebar;
mod skeleton;
pub mod url_state;

pub use button::ButtonMock;
pub use code_block::CodeBlockMock;
pub use field_error::FieldErrorMock;
pub use floating_label_input::FloatingLabelInputMock;
pub use progress_steps::ProgressStepsMock;
pub use segmented_control::SegmentedControlMock;
pub use sidebar::SidebarMock;
pub use skeleton::SkeletonMock;
