//! Shared UI components

pub mod button;
pub mod code_block;
pub mod field_error;
pub mod floating_label_input;
pub mod helpers;
pub mod icons;
pub mod progress_steps;
pub mod provider;
pub mod segmented_control;
pub mod sidebar;
pub mod skeleton;
pub mod text_input;

pub use button::{Button, ButtonColor, ButtonSize, ButtonVariant, ChromelessButton};
pub use code_block::{CodeBlock, CollapsibleCodeBlock, CopyButton, ViewCodeOverlay};
pub use field_error::FieldError;
pub use floating_label_input::FloatingLabelInput;
pub use helpers::{use_tooltip_handle, Tooltip, TooltipHandle, TooltipPopover};
pub use icons::{
    BellIcon, BookOpenIcon, ChartIcon, CheckIcon, ChevronDownIcon, ChevronRightIcon, CopyIcon,
    ExclamationMarkCircleFilledIcon, ExclamationMarkCircleIcon, FileTextIcon, FolderIcon,
    GlobeIcon, GridIcon, HomeIcon, KeyIcon, MenuIcon, MonitorIcon, MoonIcon, SearchIcon,
    SettingsIcon, SidebarLeftIcon, SunIcon, TerminalIcon, UsersIcon, XIcon,
};
pub use progress_steps::{
    ConnectorStyle, ProgressColor, ProgressOrientation, ProgressSize, ProgressStep,
    ProgressSteps, ProgressVariant,
};
pub use provider::{use_link_component, Link, LinkArgs, LinkComponent, PlexUiProvider, TextLink, UiConfig};
pub use segmented_control::{GutterSize, Segment, SegmentedControl, SegmentedControlSize};
pub use sidebar::*;
pub use skeleton::Skeleton;
pub use text_input::{TextInput, TextInputSize};
