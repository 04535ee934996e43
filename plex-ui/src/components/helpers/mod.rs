//! Common helper UI components

mod tooltip;

pub use tooltip::{use_tooltip_handle, Tooltip, TooltipHandle, TooltipPopover};
