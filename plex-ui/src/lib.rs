//! plex-ui - Composable Dioxus widgets
//!
//! Inputs, sidebars, progress indicators, segmented controls, skeleton
//! loaders and code blocks. View-state rules live in `plex-common`; this
//! crate renders them and wires up the browser (listeners, cookies,
//! clipboard, popover positioning).

pub mod components;
pub mod floating_ui;
pub mod persistence;
pub mod wasm_utils;

pub use components::*;
pub use floating_ui::Placement;
pub use plex_common::sidebar::{
    SidebarCollapsible, SidebarConstants, SidebarSide, SidebarState, SidebarVariant,
};
