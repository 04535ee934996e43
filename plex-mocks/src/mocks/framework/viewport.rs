//! Viewport switcher for responsive testing

use crate::storage::{self, VIEWPORT_KEY};
use dioxus::prelude::*;

/// Breakpoint definition
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Breakpoint {
    pub name: &'static str,
    pub width: u32, // 0 = full width
}

impl Breakpoint {
    pub const fn new(name: &'static str, width: u32) -> Self {
        Self { name, width }
    }
}

/// Default breakpoints. Mobile sits under the sidebar's 768px breakpoint.
pub const DEFAULT_BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint::new("Mobile", 375),
    Breakpoint::new("Tablet", 768),
    Breakpoint::new("Desktop", 1280),
    Breakpoint::new("Full", 0),
];

/// Find a breakpoint by name, falling back to full width.
pub fn breakpoint_named(name: &str) -> Breakpoint {
    DEFAULT_BREAKPOINTS
        .iter()
        .copied()
        .find(|b| b.name == name)
        .unwrap_or(Breakpoint::new("Full", 0))
}

/// Selected breakpoint, restored from and saved to local storage.
pub fn use_viewport() -> Signal<Breakpoint> {
    let selected = use_signal(|| {
        storage::get_string(VIEWPORT_KEY)
            .map(|name| breakpoint_named(&name))
            .unwrap_or(Breakpoint::new("Full", 0))
    });

    use_effect(move || storage::set_string(VIEWPORT_KEY, selected().name));

    selected
}

/// Row of breakpoint buttons
#[component]
pub fn ViewportSwitcher(selected: Signal<Breakpoint>) -> Element {
    let current = selected();

    rsx! {
        div { class: "flex items-center gap-1",
            for breakpoint in DEFAULT_BREAKPOINTS.iter().copied() {
                button {
                    class: if breakpoint == current { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    title: if breakpoint.width > 0 { format!("{}px", breakpoint.width) } else { "Full width".to_string() },
                    onclick: move |_| selected.set(breakpoint),
                    "{breakpoint.name}"
                }
            }
        }
    }
}

/// Viewport container - just applies width constraint
#[component]
pub fn MockViewport(width: u32, children: Element) -> Element {
    // `relative` lets contained overlays (the mobile drawer) position against the frame
    let class = if width > 0 {
        "relative bg-surface-base rounded-lg overflow-hidden flex-1 flex flex-col border border-gray-800"
    } else {
        "relative bg-surface-base rounded-lg overflow-hidden flex-1 flex flex-col w-full"
    };
    let style = if width > 0 {
        format!("width: {}px; max-width: 100%; margin: 0 auto;", width)
    } else {
        String::new()
    };

    rsx! {
        div { class, style, {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_named() {
        assert_eq!(breakpoint_named("Mobile").width, 375);
        assert_eq!(breakpoint_named("Desktop").width, 1280);
        assert_eq!(breakpoint_named("Watch"), Breakpoint::new("Full", 0));
    }

    #[test]
    fn test_mobile_breakpoint_is_below_sidebar_breakpoint() {
        let mobile = breakpoint_named("Mobile");
        assert!(mobile.width < plex_ui::SidebarConstants::MOBILE_BREAKPOINT);
    }
}
