//! Buttons that open and close the sidebar

use dioxus::prelude::*;
use plex_common::sidebar::SidebarCollapsible;

use super::context::use_sidebar;
use crate::components::icons::SidebarLeftIcon;

/// Collapse/expand button. Hidden for sidebars that can't collapse.
#[component]
pub fn SidebarTrigger(
    /// Replaces the default panel icon
    #[props(default)]
    icon: Option<Element>,
    #[props(default)] class: Option<String>,
) -> Element {
    let sidebar = use_sidebar();
    let snapshot = sidebar.snapshot();

    if snapshot.collapsible() == SidebarCollapsible::None {
        return rsx! {};
    }

    let extra = class.as_deref().unwrap_or("");

    rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center justify-center w-8 h-8 rounded-md text-gray-400 hover:text-white hover:bg-white/5 transition-colors {extra}",
            aria_label: snapshot.trigger_label(),
            "data-state": snapshot.state().as_str(),
            onclick: move |_| sidebar.toggle_sidebar(),
            span { class: "flex w-4 h-4",
                if let Some(icon) = icon {
                    {icon}
                } else {
                    SidebarLeftIcon {}
                }
            }
        }
    }
}

/// Hamburger that morphs into an X while the mobile drawer is open
#[component]
pub fn SidebarMobileMenuButton(#[props(default)] class: Option<String>) -> Element {
    let sidebar = use_sidebar();
    let open = sidebar.open_mobile();
    let (top, bottom) = if open {
        ("translate-y-[3px] rotate-45", "-translate-y-[3px] -rotate-45")
    } else {
        ("-translate-y-[3px]", "translate-y-[3px]")
    };
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center justify-center w-8 h-8 rounded-md text-gray-300 hover:bg-white/5 {extra}",
            "data-expanded": open.then_some(""),
            aria_label: if open { "Close menu" } else { "Open menu" },
            aria_expanded: if open { "true" } else { "false" },
            onclick: move |_| sidebar.set_open_mobile(!open),
            span { class: "relative flex flex-col items-center justify-center w-4 h-4",
                span { class: "absolute w-4 h-px bg-current transition-transform {top}" }
                span { class: "absolute w-4 h-px bg-current transition-transform {bottom}" }
            }
        }
    }
}
