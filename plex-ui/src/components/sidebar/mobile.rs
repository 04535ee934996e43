//! Mobile drawer: a backdrop plus a panel sliding in from the left

use dioxus::prelude::*;

use super::context::use_sidebar;

/// Drawer shown on small viewports while `open_mobile` is set.
///
/// `contained` positions it inside the nearest positioned ancestor instead of
/// the viewport, for previews embedded in a page.
#[component]
pub fn SidebarMobile(
    #[props(default)] contained: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let sidebar = use_sidebar();
    let open = sidebar.open_mobile();
    let position = if contained { "absolute" } else { "fixed" };
    let (backdrop, drawer) = if open {
        ("opacity-100", "translate-x-0")
    } else {
        ("opacity-0 pointer-events-none", "-translate-x-full")
    };
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "{position} inset-0 z-40 bg-black/50 transition-opacity {backdrop}",
            aria_hidden: "true",
            onclick: move |_| sidebar.set_open_mobile(false),
        }
        div {
            class: "{position} inset-y-0 left-0 z-50 flex flex-col w-[var(--sidebar-width-mobile)] max-w-[85%] bg-gray-900 border-r border-white/5 shadow-2xl transition-transform duration-200 ease-out {drawer} {extra}",
            "data-state": if open { "open" } else { "closed" },
            aria_hidden: if open { "false" } else { "true" },
            {children}
        }
    }
}

#[component]
pub fn SidebarMobileHeader(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "flex items-center justify-between gap-2 h-14 px-3 border-b border-white/5 {extra}",
            {children}
        }
    }
}

#[component]
pub fn SidebarMobileFooter(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "mt-auto flex flex-col gap-2 p-3 border-t border-white/5 {extra}", {children} }
    }
}
