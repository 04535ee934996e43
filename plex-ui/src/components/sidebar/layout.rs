//! Sidebar frame: the `aside` itself, its sections and the main content area

use dioxus::prelude::*;
use plex_common::sidebar::{SidebarCollapsible, SidebarSide, SidebarState, SidebarVariant};

use super::context::use_sidebar;

fn width_class(state: SidebarState, collapsible: SidebarCollapsible) -> &'static str {
    match (state, collapsible) {
        (SidebarState::Collapsed, SidebarCollapsible::Offcanvas) => "w-0 overflow-hidden",
        (SidebarState::Collapsed, SidebarCollapsible::Icon) => "w-[var(--sidebar-width-icon)]",
        _ => "w-[var(--sidebar-width)]",
    }
}

fn variant_class(variant: SidebarVariant) -> &'static str {
    match variant {
        SidebarVariant::Sidebar => "bg-gray-900",
        SidebarVariant::Floating => "m-2 rounded-xl border border-white/5 bg-gray-900 shadow-xl",
        SidebarVariant::Inset => "bg-transparent",
        SidebarVariant::DualTier => "bg-gray-950",
        SidebarVariant::Docs => "bg-transparent",
    }
}

/// The desktop sidebar. Renders nothing on mobile in offcanvas mode, where
/// `SidebarMobile` takes over.
#[component]
pub fn Sidebar(
    #[props(default)] side: SidebarSide,
    #[props(default)] variant: SidebarVariant,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let sidebar = use_sidebar().snapshot();

    if !sidebar.renders_desktop_sidebar() {
        return rsx! {};
    }

    let state = sidebar.state();
    let width = width_class(state, sidebar.collapsible());
    let variant_class = variant_class(variant);
    let edge = match (side, variant) {
        (_, SidebarVariant::Floating | SidebarVariant::Docs) => "",
        (SidebarSide::Left, _) => "border-r border-white/5",
        (SidebarSide::Right, _) => "order-last border-l border-white/5",
    };
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        aside {
            class: "group/sidebar relative flex flex-col shrink-0 min-h-0 text-gray-300 transition-[width] duration-200 ease-out {width} {variant_class} {edge} {extra}",
            "data-side": side.as_str(),
            "data-variant": variant.as_str(),
            "data-state": state.as_str(),
            "data-collapsible": if state == SidebarState::Collapsed { sidebar.collapsible().as_str() } else { "" },
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "flex flex-col gap-2 p-2 {extra}", {children} }
    }
}

/// Scrollable middle section
#[component]
pub fn SidebarContent(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "flex flex-1 flex-col gap-2 min-h-0 overflow-y-auto overflow-x-hidden {extra}",
            {children}
        }
    }
}

/// Bottom section, separated from the content by a rule
#[component]
pub fn SidebarFooter(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "flex flex-col gap-2 p-2 {extra}",
            div { class: "h-px -mx-2 mb-1 bg-white/5" }
            {children}
        }
    }
}

/// Row of small links in the footer (docs, changelog, status)
#[component]
pub fn SidebarFooterLinks(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "flex flex-wrap items-center gap-x-3 gap-y-1 px-2 text-xs text-gray-500 {extra}",
            {children}
        }
    }
}

/// Thin hit area along the sidebar edge that toggles it
#[component]
pub fn SidebarRail(#[props(default)] class: Option<String>) -> Element {
    let sidebar = use_sidebar();
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "absolute inset-y-0 -right-2 w-4 cursor-col-resize hover:after:bg-white/10 after:absolute after:inset-y-0 after:left-1/2 after:w-px {extra}",
            aria_hidden: "true",
            onclick: move |_| sidebar.toggle_sidebar(),
        }
    }
}

/// Main content area next to the sidebar
#[component]
pub fn SidebarInset(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        main { class: "relative flex flex-1 flex-col min-w-0 min-h-0 {extra}", {children} }
    }
}

/// Row container holding a `Sidebar` and a `SidebarInset`
#[component]
pub fn SidebarLayout(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "relative flex flex-1 min-h-0 {extra}", {children} }
    }
}

#[component]
pub fn SidebarSeparator(#[props(default)] class: Option<String>) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        hr { class: "mx-2 border-0 h-px bg-white/5 {extra}" }
    }
}
