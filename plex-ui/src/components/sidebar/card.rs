//! Promo / notice cards shown inside the sidebar

use dioxus::prelude::*;

use crate::components::button::{Button, ButtonColor, ButtonSize, ButtonVariant};
use crate::components::icons::{ChevronRightIcon, XIcon};
use crate::components::provider::Link;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SidebarCardVariant {
    #[default]
    Default,
    /// Raised surface with a shadow
    Elevated,
}

impl SidebarCardVariant {
    fn as_str(self) -> &'static str {
        match self {
            SidebarCardVariant::Default => "default",
            SidebarCardVariant::Elevated => "elevated",
        }
    }
}

#[component]
pub fn SidebarCard(
    #[props(default)] variant: SidebarCardVariant,
    /// Show a dismiss button in the corner
    #[props(default)]
    dismissible: bool,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let surface = match variant {
        SidebarCardVariant::Default => "bg-white/5",
        SidebarCardVariant::Elevated => "bg-gray-800 border border-white/5 shadow-lg",
    };
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "relative flex flex-col gap-1.5 p-3 rounded-lg text-sm group-data-[collapsible=icon]/sidebar:hidden {surface} {extra}",
            "data-variant": variant.as_str(),
            if dismissible {
                Button {
                    uniform: true,
                    size: ButtonSize::Xxxs,
                    variant: ButtonVariant::Ghost,
                    color: ButtonColor::Secondary,
                    class: Some("absolute top-2 right-2".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| {
                        if let Some(handler) = on_dismiss {
                            handler.call(());
                        }
                    },
                    XIcon { class: "w-3 h-3" }
                }
            }
            {children}
        }
    }
}

#[component]
pub fn SidebarCardHeader(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "flex items-center gap-2 pr-6 {extra}", {children} }
    }
}

#[component]
pub fn SidebarCardTitle(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "font-medium text-gray-100 {extra}", {children} }
    }
}

/// Title that links somewhere, with a trailing chevron
#[component]
pub fn SidebarCardTitleLink(
    href: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        Link {
            href,
            class: Some(format!("group/card-link inline-flex items-center gap-1 font-medium text-gray-100 hover:text-white {extra}")),
            {children}
            ChevronRightIcon { class: "w-3.5 h-3.5 text-gray-500 transition-transform group-hover/card-link:translate-x-0.5" }
        }
    }
}

#[component]
pub fn SidebarCardContent(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "text-gray-400 {extra}", {children} }
    }
}

#[component]
pub fn SidebarCardFooter(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "flex items-center gap-2 mt-1 {extra}", {children} }
    }
}
