//! Menu list, buttons and nested sub-menus

use dioxus::prelude::*;

use super::context::use_sidebar;
use crate::components::helpers::Tooltip;
use crate::components::icons::ChevronRightIcon;
use crate::components::skeleton::Skeleton;
use crate::floating_ui::Placement;

#[component]
pub fn SidebarMenu(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        ul { class: "flex flex-col gap-0.5 w-full min-w-0 {extra}", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(
    /// Marks an item whose sub-menu is open
    #[props(default)]
    expanded: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        li {
            class: "group/menu-item relative {extra}",
            "data-expanded": expanded.then_some("true"),
            {children}
        }
    }
}

/// Navigation button. When the sidebar is collapsed to icons on desktop, a
/// `tooltip` shows the hidden label on hover.
#[component]
pub fn SidebarMenuButton(
    #[props(default)] is_active: bool,
    #[props(default)] tooltip: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let sidebar = use_sidebar().snapshot();
    let state = if is_active {
        "bg-white/10 text-white font-medium"
    } else {
        "text-gray-300 hover:bg-white/5 hover:text-white"
    };
    let extra = class.as_deref().unwrap_or("");

    let button = rsx! {
        button {
            r#type: "button",
            class: "flex items-center w-full h-8 px-2 rounded-md text-sm text-left overflow-hidden transition-colors group-data-[collapsible=icon]/sidebar:w-8 group-data-[collapsible=icon]/sidebar:px-2 {state} {extra}",
            "data-active": if is_active { "true" } else { "false" },
            aria_current: is_active.then_some("page"),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            span { class: "flex items-center gap-2 w-full min-w-0", {children} }
        }
    };

    match tooltip.filter(|_| sidebar.shows_menu_tooltips()) {
        Some(text) => rsx! {
            Tooltip { text, placement: Placement::Right, {button} }
        },
        None => button,
    }
}

#[component]
pub fn SidebarMenuButtonIcon(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        span { class: "flex shrink-0 items-center justify-center w-4 h-4 {extra}", {children} }
    }
}

/// Button text. `short_label` is an alternative shown where space is tight.
#[component]
pub fn SidebarMenuButtonLabel(
    #[props(default)] short_label: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        span {
            class: "flex-1 truncate group-data-[collapsible=icon]/sidebar:hidden {extra}",
            "data-long-label": "true",
            {children}
        }
        if let Some(short) = short_label {
            span {
                class: "hidden flex-1 truncate {extra}",
                "data-short-label": "true",
                "{short}"
            }
        }
    }
}

/// Chevron that rotates when the parent item is expanded
#[component]
pub fn SidebarMenuChevron(#[props(default)] class: Option<String>) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        span { class: "ml-auto flex shrink-0 text-gray-500 transition-transform group-data-[expanded=true]/menu-item:rotate-90 group-data-[collapsible=icon]/sidebar:hidden {extra}",
            ChevronRightIcon { class: "w-3.5 h-3.5" }
        }
    }
}

/// Count or tag on the right of a menu button
#[component]
pub fn SidebarMenuBadge(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        span { class: "ml-auto px-1.5 min-w-5 h-5 flex items-center justify-center rounded-full bg-white/10 text-xs tabular-nums text-gray-300 group-data-[collapsible=icon]/sidebar:hidden {extra}",
            {children}
        }
    }
}

/// Secondary action shown on the right of a menu item
#[component]
pub fn SidebarMenuAction(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "absolute top-1 right-1 flex items-center opacity-0 group-hover/menu-item:opacity-100 focus-within:opacity-100 group-data-[collapsible=icon]/sidebar:hidden {extra}",
            {children}
        }
    }
}

/// Placeholder row while menu items load
#[component]
pub fn SidebarMenuSkeleton(
    #[props(default = true)] show_icon: bool,
    /// CSS width of the label bar ("60%", "100px")
    #[props(default = "60%".to_string())]
    label_width: String,
    #[props(default)] class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "flex items-center gap-2 h-8 px-2 {extra}", "data-skeleton": "",
            if show_icon {
                Skeleton { class: Some("w-4 h-4 shrink-0".to_string()) }
            }
            Skeleton {
                class: Some("h-3.5 flex-none".to_string()),
                style: Some(format!("width: {label_width};")),
            }
        }
    }
}

/// Nested list under a menu item
#[component]
pub fn SidebarMenuSub(
    #[props(default = true)] open: bool,
    /// Align sub-item text with parent labels that have icons
    #[props(default)]
    has_icons: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let inset = if has_icons { "ml-4 pl-2.5" } else { "ml-2 pl-2" };
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        ul {
            class: "flex flex-col gap-0.5 border-l border-white/5 {inset} group-data-[collapsible=icon]/sidebar:hidden {extra}",
            "data-state": if open { "open" } else { "closed" },
            "data-has-icons": has_icons.then_some("true"),
            hidden: !open,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuSubItem(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        li { class: "relative {extra}", {children} }
    }
}

/// Left margin for a nested sub-button, 12px per level, capped at 3 levels.
fn indent_class(indent: u8) -> &'static str {
    match indent {
        0 => "",
        1 => "ml-3",
        2 => "ml-6",
        _ => "ml-9",
    }
}

#[component]
pub fn SidebarMenuSubButton(
    #[props(default)] is_active: bool,
    /// Nesting level, 0 to 3
    #[props(default)]
    indent: u8,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let state = if is_active {
        "text-white bg-white/10"
    } else {
        "text-gray-400 hover:text-white hover:bg-white/5"
    };
    let indent = indent_class(indent);
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        button {
            r#type: "button",
            class: "flex items-center gap-2 w-full h-7 px-2 rounded-md text-sm text-left truncate transition-colors {indent} {state} {extra}",
            "data-active": if is_active { "true" } else { "false" },
            aria_current: is_active.then_some("page"),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_levels() {
        assert_eq!(indent_class(0), "");
        assert_eq!(indent_class(2), "ml-6");
        assert_eq!(indent_class(3), "ml-9");
        assert_eq!(indent_class(7), "ml-9");
    }
}
