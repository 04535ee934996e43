//! Collapsible groups of menu items with a label and an optional action

use dioxus::prelude::*;
use plex_common::sidebar::GroupOpenState;

/// Open state of the nearest `SidebarGroup`
#[derive(Clone, Copy)]
pub struct SidebarGroupContext {
    state: Signal<GroupOpenState>,
    open_prop: Signal<Option<bool>>,
    on_open_change: Option<EventHandler<bool>>,
}

impl SidebarGroupContext {
    pub fn is_open(&self) -> bool {
        self.state.read().open(*self.open_prop.read())
    }

    pub fn toggle(&self) {
        let mut state = self.state;
        let reported = state.write().toggle(*self.open_prop.peek());
        if let (Some(open), Some(handler)) = (reported, self.on_open_change) {
            handler.call(open);
        }
    }
}

/// The enclosing group, if any.
pub fn use_sidebar_group() -> Option<SidebarGroupContext> {
    try_use_context::<SidebarGroupContext>()
}

#[component]
pub fn SidebarGroup(
    #[props(default = true)] default_open: bool,
    /// Controlled open state
    #[props(default)]
    open: Option<bool>,
    #[props(default)] on_open_change: Option<EventHandler<bool>>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let controlled = on_open_change.is_some();
    let state = use_signal(|| GroupOpenState::new(default_open, controlled));
    let mut open_prop = use_signal(|| open);
    if *open_prop.peek() != open {
        open_prop.set(open);
    }

    let group = use_context_provider(|| SidebarGroupContext {
        state,
        open_prop,
        on_open_change,
    });

    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "relative flex flex-col w-full min-w-0 p-2 {extra}",
            "data-state": if group.is_open() { "open" } else { "closed" },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SidebarGroupLabelSize {
    /// Compact, for dashboard and settings sidebars
    Sm,
    /// Documentation style with larger text
    #[default]
    Lg,
}

plex_common::string_enum!(SidebarGroupLabelSize {
    Sm => "sm",
    Lg => "lg",
});

/// Group heading. With `collapsible_group` it toggles the enclosing group.
#[component]
pub fn SidebarGroupLabel(
    #[props(default)] size: SidebarGroupLabelSize,
    #[props(default)] collapsible_group: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let group = use_sidebar_group();
    let text = match size {
        SidebarGroupLabelSize::Sm => "h-7 text-xs font-medium text-gray-500",
        SidebarGroupLabelSize::Lg => "h-8 text-sm font-semibold text-gray-300",
    };
    let extra = class.as_deref().unwrap_or("");
    let base = format!(
        "flex items-center gap-2 px-2 shrink-0 rounded-md transition-opacity group-data-[collapsible=icon]/sidebar:opacity-0 {text} {extra}"
    );

    match group.filter(|_| collapsible_group) {
        Some(group) => rsx! {
            button {
                r#type: "button",
                class: "{base} w-full text-left hover:bg-white/5",
                "data-size": size.as_str(),
                aria_expanded: if group.is_open() { "true" } else { "false" },
                onclick: move |_| group.toggle(),
                {children}
            }
        },
        None => rsx! {
            span { class: "{base}", "data-size": size.as_str(), {children} }
        },
    }
}

/// Button slot at the right of a group label
#[component]
pub fn SidebarGroupAction(#[props(default)] class: Option<String>, children: Element) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "absolute top-3 right-3 flex items-center group-data-[collapsible=icon]/sidebar:hidden {extra}",
            {children}
        }
    }
}

/// Body of a group, hidden while the group is closed
#[component]
pub fn SidebarGroupContent(#[props(default)] class: Option<String>, children: Element) -> Element {
    let open = use_sidebar_group().map_or(true, |group| group.is_open());
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "w-full text-sm {extra}",
            hidden: !open,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_size_strings() {
        assert_eq!(SidebarGroupLabelSize::default().as_str(), "lg");
        assert_eq!("sm".parse::<SidebarGroupLabelSize>(), Ok(SidebarGroupLabelSize::Sm));
        assert!("xl".parse::<SidebarGroupLabelSize>().is_err());
    }
}
