//! Loading placeholder

use dioxus::prelude::*;

/// Pulsing placeholder block. Size it with `class` or `style`.
#[component]
pub fn Skeleton(
    /// Fully round (avatars, icons)
    #[props(default)]
    circle: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] style: Option<String>,
) -> Element {
    let shape = if circle { "rounded-full" } else { "rounded-md" };
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "animate-pulse bg-white/10 {shape} {extra}",
            "data-circle": if circle { Some("") } else { None },
            style: style.as_deref(),
            aria_hidden: "true",
        }
    }
}
