//! Inline validation message for form fields

use crate::components::icons::ExclamationMarkCircleIcon;
use dioxus::prelude::*;

/// Error message announced to assistive tech as soon as it appears
#[component]
pub fn FieldError(
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            id: id.as_deref(),
            role: "alert",
            class: "flex items-start gap-1.5 mt-1.5 text-sm text-red-400 {extra}",
            ExclamationMarkCircleIcon { class: "w-4 h-4 mt-0.5 shrink-0" }
            span { {children} }
        }
    }
}
