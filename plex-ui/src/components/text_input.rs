//! Reusable text input component

use dioxus::prelude::*;

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputSize {
    /// Smaller padding
    Small,
    /// Standard padding
    #[default]
    Medium,
}

/// Reusable text input component with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] size: TextInputSize,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] monospace: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] autofocus: bool,
    /// Icon or text rendered inside the field before the value
    #[props(default)]
    start_adornment: Option<Element>,
    /// Rendered inside the field after the value (e.g. a shortcut hint)
    #[props(default)]
    end_adornment: Option<Element>,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-2.5 py-1.5 text-sm",
        TextInputSize::Medium => "px-3 py-2",
    };

    let base = "flex items-center gap-2 w-full bg-gray-800/50 rounded-lg focus-within:ring-1 focus-within:ring-accent/50 text-gray-300";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    let font_class = if monospace { "font-mono" } else { "" };
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div { class: "{base} {padding} {disabled_class} {extra}",
            if let Some(adornment) = start_adornment {
                span { class: "flex shrink-0 text-gray-500", {adornment} }
            }
            input {
                r#type: "text",
                class: "flex-1 min-w-0 bg-transparent focus:outline-none placeholder-gray-500 {font_class}",
                id: id.as_deref(),
                value: "{value}",
                placeholder: placeholder.as_deref(),
                disabled,
                oninput: move |e| on_input.call(e.value()),
                onmounted: move |event| async move {
                    if autofocus {
                        let _ = event.data().set_focus(true).await;
                    }
                },
            }
            if let Some(adornment) = end_adornment {
                span { class: "flex shrink-0 text-gray-500", {adornment} }
            }
        }
    }
}
