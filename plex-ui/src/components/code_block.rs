//! Code blocks: plain, copyable, and collapsible behind a "View Code" button

use dioxus::prelude::*;
use dioxus_core::Task;
use plex_common::code_block::{self, DEFAULT_COLLAPSED_HEIGHT};

use crate::components::button::{Button, ButtonColor, ButtonSize, ButtonVariant};
use crate::components::icons::{CheckIcon, CopyIcon};
use crate::wasm_utils::sleep_ms;

/// How long the copy button shows its confirmation
const COPIED_RESET_MS: u64 = 2000;

/// Write `text` to the system clipboard.
async fn write_clipboard(text: &str) -> Result<(), String> {
    let literal = serde_json::to_string(text).map_err(|e| e.to_string())?;
    let js = format!("await navigator.clipboard.writeText({literal}); return true;");
    dioxus::document::eval(&js)
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}

/// Icon button copying `value`, showing a check for a moment on success.
#[component]
pub fn CopyButton(value: String, #[props(default)] class: Option<String>) -> Element {
    let mut copied = use_signal(|| false);
    let mut reset_task = use_signal(|| None::<Task>);
    let extra = class.as_deref().unwrap_or("");
    let label = if copied() { "Copied" } else { "Copy code" };

    use_drop(move || {
        if let Some(task) = reset_task.peek().as_ref() {
            task.cancel();
        }
    });

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            color: ButtonColor::Secondary,
            size: ButtonSize::Xs,
            uniform: true,
            aria_label: Some(label.to_string()),
            class: Some(format!("absolute top-2 right-2 {extra}")),
            onclick: move |_| {
                let value = value.clone();
                spawn(async move {
                    if let Err(e) = write_clipboard(&value).await {
                        tracing::warn!("Clipboard write failed: {e}");
                        return;
                    }
                    copied.set(true);
                    if let Some(task) = reset_task.take() {
                        task.cancel();
                    }
                    let task = spawn(async move {
                        sleep_ms(COPIED_RESET_MS).await;
                        copied.set(false);
                    });
                    reset_task.set(Some(task));
                });
            },
            if copied() {
                CheckIcon { class: "w-4 h-4 text-green-400" }
            } else {
                CopyIcon {}
            }
        }
    }
}

/// Preformatted code on a dark panel
#[component]
pub fn CodeBlock(
    code: String,
    #[props(default)] language: Option<String>,
    #[props(default)] copyable: bool,
    #[props(default)] class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div { class: "relative rounded-lg bg-gray-950 border border-white/5 overflow-hidden {extra}",
            pre { class: "p-4 overflow-x-auto text-sm leading-relaxed text-gray-200 font-mono",
                code { "data-language": language.as_deref(), "{code}" }
            }
            if copyable {
                CopyButton { value: code.clone() }
            }
        }
    }
}

/// Gradient fade plus the button that expands a collapsed block
#[component]
pub fn ViewCodeOverlay(on_expand: EventHandler<()>) -> Element {
    rsx! {
        div { class: "absolute inset-x-0 bottom-0 h-20 bg-gradient-to-t from-gray-950 to-transparent pointer-events-none" }
        div { class: "absolute inset-x-0 bottom-3 flex justify-center",
            Button {
                color: ButtonColor::Secondary,
                variant: ButtonVariant::Solid,
                size: ButtonSize::Sm,
                pill: true,
                onclick: move |_| on_expand.call(()),
                "View Code"
            }
        }
    }
}

/// Code block that starts clipped to `collapsed_height` until expanded
#[component]
pub fn CollapsibleCodeBlock(
    code: String,
    #[props(default)] language: Option<String>,
    #[props(default)] default_expanded: bool,
    #[props(default = DEFAULT_COLLAPSED_HEIGHT)] collapsed_height: u32,
    /// Scroll instead of growing past this height once expanded
    #[props(default)]
    max_expanded_height: Option<u32>,
    #[props(default = true)] copyable: bool,
    #[props(default)] class: Option<String>,
) -> Element {
    let mut expanded = use_signal(|| default_expanded);
    let is_expanded = expanded();
    let style = code_block::max_height_style(code_block::max_height(
        is_expanded,
        collapsed_height,
        max_expanded_height,
    ));
    let overflow = if is_expanded { "overflow-auto" } else { "overflow-hidden" };
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "relative rounded-lg bg-gray-950 border border-white/5 {overflow} {extra}",
            "data-collapsed": (!is_expanded).then_some(""),
            style: "{style}",
            pre { class: "p-4 text-sm leading-relaxed text-gray-200 font-mono",
                code { "data-language": language.as_deref(), "{code}" }
            }
            if !is_expanded {
                ViewCodeOverlay { on_expand: move |_| expanded.set(true) }
            }
            if is_expanded && copyable {
                CopyButton { value: code.clone() }
            }
        }
    }
}
