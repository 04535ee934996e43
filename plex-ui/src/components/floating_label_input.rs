//! Text field whose label sits inside the input and floats up once the field
//! is focused or holds a value

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use plex_common::field::{self, FieldInputs};
use wasm_bindgen_x::JsCast;

use crate::components::field_error::FieldError;
use crate::components::icons::XIcon;

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

/// Move the caret to the end of the input's current value.
fn caret_to_end(mounted: &MountedData) {
    let Some(element) = mounted.downcast::<web_sys_x::Element>() else {
        return;
    };
    let Some(input) = element.dyn_ref::<web_sys_x::HtmlInputElement>() else {
        return;
    };
    let len = input.value().encode_utf16().count() as u32;
    // Not every input type supports selection (email, number)
    let _ = input.set_selection_range(len, len);
}

#[component]
pub fn FloatingLabelInput(
    label: String,
    #[props(default)] error_message: Option<String>,
    /// Defaults to whether `error_message` is set
    #[props(default)]
    invalid: Option<bool>,
    #[props(default)] disabled: bool,
    #[props(default)] read_only: bool,
    /// Shows a clear button while the field has a value
    #[props(default)]
    on_clear: Option<EventHandler<()>>,
    /// Fired when the browser autofills the field
    #[props(default)]
    on_autofill: Option<EventHandler<()>>,
    /// Let password manager extensions decorate the field
    #[props(default)]
    allow_autofill_extensions: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] name: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    /// Controlled value
    #[props(default)]
    value: Option<String>,
    #[props(default)] default_value: Option<String>,
    #[props(default)] on_input: Option<EventHandler<String>>,
    #[props(default)] on_focus: Option<EventHandler<FocusEvent>>,
    #[props(default)] on_blur: Option<EventHandler<FocusEvent>>,
    #[props(default)] aria_describedby: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let instance = use_hook(|| NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed));
    let input_id = field::input_id(id.as_deref(), instance);
    let error_id = field::error_id(&input_id);

    let mut focused = use_signal(|| false);
    let initial = value.clone().or_else(|| default_value.clone());
    let mut typed_value = use_signal(move || initial.is_some_and(|v| !v.is_empty()));
    let mut input_ref: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // A controlled value always wins over what the user last typed
    let has_value = match &value {
        Some(v) => !v.is_empty(),
        None => typed_value(),
    };

    let inputs = FieldInputs {
        invalid,
        has_error_message: error_message.is_some(),
        has_clear_handler: on_clear.is_some(),
        has_value,
        disabled,
        read_only,
    };
    let is_invalid = inputs.invalid();
    let show_clear = inputs.shows_clear_button();
    let described_by = field::aria_describedby(
        aria_describedby.as_deref(),
        error_message.as_ref().map(|_| error_id.as_str()),
    );
    let block_extensions = (!allow_autofill_extensions).then_some("true");

    let label_position = if focused() || has_value {
        "top-1.5 text-xs"
    } else {
        "top-1/2 -translate-y-1/2 text-sm"
    };
    let border = if is_invalid {
        "border-red-500/70"
    } else if focused() {
        "border-indigo-500"
    } else {
        "border-white/10 hover:border-white/20"
    };
    let state_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        "cursor-text"
    };
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div { class: "flex flex-col {extra}",
            div {
                class: "relative flex items-center h-14 px-3 rounded-lg border bg-gray-800/50 transition-colors {border} {state_class}",
                "data-focused": focused().then_some(""),
                "data-has-value": has_value.then_some(""),
                "data-invalid": is_invalid.then_some(""),
                "data-disabled": disabled.then_some(""),
                "data-readonly": read_only.then_some(""),
                // The input and the clear button stop propagation, so this only
                // sees presses on the label and padding.
                onmousedown: move |evt| {
                    let Some(input) = input_ref() else {
                        return;
                    };
                    evt.prevent_default();
                    spawn(async move {
                        let _ = input.set_focus(true).await;
                        caret_to_end(&input);
                    });
                },
                label {
                    r#for: "{input_id}",
                    class: "absolute left-3 pointer-events-none text-gray-400 transition-all {label_position}",
                    "{label}"
                }
                input {
                    id: "{input_id}",
                    name: name.as_deref(),
                    r#type: "{input_type}",
                    class: "flex-1 min-w-0 pt-4 bg-transparent text-gray-200 focus:outline-none disabled:cursor-not-allowed",
                    value: value.clone().or_else(|| default_value.clone()),
                    disabled,
                    readonly: read_only,
                    aria_invalid: is_invalid.then_some("true"),
                    aria_describedby: described_by,
                    "data-lpignore": block_extensions,
                    "data-1p-ignore": block_extensions,
                    onmounted: move |evt: MountedEvent| input_ref.set(Some(evt.data())),
                    onmousedown: move |evt| evt.stop_propagation(),
                    oninput: move |evt| {
                        let text = evt.value();
                        typed_value.set(!text.is_empty());
                        if let Some(handler) = on_input {
                            handler.call(text);
                        }
                    },
                    onfocus: move |evt| {
                        focused.set(true);
                        if let Some(handler) = on_focus {
                            handler.call(evt);
                        }
                    },
                    onblur: move |evt| {
                        focused.set(false);
                        if let Some(handler) = on_blur {
                            handler.call(evt);
                        }
                    },
                    onanimationstart: move |evt| {
                        if field::is_autofill_animation(&evt.data().animation_name()) {
                            typed_value.set(true);
                            if let Some(handler) = on_autofill {
                                handler.call(());
                            }
                        }
                    },
                }
                if show_clear {
                    button {
                        r#type: "button",
                        aria_label: "Clear input",
                        class: "ml-2 p-1 rounded-full text-gray-400 hover:text-white hover:bg-white/10",
                        onmousedown: move |evt| evt.stop_propagation(),
                        onclick: move |_| {
                            if let Some(handler) = on_clear {
                                handler.call(());
                            }
                        },
                        XIcon { class: "w-3.5 h-3.5" }
                    }
                }
            }
            if let Some(message) = error_message {
                FieldError { id: error_id, "{message}" }
            }
        }
    }
}
