//! FloatingLabelInput mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use plex_ui::FloatingLabelInput;

#[component]
pub fn FloatingLabelInputMock(initial_state: Option<String>) -> Element {
    let mut events = use_signal(Vec::<String>::new);

    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "input_type",
            "Type",
            "email",
            vec![
                ("text", "Text"),
                ("email", "Email"),
                ("password", "Password"),
            ],
        )
        .string_control("label", "Label", "Email address")
        .string_control("error", "Error", "")
        .doc("Leave empty for a valid field")
        .bool_control("clearable", "Clearable", true)
        .bool_control("disabled", "Disabled", false)
        .bool_control("read_only", "Read only", false)
        .bool_control("extensions", "Allow password managers", false)
        .doc("Drops data-lpignore / data-1p-ignore")
        .action("Clear event log", Callback::new(move |_| events.write().clear()))
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Invalid").set_string("error", "Enter a valid email address"),
            Preset::new("Password")
                .set_string("input_type", "password")
                .set_string("label", "Password")
                .set_bool("clearable", false)
                .set_bool("extensions", true),
            Preset::new("Disabled").set_bool("disabled", true),
            Preset::new("Read Only").set_bool("read_only", true),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::FloatingLabelInput);

    let label = registry.get_string("label");
    let error = registry.get_string("error");
    let error_message = (!error.is_empty()).then_some(error);
    let clearable = registry.get_bool("clearable");

    let mut value = use_signal(String::new);
    let mut log = move |event: String| {
        let mut events = events.write();
        events.insert(0, event);
        events.truncate(6);
    };

    rsx! {
        MockPanel { current_mock: MockPage::FloatingLabelInput, registry: registry.clone(),
            div { class: "p-8 bg-gray-900 min-h-full",
                div { class: "max-w-sm mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Controlled" }
                    FloatingLabelInput {
                        label,
                        input_type: registry.get_string("input_type"),
                        name: "demo",
                        value: value(),
                        error_message,
                        disabled: registry.get_bool("disabled"),
                        read_only: registry.get_bool("read_only"),
                        allow_autofill_extensions: registry.get_bool("extensions"),
                        on_input: move |v: String| value.set(v),
                        on_clear: clearable.then(|| {
                            EventHandler::new(move |_| {
                                value.set(String::new());
                                log("clear".to_string());
                            })
                        }),
                        on_autofill: move |_| log("autofill".to_string()),
                        on_focus: move |_| log("focus".to_string()),
                        on_blur: move |_| log("blur".to_string()),
                    }
                }

                div { class: "max-w-sm mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Uncontrolled with default value" }
                    FloatingLabelInput {
                        label: "Workspace name",
                        default_value: "acme-production",
                        aria_describedby: "workspace-hint",
                    }
                    p { id: "workspace-hint", class: "mt-1.5 text-xs text-gray-500",
                        "Lowercase letters, numbers and dashes."
                    }
                }

                div {
                    h3 { class: "text-sm text-gray-400 mb-2", "Events" }
                    ul { class: "font-mono text-xs text-gray-500 space-y-1",
                        for (i , event) in events.read().iter().enumerate() {
                            li { key: "{i}-{event}", "{event}" }
                        }
                    }
                }
            }
        }
    }
}
