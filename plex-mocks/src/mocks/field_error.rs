//! FieldError mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use plex_ui::{FieldError, TextInput, TextInputSize};

#[component]
pub fn FieldErrorMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .string_control("message", "Message", "This field is required")
        .bool_control("visible", "Show error", true)
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Long Message").set_string(
                "message",
                "Passwords must be at least 12 characters and include a number, a symbol and an uppercase letter",
            ),
            Preset::new("Hidden").set_bool("visible", false),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::FieldError);

    let message = registry.get_string("message");
    let visible = registry.get_bool("visible");
    let mut value = use_signal(String::new);

    rsx! {
        MockPanel { current_mock: MockPage::FieldError, registry,
            div { class: "p-8 bg-gray-900 min-h-full",
                div { class: "max-w-sm",
                    label { r#for: "project-name", class: "block text-sm text-gray-300 mb-1.5", "Project name" }
                    TextInput {
                        id: "project-name",
                        value: value(),
                        on_input: move |v| value.set(v),
                        size: TextInputSize::Medium,
                        placeholder: "my-project",
                    }
                    if visible {
                        FieldError { id: "project-name-error", "{message}" }
                    }
                }
            }
        }
    }
}
