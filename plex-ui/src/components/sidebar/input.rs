//! Search field at the top of a sidebar

use dioxus::prelude::*;

use crate::components::icons::SearchIcon;
use crate::components::text_input::{TextInput, TextInputSize};

#[component]
pub fn SidebarInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "Search".to_string())] placeholder: String,
    /// Keyboard hint shown at the end of the field ("⌘K")
    #[props(default)]
    shortcut: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div { class: "px-2 group-data-[collapsible=icon]/sidebar:hidden {extra}",
            TextInput {
                value,
                on_input,
                size: TextInputSize::Small,
                placeholder: Some(placeholder),
                start_adornment: Some(rsx! {
                    SearchIcon { class: "w-3.5 h-3.5" }
                }),
                end_adornment: shortcut.map(|hint| rsx! {
                    kbd { class: "px-1 rounded border border-white/10 font-sans text-[10px] text-gray-500", "{hint}" }
                }),
            }
        }
    }
}
