//! Link card component

use crate::mocks::framework::MockPage;
use dioxus::prelude::*;

/// A card-style link to a mock page with its description
#[component]
pub fn LinkCard(page: MockPage) -> Element {
    rsx! {
        Link {
            to: page.to_route(None),
            class: "block p-4 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors",
            div { class: "font-medium", "{page.label()}" }
            div { class: "text-sm text-gray-400", "{page.description()}" }
        }
    }
}
