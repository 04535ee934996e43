//! Skeleton mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use plex_ui::Skeleton;

#[component]
pub fn SkeletonMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "layout",
            "Layout",
            "card",
            vec![("card", "Card"), ("list", "List"), ("avatar", "Avatar")],
        )
        .int_control("rows", "Rows", 3, 1, Some(8))
        .visible_when("layout", "list")
        .bool_control("loaded", "Loaded", false)
        .doc("Swap the placeholders for the real content")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("List").set_string("layout", "list"),
            Preset::new("Avatar").set_string("layout", "avatar"),
            Preset::new("Loaded").set_bool("loaded", true),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::Skeleton);

    let layout = registry.get_string("layout");
    let rows = registry.get_int("rows").max(1) as usize;
    let loaded = registry.get_bool("loaded");

    rsx! {
        MockPanel { current_mock: MockPage::Skeleton, registry,
            div { class: "p-8 bg-gray-900 min-h-full",
                div { class: "max-w-sm",
                    match (layout.as_str(), loaded) {
                        ("list", false) => rsx! {
                            ul { class: "space-y-3",
                                for i in 0..rows {
                                    li { key: "{i}", class: "flex items-center gap-3",
                                        Skeleton { class: "w-4 h-4 rounded" }
                                        Skeleton { class: "h-3 flex-1", style: "max-width: {90 - (i % 3) * 15}%" }
                                    }
                                }
                            }
                        },
                        ("avatar", false) => rsx! {
                            div { class: "flex items-center gap-3",
                                Skeleton { circle: true, class: "w-10 h-10" }
                                div { class: "flex-1 space-y-2",
                                    Skeleton { class: "h-3 w-1/2" }
                                    Skeleton { class: "h-3 w-1/3" }
                                }
                            }
                        },
                        (_, false) => rsx! {
                            div { class: "rounded-lg border border-white/5 p-4 space-y-3",
                                Skeleton { class: "h-32 w-full rounded-md" }
                                Skeleton { class: "h-4 w-3/4" }
                                Skeleton { class: "h-3 w-1/2" }
                            }
                        },
                        (_, true) => rsx! {
                            div { class: "rounded-lg border border-white/5 p-4",
                                h3 { class: "font-medium text-white", "Deployment ready" }
                                p { class: "text-sm text-gray-400 mt-1",
                                    "Your build finished in 42 seconds."
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
