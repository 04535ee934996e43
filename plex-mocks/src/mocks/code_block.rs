//! CodeBlock mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use crate::ui::CollapsibleSource;
use dioxus::prelude::*;
use plex_ui::{CodeBlock, CollapsibleCodeBlock};

const SHORT_SNIPPET: &str = r#"SidebarTrigger {}"#;

const LONG_SNIPPET: &str = r#"SidebarProvider { collapsible: SidebarCollapsible::Icon,
    SidebarLayout {
        Sidebar {
            SidebarHeader { SidebarTrigger {} }
            SidebarContent {
                SidebarGroup {
                    SidebarGroupLabel { "Workspace" }
                    SidebarGroupContent {
                        SidebarMenu {
                            SidebarMenuItem {
                                SidebarMenuButton { is_active: true, tooltip: "Home",
                                    SidebarMenuButtonIcon { HomeIcon {} }
                                    SidebarMenuButtonLabel { "Home" }
                                }
                            }
                        }
                    }
                }
            }
        }
        SidebarInset { Outlet::<Route> {} }
    }
}"#;

#[component]
pub fn CodeBlockMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "snippet",
            "Snippet",
            "long",
            vec![("short", "Short"), ("long", "Long")],
        )
        .bool_control("expanded", "Start expanded", false)
        .bool_control("copyable", "Copyable", true)
        .int_control("collapsed_height", "Collapsed height", 140, 40, Some(400))
        .int_control("max_expanded_height", "Max expanded height", 0, 0, Some(800))
        .doc("0 lets the block grow to fit")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Short Snippet").set_string("snippet", "short"),
            Preset::new("Expanded").set_bool("expanded", true),
            Preset::new("Scrolling")
                .set_bool("expanded", true)
                .set_int("max_expanded_height", 240),
            Preset::new("Tall Preview").set_int("collapsed_height", 280),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::CodeBlock);

    let code = match registry.get_string("snippet").as_str() {
        "short" => SHORT_SNIPPET,
        _ => LONG_SNIPPET,
    };
    let default_expanded = registry.get_bool("expanded");
    let copyable = registry.get_bool("copyable");
    let collapsed_height = registry.get_int("collapsed_height").max(0) as u32;
    let max_expanded_height =
        Some(registry.get_int("max_expanded_height").max(0) as u32).filter(|h| *h > 0);

    // Remount the block when its initial state changes
    let block_key = format!("{default_expanded}-{collapsed_height}-{max_expanded_height:?}");

    rsx! {
        MockPanel { current_mock: MockPage::CodeBlock, registry,
            div { class: "p-8 bg-gray-900 min-h-full space-y-10",
                div {
                    h3 { class: "text-sm text-gray-400 mb-3", "Collapsible" }
                    CollapsibleCodeBlock {
                        key: "{block_key}",
                        code: code.to_string(),
                        language: "rust",
                        default_expanded,
                        collapsed_height,
                        max_expanded_height,
                        copyable,
                    }
                }

                div {
                    h3 { class: "text-sm text-gray-400 mb-1", "Collapses only when needed" }
                    p { class: "text-xs text-gray-500 mb-3",
                        "Short listings stay open; long ones collapse behind View Code."
                    }
                    div { class: "space-y-4",
                        CollapsibleSource { code: SHORT_SNIPPET.to_string(), language: "rust" }
                        CollapsibleSource { code: LONG_SNIPPET.to_string(), language: "rust", collapsed_height }
                    }
                }

                div {
                    h3 { class: "text-sm text-gray-400 mb-3", "Plain" }
                    CodeBlock {
                        code: "cargo add plex-ui",
                        language: "sh",
                        copyable,
                    }
                }
            }
        }
    }
}
