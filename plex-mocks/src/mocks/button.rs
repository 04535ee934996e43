//! Button mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use plex_ui::{Button, ButtonColor, ButtonSize, ButtonVariant, CopyIcon, Tooltip};

#[component]
pub fn ButtonMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "variant",
            "Variant",
            "solid",
            vec![
                ("solid", "Solid"),
                ("soft", "Soft"),
                ("outline", "Outline"),
                ("ghost", "Ghost"),
            ],
        )
        .enum_control(
            "color",
            "Color",
            "primary",
            vec![
                ("primary", "Primary"),
                ("secondary", "Secondary"),
                ("danger", "Danger"),
                ("success", "Success"),
            ],
        )
        .enum_control(
            "size",
            "Size",
            "md",
            vec![
                ("3xs", "3XS"),
                ("2xs", "2XS"),
                ("xs", "XS"),
                ("sm", "SM"),
                ("md", "MD"),
                ("lg", "LG"),
            ],
        )
        .bool_control("pill", "Pill", false)
        .bool_control("uniform", "Icon only", false)
        .doc("Square button sized for a single icon")
        .bool_control("disabled", "Disabled", false)
        .bool_control("loading", "Loading", false)
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Danger Disabled")
                .set_string("color", "danger")
                .set_bool("disabled", true),
            Preset::new("Loading").set_bool("loading", true),
            Preset::new("Ghost Icon")
                .set_string("variant", "ghost")
                .set_string("color", "secondary")
                .set_string("size", "xs")
                .set_bool("uniform", true),
            Preset::new("Pill CTA")
                .set_string("size", "lg")
                .set_bool("pill", true),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::Button);

    let variant = match registry.get_string("variant").as_str() {
        "soft" => ButtonVariant::Soft,
        "outline" => ButtonVariant::Outline,
        "ghost" => ButtonVariant::Ghost,
        _ => ButtonVariant::Solid,
    };
    let color = match registry.get_string("color").as_str() {
        "secondary" => ButtonColor::Secondary,
        "danger" => ButtonColor::Danger,
        "success" => ButtonColor::Success,
        _ => ButtonColor::Primary,
    };
    let size = match registry.get_string("size").as_str() {
        "3xs" => ButtonSize::Xxxs,
        "2xs" => ButtonSize::Xxs,
        "xs" => ButtonSize::Xs,
        "sm" => ButtonSize::Sm,
        "lg" => ButtonSize::Lg,
        _ => ButtonSize::Md,
    };
    let pill = registry.get_bool("pill");
    let uniform = registry.get_bool("uniform");
    let disabled = registry.get_bool("disabled");
    let loading = registry.get_bool("loading");

    let mut clicks = use_signal(|| 0u32);

    rsx! {
        MockPanel { current_mock: MockPage::Button, registry,
            div { class: "p-8 bg-gray-900 min-h-full",
                div { class: "mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Interactive Demo" }
                    div { class: "flex items-center gap-4",
                        Button {
                            variant,
                            color,
                            size,
                            pill,
                            uniform,
                            disabled,
                            loading,
                            aria_label: uniform.then(|| "Copy".to_string()),
                            onclick: move |_| clicks += 1,
                            if uniform {
                                CopyIcon {}
                            } else {
                                "Save changes"
                            }
                        }
                        span { class: "text-sm text-gray-500", "Clicked {clicks} times" }
                    }
                }

                div { class: "mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Variants" }
                    div { class: "flex flex-wrap items-center gap-3",
                        Button { variant: ButtonVariant::Solid, "Solid" }
                        Button { variant: ButtonVariant::Soft, "Soft" }
                        Button { variant: ButtonVariant::Outline, "Outline" }
                        Button { variant: ButtonVariant::Ghost, "Ghost" }
                    }
                }

                div { class: "mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Sizes" }
                    div { class: "flex flex-wrap items-center gap-3",
                        Button { size: ButtonSize::Xxxs, "3XS" }
                        Button { size: ButtonSize::Xxs, "2XS" }
                        Button { size: ButtonSize::Xs, "XS" }
                        Button { size: ButtonSize::Sm, "SM" }
                        Button { size: ButtonSize::Md, "MD" }
                        Button { size: ButtonSize::Lg, "LG" }
                    }
                }

                div {
                    h3 { class: "text-sm text-gray-400 mb-3", "With Tooltip" }
                    Tooltip { text: "Copies the snippet to the clipboard",
                        Button {
                            variant: ButtonVariant::Outline,
                            color: ButtonColor::Secondary,
                            size: ButtonSize::Sm,
                            "Hover me"
                        }
                    }
                }
            }
        }
    }
}
