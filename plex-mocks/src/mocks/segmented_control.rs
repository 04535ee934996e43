//! SegmentedControl mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use plex_ui::{
    ChartIcon, GridIcon, GutterSize, MenuIcon, Segment, SegmentedControl, SegmentedControlSize,
};

const LABELS: [&str; 4] = ["Overview", "Activity", "Members", "Settings"];
const VALUES: [&str; 4] = ["overview", "activity", "members", "settings"];

#[component]
pub fn SegmentedControlMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "size",
            "Size",
            "md",
            vec![
                ("xs", "XS"),
                ("sm", "SM"),
                ("md", "MD"),
                ("lg", "LG"),
                ("xl", "XL"),
            ],
        )
        .enum_control(
            "gutter",
            "Gutter",
            "sm",
            vec![("xs", "XS"), ("sm", "SM"), ("md", "MD")],
        )
        .int_control("count", "Segments", 3, 2, Some(4))
        .bool_control("pill", "Pill", false)
        .bool_control("block", "Block", false)
        .doc("Stretch to the container width")
        .bool_control("disabled", "Disabled", false)
        .bool_control("badges", "Badges", false)
        .bool_control("disable_last", "Disable last segment", false)
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Pill").set_bool("pill", true),
            Preset::new("Full Width")
                .set_bool("block", true)
                .set_int("count", 4),
            Preset::new("With Badges")
                .set_bool("badges", true)
                .set_string("size", "lg"),
            Preset::new("Disabled").set_bool("disabled", true),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::SegmentedControl);

    let size = match registry.get_string("size").as_str() {
        "xs" => SegmentedControlSize::Xs,
        "sm" => SegmentedControlSize::Sm,
        "lg" => SegmentedControlSize::Lg,
        "xl" => SegmentedControlSize::Xl,
        _ => SegmentedControlSize::Md,
    };
    let gutter_size = match registry.get_string("gutter").as_str() {
        "xs" => GutterSize::Xs,
        "md" => GutterSize::Md,
        _ => GutterSize::Sm,
    };
    let count = registry.get_int("count").clamp(2, 4) as usize;
    let badges = registry.get_bool("badges");
    let disable_last = registry.get_bool("disable_last");

    let segments: Vec<Segment> = (0..count)
        .map(|i| {
            let mut segment = Segment::new(LABELS[i], VALUES[i]);
            if badges && i > 0 {
                segment = segment.badge((i * 4).to_string());
            }
            if disable_last && i == count - 1 {
                segment = segment.disabled();
            }
            segment
        })
        .collect();

    let mut selected = use_signal(|| "overview".to_string());
    let mut layout = use_signal(|| "grid".to_string());

    rsx! {
        MockPanel { current_mock: MockPage::SegmentedControl, registry: registry.clone(),
            div { class: "p-8 bg-gray-900 min-h-full",
                div { class: "mb-8",
                    h3 { class: "text-sm text-gray-400 mb-3", "Interactive Demo" }
                    div { class: "flex flex-col gap-3",
                        SegmentedControl {
                            segments,
                            selected: selected(),
                            on_select: move |value: &'static str| selected.set(value.to_string()),
                            size,
                            gutter_size,
                            pill: registry.get_bool("pill"),
                            block: registry.get_bool("block"),
                            disabled: registry.get_bool("disabled"),
                            aria_label: "Section",
                        }
                        span { class: "text-sm text-gray-500", "Selected: {selected}" }
                    }
                }

                div {
                    h3 { class: "text-sm text-gray-400 mb-3", "With Icons" }
                    SegmentedControl {
                        segments: vec![
                            Segment::new("Grid", "grid").icon(rsx! {
                                GridIcon { class: "w-3.5 h-3.5" }
                            }),
                            Segment::new("List", "list").icon(rsx! {
                                MenuIcon { class: "w-3.5 h-3.5" }
                            }),
                            Segment::new("Chart", "chart").icon(rsx! {
                                ChartIcon { class: "w-3.5 h-3.5" }
                            }),
                        ],
                        selected: layout(),
                        on_select: move |value: &'static str| layout.set(value.to_string()),
                        size: SegmentedControlSize::Sm,
                        aria_label: "Layout",
                    }
                }
            }
        }
    }
}
