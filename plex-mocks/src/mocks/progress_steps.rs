//! ProgressSteps mock component

use super::framework::{ControlRegistryBuilder, MockPage, MockPanel, Preset};
use dioxus::prelude::*;
use plex_ui::{
    Button, ButtonColor, ButtonSize, ButtonVariant, ConnectorStyle, KeyIcon, ProgressColor,
    ProgressOrientation, ProgressSize, ProgressStep, ProgressSteps, ProgressVariant, UsersIcon,
};

fn onboarding_steps(icons: bool, descriptions: bool) -> Vec<ProgressStep> {
    let mut steps = vec![
        ProgressStep::new("Account"),
        ProgressStep::new("Team"),
        ProgressStep::new("API key"),
        ProgressStep::new("Deploy"),
    ];
    if descriptions {
        let text = [
            "Create your login",
            "Invite collaborators",
            "Generate credentials",
            "Ship the first build",
        ];
        steps = steps
            .into_iter()
            .zip(text)
            .map(|(step, text)| step.description(text))
            .collect();
    }
    if icons {
        steps[1].icon = Some(rsx! {
            UsersIcon { class: "w-1/2 h-1/2" }
        });
        steps[2].icon = Some(rsx! {
            KeyIcon { class: "w-1/2 h-1/2" }
        });
    }
    steps
}

#[component]
pub fn ProgressStepsMock(initial_state: Option<String>) -> Element {
    let registry = ControlRegistryBuilder::new()
        .enum_control(
            "variant",
            "Variant",
            "default",
            vec![("default", "Default"), ("minimal", "Minimal")],
        )
        .enum_control(
            "orientation",
            "Orientation",
            "horizontal",
            vec![("horizontal", "Horizontal"), ("vertical", "Vertical")],
        )
        .visible_when("variant", "default")
        .enum_control(
            "size",
            "Size",
            "md",
            vec![("sm", "SM"), ("md", "MD"), ("lg", "LG")],
        )
        .enum_control(
            "color",
            "Color",
            "default",
            vec![("default", "Default"), ("success", "Success")],
        )
        .inline()
        .enum_control(
            "connector",
            "Connector",
            "solid",
            vec![("solid", "Solid"), ("dashed", "Dashed")],
        )
        .inline()
        .visible_when("variant", "default")
        .int_control("current", "Current step", 2, 1, Some(6))
        .int_control("total", "Segments", 5, -1, Some(12))
        .doc("Zero or negative logs a warning and renders nothing")
        .visible_when("variant", "minimal")
        .bool_control("descriptions", "Descriptions", true)
        .visible_when("variant", "default")
        .bool_control("icons", "Custom icons", false)
        .visible_when("variant", "default")
        .with_presets(vec![
            Preset::new("Default"),
            Preset::new("Vertical").set_string("orientation", "vertical"),
            Preset::new("Complete")
                .set_string("color", "success")
                .set_int("current", 5),
            Preset::new("Dashed Icons")
                .set_string("connector", "dashed")
                .set_bool("icons", true),
            Preset::new("Minimal")
                .set_string("variant", "minimal")
                .set_int("current", 3),
            Preset::new("Minimal No Total")
                .set_string("variant", "minimal")
                .set_int("total", 0),
        ])
        .build(initial_state);

    registry.use_url_sync(MockPage::ProgressSteps);

    let variant: ProgressVariant = registry.get_parsed("variant");
    let orientation: ProgressOrientation = registry.get_parsed("orientation");
    let size: ProgressSize = registry.get_parsed("size");
    let color: ProgressColor = registry.get_parsed("color");
    let connector_style: ConnectorStyle = registry.get_parsed("connector");
    let current = registry.get_int("current").max(1) as usize;
    let total = registry.get_int("total");
    let steps = onboarding_steps(registry.get_bool("icons"), registry.get_bool("descriptions"));
    let step_count = steps.len();

    let mut wizard_step = use_signal(|| 1usize);

    rsx! {
        MockPanel { current_mock: MockPage::ProgressSteps, registry,
            div { class: "p-8 bg-gray-900 min-h-full",
                div { class: "mb-10",
                    h3 { class: "text-sm text-gray-400 mb-3", "Interactive Demo" }
                    ProgressSteps {
                        current,
                        total: Some(total),
                        variant,
                        color,
                        orientation,
                        size,
                        connector_style,
                        steps,
                    }
                }

                div {
                    h3 { class: "text-sm text-gray-400 mb-3", "Wizard" }
                    ProgressSteps {
                        current: wizard_step(),
                        steps: onboarding_steps(false, false),
                        size: ProgressSize::Sm,
                    }
                    div { class: "flex gap-2 mt-4",
                        Button {
                            variant: ButtonVariant::Outline,
                            color: ButtonColor::Secondary,
                            size: ButtonSize::Sm,
                            disabled: wizard_step() <= 1,
                            onclick: move |_| wizard_step -= 1,
                            "Back"
                        }
                        Button {
                            size: ButtonSize::Sm,
                            disabled: wizard_step() > step_count,
                            onclick: move |_| wizard_step += 1,
                            if wizard_step() >= step_count { "Finish" } else { "Next" }
                        }
                    }
                }
            }
        }
    }
}
