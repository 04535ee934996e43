//! Step progress indicator: numbered steps with connectors, or a minimal bar

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use plex_common::progress::{self, StepState};
pub use plex_common::progress::{
    ConnectorStyle, ProgressColor, ProgressOrientation, ProgressSize, ProgressVariant,
};

use crate::components::icons::CheckIcon;

/// One step of a `ProgressSteps` indicator
#[derive(Clone, PartialEq)]
pub struct ProgressStep {
    pub title: String,
    pub description: Option<String>,
    /// Replaces the step number while the step isn't completed
    pub icon: Option<Element>,
    pub disabled: bool,
}

impl ProgressStep {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            icon: None,
            disabled: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: Element) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

fn indicator_size(size: ProgressSize) -> &'static str {
    match size {
        ProgressSize::Sm => "w-6 h-6 text-xs",
        ProgressSize::Md => "w-8 h-8 text-sm",
        ProgressSize::Lg => "w-10 h-10 text-base",
    }
}

fn indicator_color(state: StepState, color: ProgressColor) -> &'static str {
    match (state, color) {
        (StepState::Completed, ProgressColor::Default) => "bg-indigo-600 text-white",
        (StepState::Completed, ProgressColor::Success) => "bg-green-600 text-white",
        (StepState::Active, ProgressColor::Default) => "border-2 border-indigo-500 text-indigo-300",
        (StepState::Active, ProgressColor::Success) => "border-2 border-green-500 text-green-300",
        (StepState::Inactive, _) => "border border-white/15 text-gray-500",
    }
}

/// Progress through a sequence of steps. `current` is 1-indexed.
///
/// The minimal variant ignores `steps` and draws `total` bar segments.
#[component]
pub fn ProgressSteps(
    current: usize,
    #[props(default)] total: Option<i32>,
    #[props(default)] variant: ProgressVariant,
    #[props(default)] color: ProgressColor,
    #[props(default)] orientation: ProgressOrientation,
    #[props(default)] size: ProgressSize,
    #[props(default)] connector_style: ConnectorStyle,
    #[props(default)] steps: Vec<ProgressStep>,
    #[props(default)] class: Option<String>,
) -> Element {
    let warned = use_hook(|| Rc::new(Cell::new(false)));
    let extra = class.as_deref().unwrap_or("");

    if variant == ProgressVariant::Minimal {
        let segment_count = match progress::minimal_total(total) {
            Some(count) => count,
            None => {
                if !warned.replace(true) {
                    tracing::warn!(
                        "ProgressSteps minimal variant needs a positive total, got {total:?}"
                    );
                }
                0
            }
        };
        let filled = match color {
            ProgressColor::Default => "data-[state=completed]:bg-indigo-500",
            ProgressColor::Success => "data-[state=completed]:bg-green-500",
        };

        return rsx! {
            nav {
                aria_label: "Progress",
                class: "w-full {extra}",
                "data-size": size.as_str(),
                "data-color": color.as_str(),
                "data-variant": "minimal",
                div { class: "flex gap-1.5",
                    for (i , state) in progress::minimal_segments(current, segment_count).into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "h-1 flex-1 rounded-full bg-white/10 {filled}",
                            "data-state": state.as_str(),
                        }
                    }
                }
            }
        };
    }

    let total_steps = steps.len();
    let vertical = orientation == ProgressOrientation::Vertical;
    let list_class = if vertical {
        "flex flex-col gap-4"
    } else {
        "flex items-start"
    };
    let connector_border = match connector_style {
        ConnectorStyle::Solid => "border-solid",
        ConnectorStyle::Dashed => "border-dashed",
    };
    let connector_class = if vertical {
        format!("absolute left-[calc(theme(spacing.4)-1px)] top-10 bottom-[-1rem] border-l border-white/15 {connector_border}")
    } else {
        format!("flex-1 mx-3 mt-4 border-t border-white/15 {connector_border}")
    };
    let indicator_size = indicator_size(size);

    rsx! {
        nav {
            aria_label: "Progress",
            class: "{extra}",
            "data-size": size.as_str(),
            "data-color": color.as_str(),
            "data-variant": variant.as_str(),
            ol {
                class: "{list_class}",
                "data-orientation": orientation.as_str(),
                "data-connector": connector_style.as_str(),
                for (index , step) in steps.into_iter().enumerate() {
                    {
                        let state = progress::step_state(index, current);
                        let last = progress::is_last_step(index, total_steps);
                        let indicator_color = indicator_color(state, color);
                        let item_class = if vertical { "relative flex gap-3" } else if last { "flex items-start" } else { "flex flex-1 items-start" };
                        let dimmed = if step.disabled { "opacity-50" } else { "" };
                        rsx! {
                            li {
                                key: "{index}",
                                class: "{item_class} {dimmed}",
                                "data-state": state.as_str(),
                                "data-disabled": step.disabled.then_some(""),
                                aria_current: (state == StepState::Active).then_some("step"),
                                div { class: "flex items-center justify-center shrink-0 rounded-full font-medium {indicator_size} {indicator_color}",
                                    if state == StepState::Completed {
                                        CheckIcon { class: "w-1/2 h-1/2" }
                                    } else if let Some(icon) = step.icon {
                                        {icon}
                                    } else {
                                        "{progress::step_number(index)}"
                                    }
                                }
                                div { class: if vertical { "pt-1" } else { "ml-2 pt-1" },
                                    div { class: "text-sm font-medium text-gray-200", "{step.title}" }
                                    if let Some(description) = step.description {
                                        div { class: "text-xs text-gray-500", "{description}" }
                                    }
                                }
                                if !last {
                                    div { class: "{connector_class}", aria_hidden: "true" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
