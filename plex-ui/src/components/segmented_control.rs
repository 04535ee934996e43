//! Segmented control component: a group of toggle buttons where one is selected

use dioxus::prelude::*;

/// A single segment in a segmented control
#[derive(Clone, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Option<Element>,
    /// Small count or tag after the label
    pub badge: Option<String>,
    pub disabled: bool,
}

impl Segment {
    pub fn new(label: &'static str, value: &'static str) -> Self {
        Self {
            label,
            value,
            icon: None,
            badge: None,
            disabled: false,
        }
    }

    pub fn icon(mut self, icon: Element) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SegmentedControlSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl SegmentedControlSize {
    fn segment_class(self) -> &'static str {
        match self {
            SegmentedControlSize::Xs => "h-6 px-2 text-xs",
            SegmentedControlSize::Sm => "h-7 px-2.5 text-sm",
            SegmentedControlSize::Md => "h-8 px-3 text-sm",
            SegmentedControlSize::Lg => "h-9 px-3.5",
            SegmentedControlSize::Xl => "h-10 px-4",
        }
    }
}

/// Space between the track and the selected segment
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GutterSize {
    Xs,
    #[default]
    Sm,
    Md,
}

impl GutterSize {
    fn padding(self) -> &'static str {
        match self {
            GutterSize::Xs => "p-0.5 gap-0.5",
            GutterSize::Sm => "p-1 gap-1",
            GutterSize::Md => "p-1.5 gap-1.5",
        }
    }
}

/// A row of toggle buttons where exactly one is selected
#[component]
pub fn SegmentedControl(
    segments: Vec<Segment>,
    selected: String,
    on_select: EventHandler<&'static str>,
    #[props(default)] size: SegmentedControlSize,
    #[props(default)] gutter_size: GutterSize,
    /// Fully rounded track and segments
    #[props(default)]
    pill: bool,
    /// Stretch to the container width with equal segments
    #[props(default)]
    block: bool,
    /// Disable every segment
    #[props(default)]
    disabled: bool,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let rounding = if pill { "rounded-full" } else { "rounded-lg" };
    let width = if block { "flex w-full" } else { "inline-flex" };
    let gutter = gutter_size.padding();
    let segment_size = size.segment_class();
    let segment_width = if block { "flex-1 justify-center" } else { "" };
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            role: "radiogroup",
            aria_label: aria_label.as_deref(),
            aria_disabled: disabled.then_some("true"),
            class: "{width} {gutter} {rounding} bg-gray-800/50 {extra}",
            for segment in segments {
                {
                    let is_selected = segment.value == selected;
                    let is_disabled = disabled || segment.disabled;
                    let value = segment.value;
                    let state = if is_selected {
                        "bg-gray-600 text-white shadow-sm"
                    } else {
                        "text-gray-400 hover:text-white"
                    };
                    rsx! {
                        button {
                            key: "{value}",
                            r#type: "button",
                            role: "radio",
                            aria_checked: if is_selected { "true" } else { "false" },
                            disabled: is_disabled,
                            tabindex: if is_selected { "0" } else { "-1" },
                            "data-state": if is_selected { "on" } else { "off" },
                            class: "inline-flex items-center gap-1.5 transition-colors disabled:opacity-50 disabled:cursor-not-allowed {rounding} {segment_size} {segment_width} {state}",
                            onclick: move |_| {
                                if !is_disabled {
                                    on_select.call(value);
                                }
                            },
                            if let Some(icon) = segment.icon {
                                span { class: "flex shrink-0", {icon} }
                            }
                            "{segment.label}"
                            if let Some(badge) = segment.badge {
                                span { class: "px-1.5 rounded-full bg-white/10 text-xs text-gray-300", "{badge}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
