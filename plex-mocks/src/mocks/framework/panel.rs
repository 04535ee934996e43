//! Auto-generated control panel UI

use super::registry::{ControlDef, ControlRegistry, ControlValue};
use super::theme::{use_prefers_light, use_theme, ThemeSwitcher};
use super::viewport::{use_viewport, MockViewport, ViewportSwitcher};
use crate::Route;
use dioxus::prelude::*;
use plex_ui::ChevronRightIcon;

/// Groups on the index page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockSection {
    Primitives,
    Forms,
    Navigation,
    Display,
}

impl MockSection {
    pub const ALL: &'static [MockSection] = &[
        MockSection::Primitives,
        MockSection::Forms,
        MockSection::Navigation,
        MockSection::Display,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MockSection::Primitives => "Primitives",
            MockSection::Forms => "Forms",
            MockSection::Navigation => "Navigation",
            MockSection::Display => "Display",
        }
    }
}

/// Every page in the mock browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockPage {
    Button,
    FloatingLabelInput,
    FieldError,
    Sidebar,
    SegmentedControl,
    ProgressSteps,
    Skeleton,
    CodeBlock,
}

impl MockPage {
    pub const ALL: &'static [MockPage] = &[
        MockPage::Button,
        MockPage::FloatingLabelInput,
        MockPage::FieldError,
        MockPage::Sidebar,
        MockPage::SegmentedControl,
        MockPage::ProgressSteps,
        MockPage::Skeleton,
        MockPage::CodeBlock,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MockPage::Button => "Button",
            MockPage::FloatingLabelInput => "Floating Label Input",
            MockPage::FieldError => "Field Error",
            MockPage::Sidebar => "Sidebar",
            MockPage::SegmentedControl => "Segmented Control",
            MockPage::ProgressSteps => "Progress Steps",
            MockPage::Skeleton => "Skeleton",
            MockPage::CodeBlock => "Code Block",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MockPage::Button => "Variants, colors, sizes, loading and disabled states",
            MockPage::FloatingLabelInput => {
                "Text field whose label floats above the value, with clear button and errors"
            }
            MockPage::FieldError => "Inline validation message",
            MockPage::Sidebar => {
                "Collapsible navigation with groups, sub-menus, cards and a mobile drawer"
            }
            MockPage::SegmentedControl => "Single-choice toggle with icons and badges",
            MockPage::ProgressSteps => "Numbered or minimal step indicator",
            MockPage::Skeleton => "Loading placeholders",
            MockPage::CodeBlock => "Copyable source, collapsed behind a View Code button",
        }
    }

    pub fn section(self) -> MockSection {
        match self {
            MockPage::Button => MockSection::Primitives,
            MockPage::FloatingLabelInput | MockPage::FieldError => MockSection::Forms,
            MockPage::Sidebar | MockPage::SegmentedControl | MockPage::ProgressSteps => {
                MockSection::Navigation
            }
            MockPage::Skeleton | MockPage::CodeBlock => MockSection::Display,
        }
    }

    pub fn to_route(self, state: Option<String>) -> Route {
        match self {
            MockPage::Button => Route::MockButton { state },
            MockPage::FloatingLabelInput => Route::MockFloatingLabelInput { state },
            MockPage::FieldError => Route::MockFieldError { state },
            MockPage::Sidebar => Route::MockSidebar { state },
            MockPage::SegmentedControl => Route::MockSegmentedControl { state },
            MockPage::ProgressSteps => Route::MockProgressSteps { state },
            MockPage::Skeleton => Route::MockSkeleton { state },
            MockPage::CodeBlock => Route::MockCodeBlock { state },
        }
    }
}

/// Main mock panel component that renders controls, presets, and viewport
#[component]
pub fn MockPanel(
    current_mock: MockPage,
    registry: ControlRegistry,
    #[props(default = true)] viewport_enabled: bool,
    #[props(default = "4xl")] max_width: &'static str,
    children: Element,
) -> Element {
    let max_w_class = match max_width {
        "4xl" => "max-w-4xl",
        "6xl" => "max-w-6xl",
        "full" => "max-w-full",
        _ => max_width,
    };
    let theme = use_theme();
    let prefers_light = use_prefers_light();
    let viewport = use_viewport();
    let data_theme = theme().resolve(prefers_light()).as_str();

    rsx! {
        div {
            class: "min-h-screen bg-gray-900 text-white",
            "data-theme": data_theme,
            div { class: "sticky top-0 z-50 bg-gray-800 border-b border-gray-700 p-4",
                div { class: "{max_w_class} mx-auto",
                    MockHeader { current_mock,
                        if viewport_enabled {
                            ViewportSwitcher { selected: viewport }
                        }
                        ThemeSwitcher { theme }
                    }

                    if !registry.presets.is_empty() {
                        PresetBar { registry: registry.clone() }
                    }

                    ControlsRow { registry: registry.clone() }
                }
            }

            div { class: "{max_w_class} mx-auto p-6",
                if viewport_enabled {
                    MockViewport { width: viewport().width, {children} }
                } else {
                    {children}
                }
            }
        }
    }
}

/// Breadcrumb back to the index plus the page's toolbar
#[component]
fn MockHeader(current_mock: MockPage, children: Element) -> Element {
    rsx! {
        div { class: "flex items-center justify-between gap-4 mb-3",
            div { class: "flex items-center gap-2 text-sm",
                Link {
                    to: Route::MockIndex {},
                    class: "text-gray-400 hover:text-white",
                    "Mocks"
                }
                ChevronRightIcon { class: "w-3.5 h-3.5 text-gray-600" }
                h1 { class: "font-semibold", "{current_mock.label()}" }
            }
            div { class: "flex items-center gap-3", {children} }
        }
    }
}

/// Preset buttons bar; the preset matching the current controls is highlighted
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "flex flex-wrap gap-2 mb-3",
            span { class: "text-xs text-gray-500 self-center mr-2", "Presets:" }
            for preset in &registry.presets {
                button {
                    class: if preset.matches(&registry) { "px-2 py-1 text-xs rounded bg-blue-600 text-white" } else { "px-2 py-1 text-xs rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// Auto-generated controls row
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    let visible: Vec<ControlDef> = registry
        .controls
        .iter()
        .filter(|c| c.is_visible(&registry))
        .cloned()
        .collect();
    // Non-inline enums get their own button row; everything else shares one line
    let (enum_rows, inline_controls): (Vec<_>, Vec<_>) = visible
        .into_iter()
        .partition(|c| c.enum_options.is_some() && !c.inline);

    rsx! {
        for control in enum_rows {
            div { class: "flex flex-wrap items-center gap-2 mb-3",
                span { class: "text-xs text-gray-500 w-24", "{control.label}" }
                if let Some(options) = &control.enum_options {
                    for (value , label) in options.iter().copied() {
                        EnumButton {
                            registry: registry.clone(),
                            control_key: control.key,
                            value,
                            label,
                            doc: control.doc,
                        }
                    }
                }
            }
        }

        if !inline_controls.is_empty() {
            div { class: "flex flex-wrap items-center gap-4 text-sm",
                for control in inline_controls {
                    InlineControl { registry: registry.clone(), control }
                }
            }
        }

        if !registry.actions.is_empty() {
            div { class: "flex flex-wrap gap-2 mt-3",
                for action in registry.actions.iter().cloned() {
                    button {
                        class: "px-2 py-1 text-xs rounded border border-gray-600 text-gray-300 hover:bg-gray-700",
                        onclick: move |_| action.callback.call(()),
                        "{action.label}"
                    }
                }
            }
        }
    }
}

/// Individual enum button - reads signal reactively
#[component]
fn EnumButton(
    registry: ControlRegistry,
    control_key: &'static str,
    value: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    // Reading inside component body creates reactive subscription
    let is_selected = registry.get_string(control_key) == value;

    rsx! {
        button {
            class: if is_selected { "px-3 py-1.5 text-sm rounded bg-blue-600 text-white" } else { "px-3 py-1.5 text-sm rounded bg-gray-700 text-gray-300 hover:bg-gray-600" },
            onclick: move |_| registry.set_string(control_key, value.to_string()),
            title: doc.unwrap_or(""),
            "{label}"
        }
    }
}

/// A bool, int, string or inline enum control
#[component]
fn InlineControl(registry: ControlRegistry, control: ControlDef) -> Element {
    let key = control.key;
    let title = control.doc.unwrap_or("");

    match (&control.default, &control.enum_options) {
        (ControlValue::Bool(_), _) => {
            let checked = registry.get_bool(key);
            rsx! {
                label { class: "flex items-center gap-2 text-gray-400", title,
                    input {
                        r#type: "checkbox",
                        checked,
                        onchange: move |e| registry.set_bool(key, e.checked()),
                    }
                    "{control.label}"
                    if control.doc.is_some() {
                        span { class: "text-gray-600", "ⓘ" }
                    }
                }
            }
        }
        (ControlValue::String(_), Some(options)) => {
            let current = registry.get_string(key);
            rsx! {
                label { class: "flex items-center gap-2 text-gray-400", title,
                    "{control.label}"
                    select {
                        class: "bg-gray-700 text-gray-300 text-sm rounded px-2 py-1 border border-gray-600",
                        value: current,
                        onchange: move |e| registry.set_string(key, e.value()),
                        for (value , label) in options.iter().copied() {
                            option { value, "{label}" }
                        }
                    }
                }
            }
        }
        (ControlValue::String(_), None) => {
            let current = registry.get_string(key);
            rsx! {
                label { class: "flex items-center gap-2 text-gray-400", title,
                    "{control.label}"
                    input {
                        class: "bg-gray-700 text-gray-200 text-sm rounded px-2 py-1 border border-gray-600 w-48",
                        value: current,
                        oninput: move |e| registry.set_string(key, e.value()),
                    }
                }
            }
        }
        (ControlValue::Int(_), _) => {
            let (min, max) = control.int_range.unwrap_or((i32::MIN, None));
            let current = registry.get_int(key).to_string();
            rsx! {
                label { class: "flex items-center gap-2 text-gray-400", title,
                    "{control.label}"
                    input {
                        r#type: "number",
                        class: "bg-gray-700 text-gray-200 text-sm rounded px-2 py-1 border border-gray-600 w-16",
                        min: min.to_string(),
                        max: max.map(|m| m.to_string()),
                        value: current,
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse() {
                                registry.set_int(key, value);
                            }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_a_section() {
        for section in MockSection::ALL {
            let count = MockPage::ALL
                .iter()
                .filter(|p| p.section() == *section)
                .count();
            assert!(count > 0, "{} has no pages", section.label());
        }
    }

    #[test]
    fn test_page_routes_carry_state() {
        let route = MockPage::Sidebar.to_route(Some("abc".to_string()));
        assert_eq!(
            route,
            Route::MockSidebar {
                state: Some("abc".to_string())
            }
        );
        assert_eq!(
            MockPage::CodeBlock.to_route(None),
            Route::MockCodeBlock { state: None }
        );
    }

    #[test]
    fn test_page_labels_are_unique() {
        let mut labels: Vec<_> = MockPage::ALL.iter().map(|p| p.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MockPage::ALL.len());
    }
}
