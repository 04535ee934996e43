//! Mock pages with URL state persistence

use crate::mocks::framework::{MockPage, MockSection};
use crate::mocks::{
    ButtonMock, CodeBlockMock, FieldErrorMock, FloatingLabelInputMock, ProgressStepsMock,
    SegmentedControlMock, SidebarMock, SkeletonMock,
};
use crate::ui::LinkCard;
use crate::Route;
use dioxus::prelude::*;
use plex_ui::{
    Button, ButtonColor, ButtonSize, ButtonVariant, FieldError, ProgressStep, ProgressSteps,
    ProgressVariant, Segment, SegmentedControl, SegmentedControlSize, Skeleton,
};

#[component]
pub fn MockIndex() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "plex-ui mocks" }

            h2 { class: "text-lg font-semibold text-gray-400 mb-3", "At a glance" }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 mb-8",
                SpecimenCard { title: "Button", to: MockPage::Button.to_route(None),
                    div { class: "flex flex-wrap gap-2",
                        Button { size: ButtonSize::Sm, "Primary" }
                        Button {
                            variant: ButtonVariant::Soft,
                            color: ButtonColor::Secondary,
                            size: ButtonSize::Sm,
                            "Soft"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            color: ButtonColor::Danger,
                            size: ButtonSize::Sm,
                            "Delete"
                        }
                    }
                }

                SpecimenCard {
                    title: "Segmented Control",
                    to: MockPage::SegmentedControl.to_route(None),
                    SegmentedControl {
                        segments: vec![Segment::new("Day", "day"), Segment::new("Week", "week"), Segment::new("Month", "month")],
                        selected: "week".to_string(),
                        on_select: |_| {},
                        size: SegmentedControlSize::Sm,
                    }
                }

                SpecimenCard {
                    title: "Progress Steps",
                    to: MockPage::ProgressSteps.to_route(None),
                    div { class: "space-y-4",
                        ProgressSteps {
                            current: 2,
                            steps: vec![ProgressStep::new("Plan"), ProgressStep::new("Build"), ProgressStep::new("Ship")],
                        }
                        ProgressSteps {
                            current: 3,
                            total: Some(5),
                            variant: ProgressVariant::Minimal,
                        }
                    }
                }

                SpecimenCard { title: "Skeleton", to: MockPage::Skeleton.to_route(None),
                    div { class: "flex items-center gap-3",
                        Skeleton { circle: true, class: "w-8 h-8" }
                        div { class: "flex-1 space-y-2",
                            Skeleton { class: "h-3 w-2/3" }
                            Skeleton { class: "h-3 w-1/3" }
                        }
                    }
                }

                SpecimenCard {
                    title: "Field Error",
                    to: MockPage::FieldError.to_route(None),
                    FieldError { "This field is required" }
                }
            }

            for section in MockSection::ALL.iter().copied() {
                h2 { class: "text-lg font-semibold text-gray-400 mb-3", "{section.label()}" }
                div { class: "space-y-2 mb-8",
                    for page in MockPage::ALL.iter().copied().filter(|p| p.section() == section) {
                        LinkCard { key: "{page.label()}", page }
                    }
                }
            }
        }
    }
}

/// A card showing specimen samples with a link to the full page
#[component]
fn SpecimenCard(title: &'static str, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

#[component]
pub fn MockButton(state: Option<String>) -> Element {
    rsx! {
        ButtonMock { initial_state: state }
    }
}

#[component]
pub fn MockSidebar(state: Option<String>) -> Element {
    rsx! {
        SidebarMock { initial_state: state }
    }
}

#[component]
pub fn MockSegmentedControl(state: Option<String>) -> Element {
    rsx! {
        SegmentedControlMock { initial_state: state }
    }
}

#[component]
pub fn MockSkeleton(state: Option<String>) -> Element {
    rsx! {
        SkeletonMock { initial_state: state }
    }
}

#[component]
pub fn MockFloatingLabelInput(state: Option<String>) -> Element {
    rsx! {
        FloatingLabelInputMock { initial_state: state }
    }
}

#[component]
pub fn MockProgressSteps(state: Option<String>) -> Element {
    rsx! {
        ProgressStepsMock { initial_state: state }
    }
}

#[component]
pub fn MockFieldError(state: Option<String>) -> Element {
    rsx! {
        FieldErrorMock { initial_state: state }
    }
}

#[component]
pub fn MockCodeBlock(state: Option<String>) -> Element {
    rsx! {
        CodeBlockMock { initial_state: state }
    }
}
