//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for special cases.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] onmousedown: Option<EventHandler<MouseEvent>>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            onmousedown: move |e| {
                if let Some(ref handler) = onmousedown {
                    handler.call(e);
                }
            },
            onclick: move |e| {
                if is_disabled {
                    return;
                }
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled background
    #[default]
    Solid,
    /// Tinted background
    Soft,
    /// Border only
    Outline,
    /// No background - text only with hover
    Ghost,
}

/// Button color role
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonColor {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
}

/// Button size, from the 22px icon buttons used inside cards up to large CTAs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Xxxs,
    Xxs,
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn height(self) -> &'static str {
        match self {
            ButtonSize::Xxxs => "h-[22px] text-xs",
            ButtonSize::Xxs => "h-6 text-xs",
            ButtonSize::Xs => "h-7 text-sm",
            ButtonSize::Sm => "h-8 text-sm",
            ButtonSize::Md => "h-9",
            ButtonSize::Lg => "h-10",
        }
    }

    /// Horizontal padding, or equal width for square/round buttons.
    fn padding(self, uniform: bool) -> &'static str {
        match (self, uniform) {
            (ButtonSize::Xxxs, true) => "w-[22px] justify-center",
            (ButtonSize::Xxs, true) => "w-6 justify-center",
            (ButtonSize::Xs, true) => "w-7 justify-center",
            (ButtonSize::Sm, true) => "w-8 justify-center",
            (ButtonSize::Md, true) => "w-9 justify-center",
            (ButtonSize::Lg, true) => "w-10 justify-center",
            (ButtonSize::Xxxs | ButtonSize::Xxs, false) => "px-2",
            (ButtonSize::Xs, false) => "px-2.5",
            (ButtonSize::Sm, false) => "px-3",
            (ButtonSize::Md, false) => "px-4",
            (ButtonSize::Lg, false) => "px-5",
        }
    }
}

fn variant_class(variant: ButtonVariant, color: ButtonColor) -> &'static str {
    match (variant, color) {
        (ButtonVariant::Solid, ButtonColor::Primary) => "bg-indigo-600 hover:bg-indigo-500 text-white",
        (ButtonVariant::Solid, ButtonColor::Secondary) => "bg-gray-700 hover:bg-gray-600 text-gray-200",
        (ButtonVariant::Solid, ButtonColor::Danger) => "bg-red-600 hover:bg-red-500 text-white",
        (ButtonVariant::Solid, ButtonColor::Success) => "bg-green-600 hover:bg-green-500 text-white",
        (ButtonVariant::Soft, ButtonColor::Primary) => "bg-indigo-500/15 hover:bg-indigo-500/25 text-indigo-300",
        (ButtonVariant::Soft, ButtonColor::Secondary) => "bg-white/5 hover:bg-white/10 text-gray-300",
        (ButtonVariant::Soft, ButtonColor::Danger) => "bg-red-500/15 hover:bg-red-500/25 text-red-300",
        (ButtonVariant::Soft, ButtonColor::Success) => "bg-green-500/15 hover:bg-green-500/25 text-green-300",
        (ButtonVariant::Outline, ButtonColor::Primary) => "border border-indigo-500/60 hover:bg-indigo-500/10 text-indigo-300",
        (ButtonVariant::Outline, ButtonColor::Secondary) => "border border-white/10 hover:bg-white/5 text-gray-300",
        (ButtonVariant::Outline, ButtonColor::Danger) => "border border-red-500/60 hover:bg-red-500/10 text-red-300",
        (ButtonVariant::Outline, ButtonColor::Success) => "border border-green-500/60 hover:bg-green-500/10 text-green-300",
        (ButtonVariant::Ghost, ButtonColor::Primary) => "text-indigo-300 hover:bg-indigo-500/10",
        (ButtonVariant::Ghost, ButtonColor::Secondary) => "text-gray-400 hover:text-white hover:bg-gray-700/50",
        (ButtonVariant::Ghost, ButtonColor::Danger) => "text-red-400 hover:bg-red-500/10",
        (ButtonVariant::Ghost, ButtonColor::Success) => "text-green-400 hover:bg-green-500/10",
    }
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] color: ButtonColor,
    #[props(default)] size: ButtonSize,
    /// Fully rounded ends
    #[props(default)]
    pill: bool,
    /// Equal width and height, for icon-only buttons
    #[props(default)]
    uniform: bool,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center gap-2 shrink-0 transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
    let rounding = if pill { "rounded-full" } else { "rounded-lg" };
    let size_class = size.height();
    let padding = size.padding(uniform);
    let variant_class = variant_class(variant, color);
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        ChromelessButton {
            id,
            disabled,
            loading,
            aria_label,
            class: Some(format!("{base} {rounding} {size_class} {padding} {variant_class} {extra}")),
            onclick,
            {children}
        }
    }
}
