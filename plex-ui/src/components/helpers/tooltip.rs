//! Tooltip component using popover API + floating-ui for positioning
//!
//! `popover="manual"` puts the bubble in the top layer so it escapes the
//! sidebar's overflow clipping; floating-ui places it next to the anchor.
//!
//! - **`use_tooltip_handle()`**: hook returning a `TooltipHandle` with
//!   `onmounted()`, `show()`, `hide()`.
//! - **`TooltipPopover`**: the bubble alone, driven by a handle.
//! - **`Tooltip`**: wraps children in a span that is both anchor and trigger.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard, Task};
use wasm_bindgen_x::JsCast;

use crate::floating_ui::{self, ComputePositionOptions, Placement};
use crate::wasm_utils::{sleep_ms, WindowEventListener};

/// Delay before showing tooltip (in milliseconds)
const TOOLTIP_DELAY_MS: u64 = 500;

/// Gap between anchor and bubble in pixels
const TOOLTIP_OFFSET: f64 = 6.0;

const HIDDEN_STYLE: &str =
    "position: absolute; top: 0; left: 0; width: max-content; margin: 0; opacity: 0;";

/// Handle for controlling tooltip visibility and anchor positioning.
#[derive(Clone, Copy, PartialEq)]
pub struct TooltipHandle {
    anchor: Signal<Option<Rc<MountedData>>>,
    is_visible: Signal<bool>,
    hover_task: Signal<Option<Task>>,
}

impl TooltipHandle {
    /// Callback for the anchor element's `onmounted`.
    pub fn onmounted(&self) -> impl FnMut(MountedEvent) {
        let mut anchor = self.anchor;
        move |evt: MountedEvent| {
            anchor.set(Some(evt.data()));
        }
    }

    /// Starts the delayed show. Wire to mouseenter/focus of the trigger.
    pub fn show(&self) {
        let mut hover_task = self.hover_task;
        let mut is_visible = self.is_visible;
        if let Some(task) = hover_task.take() {
            task.cancel();
        }
        let task = spawn(async move {
            sleep_ms(TOOLTIP_DELAY_MS).await;
            is_visible.set(true);
        });
        hover_task.set(Some(task));
    }

    /// Hides immediately. Wire to mouseleave/blur of the trigger.
    pub fn hide(&self) {
        let mut hover_task = self.hover_task;
        let mut is_visible = self.is_visible;
        if let Some(task) = hover_task.take() {
            task.cancel();
        }
        is_visible.set(false);
    }
}

/// Hook that creates a `TooltipHandle` for manual tooltip control.
///
/// ```ignore
/// let tip = use_tooltip_handle();
/// rsx! {
///     button {
///         onmounted: tip.onmounted(),
///         onmouseenter: move |_| tip.show(),
///         onmouseleave: move |_| tip.hide(),
///         HomeIcon {}
///     }
///     TooltipPopover { handle: tip, text: "Home", placement: Placement::Right }
/// }
/// ```
pub fn use_tooltip_handle() -> TooltipHandle {
    let anchor = use_signal(|| None::<Rc<MountedData>>);
    let mut is_visible = use_signal(|| false);
    let mut hover_task = use_signal(|| None::<Task>);

    // Hide when the window loses focus.
    let mut blur_listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    // use_effect rather than use_hook: window() is an IPC call on desktop and
    // must not run during render.
    use_effect(move || {
        let Some(window) = web_sys_x::window() else {
            return;
        };

        // The blur callback runs outside the Dioxus runtime.
        let runtime = Runtime::current();

        let listener = WindowEventListener::new(window, "blur", move |_| {
            let _guard = RuntimeGuard::new(runtime.clone());
            // Signals may already be dropped if the component unmounted
            // before the deferred cleanup ran.
            if let Ok(mut guard) = hover_task.try_write() {
                if let Some(task) = guard.take() {
                    task.cancel();
                }
            }
            if let Ok(mut guard) = is_visible.try_write() {
                *guard = false;
            }
        });

        blur_listener.set(Some(listener));
    });

    use_drop(move || {
        if let Some(task) = hover_task.peek().as_ref() {
            task.cancel();
        }
        // Dropping the listener during scope teardown would run IPC inside the
        // diff cycle, so move it into a task.
        if let Some(listener) = blur_listener.write().take() {
            spawn(async move {
                drop(listener);
            });
        }
    });

    TooltipHandle {
        anchor,
        is_visible,
        hover_task,
    }
}

fn popover_is_open(floating: &web_sys_x::Element) -> bool {
    floating.matches(":popover-open").unwrap_or(false)
}

fn call_method(target: &web_sys_x::Element, name: &str) {
    let Ok(method) = js_sys_x::Reflect::get(target, &name.into()) else {
        return;
    };
    if let Some(func) = method.dyn_ref::<js_sys_x::Function>() {
        if let Err(e) = func.call0(target) {
            tracing::debug!("{name} failed: {e:?}");
        }
    }
}

/// Tooltip bubble positioned via popover API + floating-ui.
#[component]
pub fn TooltipPopover(
    /// Handle from `use_tooltip_handle()`
    handle: TooltipHandle,
    text: String,
    #[props(default)] placement: Placement,
    /// Prevent text wrapping
    #[props(default = true)]
    nowrap: bool,
) -> Element {
    // Copy parent-owned signals into local ones so the effect subscribes from
    // this component's scope.
    let mut local_visible = use_signal(|| false);
    local_visible.set((handle.is_visible)());
    let mut local_anchor: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    local_anchor.set((handle.anchor)());
    let mut floating_ref: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    use_effect(move || {
        let visible = local_visible();

        let Some(floating_mounted) = floating_ref() else {
            return;
        };
        let Some(floating) = floating_mounted.downcast::<web_sys_x::Element>().cloned() else {
            return;
        };

        let is_open = popover_is_open(&floating);

        if !visible {
            if is_open {
                call_method(&floating, "hidePopover");
            }
            return;
        }
        if is_open {
            return;
        }

        let _ = floating.set_attribute("style", HIDDEN_STYLE);
        call_method(&floating, "showPopover");

        let Some(anchor_mounted) = local_anchor() else {
            return;
        };
        let Some(anchor_el) = anchor_mounted.downcast::<web_sys_x::Element>().cloned() else {
            return;
        };

        let options = ComputePositionOptions {
            placement,
            offset: Some(TOOLTIP_OFFSET),
            cross_axis_offset: None,
            flip: true,
            shift: true,
        };

        spawn(async move {
            match floating_ui::compute_position(&anchor_el, &floating, options).await {
                Ok(result) => {
                    let style = format!(
                        "position: absolute; top: 0; left: 0; width: max-content; margin: 0; transform: translate({}px, {}px); opacity: 1;",
                        result.x, result.y
                    );
                    let _ = floating.set_attribute("style", &style);
                }
                Err(e) => tracing::debug!("Tooltip positioning failed: {e:?}"),
            }
        });
    });

    let wrap = if nowrap { "whitespace-nowrap" } else { "max-w-xs" };

    rsx! {
        div {
            popover: "manual",
            role: "tooltip",
            class: "px-2.5 py-1.5 text-xs leading-relaxed text-gray-200 bg-gray-900 rounded-lg shadow-xl border border-white/5 {wrap}",
            style: HIDDEN_STYLE,
            onmounted: move |evt: MountedEvent| floating_ref.set(Some(evt.data())),
            "{text}"
        }
    }
}

/// A hover-triggered tooltip that wraps children.
///
/// ```ignore
/// Tooltip { text: "Settings", placement: Placement::Right,
///     button { SettingsIcon {} }
/// }
/// ```
#[component]
pub fn Tooltip(
    text: String,
    #[props(default)] placement: Placement,
    #[props(default = true)] nowrap: bool,
    children: Element,
) -> Element {
    let handle = use_tooltip_handle();

    rsx! {
        span {
            class: "flex min-w-0",
            onmounted: handle.onmounted(),
            onmouseenter: move |_| handle.show(),
            onmouseleave: move |_| handle.hide(),
            onfocusin: move |_| handle.show(),
            onfocusout: move |_| handle.hide(),
            {children}
        }
        TooltipPopover { handle, text, placement, nowrap }
    }
}
