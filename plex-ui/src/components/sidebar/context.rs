//! Sidebar state provider and the `use_sidebar` hook
//!
//! `SidebarProvider` owns a `SidebarController` in a signal and shares a
//! `SidebarContext` handle with everything below it. Browser wiring (mobile
//! breakpoint, Cmd/Ctrl+B and Escape) lives here; the state rules live in
//! `plex_common::sidebar`.

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use plex_common::keyboard::KeyPress;
use plex_common::sidebar::{
    KeyOutcome, OpenChange, SidebarCollapsible, SidebarConstants, SidebarController, SidebarState,
};
use wasm_bindgen_x::JsCast;

use crate::persistence;
use crate::wasm_utils::{MediaQueryListener, WindowEventListener};

/// Handle to the nearest provider's sidebar state.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    controller: Signal<SidebarController>,
    on_open_change: Option<EventHandler<bool>>,
}

impl SidebarContext {
    /// Current state, subscribing the caller.
    pub fn snapshot(&self) -> SidebarController {
        *self.controller.read()
    }

    pub fn state(&self) -> SidebarState {
        self.controller.read().state()
    }

    pub fn open(&self) -> bool {
        self.controller.read().open()
    }

    pub fn open_mobile(&self) -> bool {
        self.controller.read().open_mobile()
    }

    pub fn is_mobile(&self) -> bool {
        self.controller.read().is_mobile()
    }

    pub fn collapsible(&self) -> SidebarCollapsible {
        self.controller.read().collapsible()
    }

    pub fn set_open(&self, open: bool) {
        self.update_open(|_| open);
    }

    /// Set the desktop open flag from its current effective value.
    pub fn update_open(&self, f: impl FnOnce(bool) -> bool) {
        let mut controller = self.controller;
        let change = controller.write().update_open(f);
        self.apply(change);
    }

    pub fn set_open_mobile(&self, open_mobile: bool) {
        let mut controller = self.controller;
        controller.write().set_open_mobile(open_mobile);
    }

    /// Flip the drawer on mobile, the desktop sidebar otherwise.
    pub fn toggle_sidebar(&self) {
        let mut controller = self.controller;
        let change = controller.write().toggle();
        if let Some(change) = change {
            self.apply(change);
        }
    }

    /// Report a desktop change to the owner (if controlled) and persist it.
    fn apply(&self, change: OpenChange) {
        if change.delegated {
            if let Some(handler) = self.on_open_change {
                handler.call(change.open);
            }
        }
        persistence::write_sidebar_cookie(&change);
    }

    fn handle_key(&self, press: &KeyPress) -> KeyOutcome {
        let mut controller = self.controller;
        // The window listener can outlive the scope by one event
        let Ok(mut guard) = controller.try_write() else {
            return KeyOutcome::Ignored;
        };
        let outcome = guard.handle_key(press);
        drop(guard);

        if let KeyOutcome::Toggled(Some(change)) = outcome {
            self.apply(change);
        }
        outcome
    }
}

/// The sidebar state of the nearest `SidebarProvider`.
///
/// # Panics
///
/// Panics when called outside a `SidebarProvider`.
pub fn use_sidebar() -> SidebarContext {
    try_use_context::<SidebarContext>().expect("use_sidebar must be used within a SidebarProvider")
}

fn key_press(event: &web_sys_x::KeyboardEvent) -> KeyPress {
    KeyPress {
        key: event.key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        alt: event.alt_key(),
        shift: event.shift_key(),
    }
}

/// Provides sidebar state to its subtree and renders the layout root.
#[component]
pub fn SidebarProvider(
    /// Initial desktop state when uncontrolled
    #[props(default = true)]
    default_open: bool,
    /// Controlled desktop state
    #[props(default)]
    open: Option<bool>,
    /// Receives desktop changes instead of internal state
    #[props(default)]
    on_open_change: Option<EventHandler<bool>>,
    #[props(default)] collapsible: SidebarCollapsible,
    /// Start from the cookie written by a previous session, when uncontrolled
    #[props(default)]
    restore_state: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] style: Option<String>,
    children: Element,
) -> Element {
    let controlled = on_open_change.is_some();
    let mut controller = use_signal(|| {
        let mut controller =
            SidebarController::new(default_open, collapsible).with_change_callback(controlled);
        controller.set_open_prop(open);
        controller
    });

    // Follow the controlled value in the same render it changes
    if controller.peek().open_prop() != open {
        controller.write().set_open_prop(open);
    }

    let ctx = use_context_provider(|| SidebarContext {
        controller,
        on_open_change,
    });

    let mut media_listener: Signal<Option<MediaQueryListener>> = use_signal(|| None);
    let mut key_listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    // use_effect rather than use_hook: window() is an IPC call on desktop and
    // must not run during render.
    use_effect(move || {
        let Some(window) = web_sys_x::window() else {
            return;
        };

        if restore_state {
            if let Some(saved) = persistence::persisted_sidebar_open() {
                controller.write().restore_open(saved);
            }
        }

        // Both callbacks run from wasm-bindgen outside the Dioxus runtime
        let runtime = Runtime::current();

        let media_runtime = runtime.clone();
        let media = MediaQueryListener::new(
            &window,
            &SidebarConstants::mobile_media_query(),
            move |matches| {
                let _guard = RuntimeGuard::new(media_runtime.clone());
                if let Ok(mut guard) = controller.try_write() {
                    if guard.is_mobile() != matches {
                        guard.set_is_mobile(matches);
                    }
                }
            },
        );
        if media.is_none() {
            tracing::debug!("matchMedia unavailable, sidebar stays in desktop mode");
        }

        let keys = WindowEventListener::new(window, "keydown", move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let Some(event) = event.dyn_ref::<web_sys_x::KeyboardEvent>() else {
                return;
            };
            if ctx.handle_key(&key_press(event)).prevents_default() {
                event.prevent_default();
            }
        });

        media_listener.set(media);
        key_listener.set(Some(keys));
    });

    use_drop(move || {
        // Detaching runs IPC on desktop, which must not happen inside the
        // diff cycle.
        let media = media_listener.write().take();
        let keys = key_listener.write().take();
        if media.is_some() || keys.is_some() {
            spawn(async move {
                drop(media);
                drop(keys);
            });
        }
    });

    let snapshot = ctx.snapshot();
    let mobile_menu = if snapshot.open_mobile() {
        "visible"
    } else {
        "hidden"
    };
    let width = SidebarConstants::WIDTH;
    let width_mobile = SidebarConstants::WIDTH_MOBILE;
    let width_icon = SidebarConstants::WIDTH_ICON;
    let extra = class.as_deref().unwrap_or("");
    let style = style.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "group/sidebar-wrapper relative flex w-full min-h-0 {extra}",
            style: "--sidebar-width: {width}; --sidebar-width-mobile: {width_mobile}; --sidebar-width-icon: {width_icon}; {style}",
            "data-sidebar": snapshot.state().as_str(),
            "data-mobile-menu": mobile_menu,
            "data-collapsible": snapshot.collapsible().as_str(),
            {children}
        }
    }
}
