//! WASM utilities for browser interop
//!
//! # Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep the closure
//! alive for as long as it is attached. `closure.forget()` leaks both, so the
//! listeners here own their closure and detach it in `Drop`:
//!
//! ```ignore
//! let listener = WindowEventListener::new(window, "keydown", callback);
//! // ...
//! drop(listener); // removeEventListener runs here
//! ```
//!
//! Store the guard in a `Signal<Option<_>>` and take it out on unmount.

use wasm_bindgen_x::prelude::*;

type JsCallback = Closure<dyn FnMut(wasm_bindgen_x::JsValue)>;

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys_x::Window,
    event_name: &'static str,
    callback: JsCallback,
}

impl WindowEventListener {
    /// Attaches `callback` to `event_name` on the window.
    pub fn new(
        window: web_sys_x::Window,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: JsCallback = Closure::wrap(Box::new(callback));

        if let Err(e) = window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to attach window {event_name} listener: {e:?}");
        }

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// A `matchMedia` subscription that reports the match state on creation and
/// on every change, and unsubscribes when dropped.
pub struct MediaQueryListener {
    list: web_sys_x::MediaQueryList,
    callback: JsCallback,
}

impl MediaQueryListener {
    /// Returns `None` when the browser can't evaluate `query`.
    pub fn new(
        window: &web_sys_x::Window,
        query: &str,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> Option<Self> {
        let list = window.match_media(query).ok().flatten()?;

        on_change(list.matches());

        let watched = list.clone();
        let callback: JsCallback = Closure::wrap(Box::new(move |_event: wasm_bindgen_x::JsValue| {
            on_change(watched.matches());
        }));

        if let Err(e) =
            list.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to watch media query {query}: {e:?}");
        }

        Some(Self { list, callback })
    }
}

impl Drop for MediaQueryListener {
    fn drop(&mut self) {
        let _ = self
            .list
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

/// Sleep on the current executor (browser timer on wasm, tokio natively).
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
