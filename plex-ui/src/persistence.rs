//! Cookie-backed persistence of the sidebar preference
//!
//! Writes are best-effort: outside a browser, or if the document refuses the
//! cookie, the change is only logged.

use plex_common::cookie::parse_sidebar_cookie;
use plex_common::sidebar::OpenChange;
use wasm_bindgen_x::JsCast;

fn html_document() -> Option<web_sys_x::HtmlDocument> {
    web_sys_x::window()?
        .document()?
        .dyn_into::<web_sys_x::HtmlDocument>()
        .ok()
}

/// Persist a desktop open-state change for the next visit.
pub fn write_sidebar_cookie(change: &OpenChange) {
    let Some(document) = html_document() else {
        tracing::debug!("No document, sidebar state not persisted");
        return;
    };

    if let Err(e) = document.set_cookie(&change.cookie()) {
        tracing::debug!("Failed to persist sidebar state: {e:?}");
    }
}

/// The open flag saved by a previous session, if any.
///
/// Performs a webview IPC call on desktop, so call it from an effect or an
/// event handler rather than during render there.
pub fn persisted_sidebar_open() -> Option<bool> {
    let cookies = html_document()?.cookie().ok()?;
    parse_sidebar_cookie(&cookies)
}
