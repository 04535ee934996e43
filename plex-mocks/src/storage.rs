//! Local storage helpers

/// Key for the selected color theme
pub const THEME_KEY: &str = "plex-mocks:theme";
/// Key for the selected viewport breakpoint
pub const VIEWPORT_KEY: &str = "plex-mocks:viewport";

pub fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    let Some(storage) = get_storage() else {
        return;
    };
    if let Err(e) = storage.set_item(key, value) {
        tracing::debug!("Failed to persist {key}: {e:?}");
    }
}

pub fn get_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    get_string(key).and_then(|v| v.parse().ok())
}

pub fn set_display<T: std::fmt::Display>(key: &str, value: T) {
    set_string(key, &value.to_string());
}
