//! Light/dark theme switcher for mock pages

use crate::storage::{self, THEME_KEY};
use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use plex_ui::wasm_utils::MediaQueryListener;
use plex_ui::{MonitorIcon, MoonIcon, SunIcon};

const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockTheme {
    #[default]
    Dark,
    Light,
    /// Follow `prefers-color-scheme`
    System,
}

plex_common::string_enum!(MockTheme {
    Dark => "dark",
    Light => "light",
    System => "system",
});

impl MockTheme {
    /// The concrete theme to render, given whether the OS prefers light.
    pub fn resolve(self, prefers_light: bool) -> MockTheme {
        match self {
            MockTheme::System if prefers_light => MockTheme::Light,
            MockTheme::System => MockTheme::Dark,
            theme => theme,
        }
    }
}

/// Selected theme, restored from and saved to local storage.
pub fn use_theme() -> Signal<MockTheme> {
    let theme = use_signal(|| storage::get_parsed(THEME_KEY).unwrap_or_default());

    use_effect(move || storage::set_display(THEME_KEY, theme()));

    theme
}

/// Whether the OS currently prefers a light color scheme, kept live.
pub fn use_prefers_light() -> Signal<bool> {
    let mut prefers_light = use_signal(|| false);
    let mut listener: Signal<Option<MediaQueryListener>> = use_signal(|| None);

    use_effect(move || {
        let Some(window) = web_sys_x::window() else {
            return;
        };
        // The change callback fires outside the Dioxus runtime
        let runtime = Runtime::current();
        let watch = MediaQueryListener::new(&window, PREFERS_LIGHT_QUERY, move |matches| {
            let _guard = RuntimeGuard::new(runtime.clone());
            if let Ok(mut current) = prefers_light.try_write() {
                if *current != matches {
                    *current = matches;
                }
            }
        });
        if watch.is_none() {
            tracing::debug!("matchMedia unavailable, System theme resolves to dark");
        }
        listener.set(watch);
    });

    use_drop(move || {
        if let Some(watch) = listener.write().take() {
            spawn(async move { drop(watch) });
        }
    });

    prefers_light
}

#[component]
pub fn ThemeSwitcher(theme: Signal<MockTheme>) -> Element {
    let current = theme();

    rsx! {
        div { class: "flex items-center gap-0.5 p-0.5 rounded bg-gray-700",
            for option in MockTheme::ALL.iter().copied() {
                button {
                    class: if option == current { "p-1 rounded bg-gray-500 text-white" } else { "p-1 rounded text-gray-400 hover:text-white" },
                    title: "{option}",
                    aria_label: "{option} theme",
                    aria_pressed: if option == current { "true" } else { "false" },
                    onclick: move |_| theme.set(option),
                    match option {
                        MockTheme::Dark => rsx! { MoonIcon { class: "w-3.5 h-3.5" } },
                        MockTheme::Light => rsx! { SunIcon { class: "w-3.5 h-3.5" } },
                        MockTheme::System => rsx! { MonitorIcon { class: "w-3.5 h-3.5" } },
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
    fn test_theme_parse() {
        for theme in MockTheme::ALL {
            assert_eq!(theme.as_str().parse::<MockTheme>(), Ok(*theme));
        }
        let err = "sepia".parse::<MockTheme>().unwrap_err();
        assert_eq!(err.input(), "sepia");
    }

    #[test]
    fn test_system_theme_follows_preference_changes() {
        let mut prefers_light = false;
        for _ in 0..3 {
            prefers_light = !prefers_light;
            let expected = if prefers_light {
                MockTheme::Light
            } else {
                MockTheme::Dark
            };
            assert_eq!(MockTheme::System.resolve(prefers_light), expected);
            assert_eq!(MockTheme::Dark.resolve(prefers_light), MockTheme::Dark);
            assert_eq!(MockTheme::Light.resolve(prefers_light), MockTheme::Light);
        }
    }

    #[test]
    fn test_system_theme_resolves() {
        assert_eq!(MockTheme::System.resolve(true), MockTheme::Light);
        assert_eq!(MockTheme::System.resolve(false), MockTheme::Dark);
        assert_eq!(MockTheme::Dark.resolve(true), MockTheme::Dark);
        assert_eq!(MockTheme::Light.resolve(false), MockTheme::Light);
    }
}
