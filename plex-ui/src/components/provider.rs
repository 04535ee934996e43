//! Library-wide configuration shared through context
//!
//! For now this only carries how links are rendered: a plain `a`, or an
//! application-supplied component (e.g. a router link).

use dioxus::prelude::*;

/// Everything a custom link renderer needs to draw one link.
#[derive(Clone, PartialEq)]
pub struct LinkArgs {
    pub href: String,
    pub class: String,
    pub children: Element,
}

/// How library components render links
#[derive(Clone, PartialEq, Default)]
pub enum LinkComponent {
    /// Plain `a` element
    #[default]
    Anchor,
    Custom(Callback<LinkArgs, Element>),
}

/// Configuration provided by `PlexUiProvider`
#[derive(Clone, PartialEq, Default)]
pub struct UiConfig {
    pub link_component: LinkComponent,
}

/// Wrap an app (or part of it) to configure plex-ui components.
#[component]
pub fn PlexUiProvider(#[props(default)] link_component: LinkComponent, children: Element) -> Element {
    let mut config = use_context_provider(|| Signal::new(UiConfig::default()));
    if config.peek().link_component != link_component {
        config.set(UiConfig { link_component });
    }

    rsx! {
        {children}
    }
}

/// The configured link renderer, or `Anchor` outside a `PlexUiProvider`.
pub fn use_link_component() -> LinkComponent {
    try_use_context::<Signal<UiConfig>>()
        .map(|config| config.read().link_component.clone())
        .unwrap_or_default()
}

/// A link rendered with the configured strategy.
#[component]
pub fn Link(href: String, #[props(default)] class: Option<String>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    match use_link_component() {
        LinkComponent::Anchor => rsx! {
            a { href: "{href}", class: "{class}", {children} }
        },
        LinkComponent::Custom(render) => render.call(LinkArgs {
            href,
            class,
            children,
        }),
    }
}

/// Clickable text span with hover highlight. No underline.
#[component]
pub fn TextLink(
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        span {
            class: "hover:text-white transition-colors cursor-pointer {extra}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
