//! plex-mocks - Interactive component browser for plex-ui
//!
//! Every component gets a page with live controls, presets and a viewport
//! switcher. Control state lives in the `?state=` query parameter so a
//! configuration can be shared by copying the URL.

pub mod mocks;
pub mod pages;
pub mod storage;
pub mod ui;

use dioxus::prelude::*;
use pages::{
    MockButton, MockCodeBlock, MockFieldError, MockFloatingLabelInput, MockIndex,
    MockProgressSteps, MockSegmentedControl, MockSidebar, MockSkeleton,
};
use plex_ui::{LinkArgs, LinkComponent, PlexUiProvider};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
pub const FLOATING_UI_CORE: &str =
    "https://cdn.jsdelivr.net/npm/@floating-ui/core@1.6.8/dist/floating-ui.core.umd.min.js";
pub const FLOATING_UI_DOM: &str =
    "https://cdn.jsdelivr.net/npm/@floating-ui/dom@1.6.12/dist/floating-ui.dom.umd.min.js";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    MockIndex {},
    #[route("/button?:state")]
    MockButton { state: Option<String> },
    #[route("/sidebar?:state")]
    MockSidebar { state: Option<String> },
    #[route("/segmented-control?:state")]
    MockSegmentedControl { state: Option<String> },
    #[route("/skeleton?:state")]
    MockSkeleton { state: Option<String> },
    #[route("/floating-label-input?:state")]
    MockFloatingLabelInput { state: Option<String> },
    #[route("/progress-steps?:state")]
    MockProgressSteps { state: Option<String> },
    #[route("/field-error?:state")]
    MockFieldError { state: Option<String> },
    #[route("/code-block?:state")]
    MockCodeBlock { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    // plex-ui links navigate through the router instead of reloading the page
    let router_link = use_callback(|args: LinkArgs| {
        rsx! {
            Link { to: args.href, class: args.class, {args.children} }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Script { src: FLOATING_UI_CORE }
        document::Script { src: FLOATING_UI_DOM }
        PlexUiProvider { link_component: LinkComponent::Custom(router_link),
            div { class: "min-h-screen", Router::<Route> {} }
        }
    }
}
