//! Source listing that only collapses when it is actually long

use std::rc::Rc;

use dioxus::prelude::*;
use plex_common::code_block::{needs_collapse, DEFAULT_COLLAPSED_HEIGHT};
use plex_ui::{CodeBlock, CollapsibleCodeBlock};

/// Renders `code` in a `CollapsibleCodeBlock` when its measured height
/// overflows `collapsed_height`, otherwise as a plain copyable `CodeBlock`.
///
/// The height comes from an invisible copy of the listing, re-measured
/// whenever it resizes.
#[component]
pub fn CollapsibleSource(
    code: String,
    #[props(default)] language: Option<String>,
    #[props(default = DEFAULT_COLLAPSED_HEIGHT)] collapsed_height: u32,
    #[props(default)] max_expanded_height: Option<u32>,
) -> Element {
    let mut content_height = use_signal(|| None::<f64>);

    let measure = move |mounted: Rc<MountedData>| async move {
        match mounted.get_scroll_size().await {
            Ok(size) => content_height.set(Some(size.height)),
            Err(e) => tracing::debug!("Failed to measure source listing: {e:?}"),
        }
    };

    let collapse = content_height().is_some_and(|h| needs_collapse(h, collapsed_height));

    rsx! {
        div { class: "relative",
            div {
                class: "invisible absolute inset-x-0 top-0 pointer-events-none",
                aria_hidden: "true",
                pre {
                    class: "p-4 text-sm leading-relaxed font-mono",
                    onmounted: move |evt| measure(evt.data()),
                    onresize: move |evt| {
                        if let Ok(size) = evt.data().get_border_box_size() {
                            content_height.set(Some(size.height));
                        }
                    },
                    "{code}"
                }
            }
            if collapse {
                CollapsibleCodeBlock {
                    code: code.clone(),
                    language: language.clone(),
                    collapsed_height,
                    max_expanded_height,
                }
            } else {
                CodeBlock { code: code.clone(), language: language.clone(), copyable: true }
            }
        }
    }
}
