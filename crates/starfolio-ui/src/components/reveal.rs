//! Scroll reveal wrapper.

use dioxus::prelude::*;

use crate::context::use_page;

/// Wraps content that fades in the first time it scrolls into view.
///
/// The `id` must be unique on the page; the observer script reports
/// intersections by element id.
#[component]
pub fn Reveal(
    id: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let page = use_page();
    let base = class.unwrap_or_default();
    let full_class = page.reveal_class(&id, &base);
    let target = id.clone();

    rsx! {
        div {
            id: "{id}",
            class: "{full_class}",
            "data-reveal": "true",
            onmounted: move |_| {
                let mut reveal = page.reveal;
                reveal.write().observe(target.clone());
            },
            {children}
        }
    }
}
