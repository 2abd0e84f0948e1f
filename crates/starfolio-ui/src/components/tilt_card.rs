//! Project card with pointer-follow tilt.

use std::rc::Rc;

use dioxus::prelude::*;
use starfolio_core::Tilt;

use crate::context::use_page;

/// Project card that tilts toward the pointer and reveals on scroll.
#[component]
pub fn TiltCard(id: String, children: Element) -> Element {
    let page = use_page();
    let mut element: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut transform = use_signal(String::new);

    let full_class = page.reveal_class(&id, "project-card");
    let target = id.clone();

    rsx! {
        div {
            id: "{id}",
            class: "{full_class}",
            style: "transform: {transform};",
            "data-reveal": "true",
            onmounted: move |evt: MountedEvent| {
                element.set(Some(evt.data()));
                let mut reveal = page.reveal;
                reveal.write().observe(target.clone());
            },
            onmousemove: move |evt: MouseEvent| async move {
                let Some(el) = element() else {
                    return;
                };
                let Ok(rect) = el.get_client_rect().await else {
                    return;
                };
                let point = evt.element_coordinates();
                let tilt = Tilt::from_pointer(rect.width(), rect.height(), point.x, point.y, &page.config.read());
                transform.set(tilt.transform());
            },
            onmouseleave: move |_| transform.set(String::new()),
            {children}
        }
    }
}
