//! Navigation bar.
//!
//! Highlights the link for the section under the navbar, smooth-scrolls
//! on click and hosts the mobile menu toggle.

use dioxus::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::context::use_page;

/// One nav link.
#[derive(Clone, PartialEq, Debug)]
pub struct NavLink {
    /// Target section, e.g. `"#about"`
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Link class for the current highlight state.
pub fn nav_link_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Fixed page navbar.
///
/// Clicks inside the navbar stop propagating so the page-level
/// click-outside handler does not close the menu.
#[component]
pub fn Navbar(brand: String, links: Vec<NavLink>) -> Element {
    let page = use_page();
    let mut menu = page.menu;
    let tracker = page.tracker;

    let appearance = tracker.read().navbar_appearance();
    let menu_state = *menu.read();
    let icon = IconKind::from_lucide(menu_state.icon()).unwrap_or(IconKind::Menu);

    rsx! {
        nav {
            class: "navbar",
            style: "{appearance.style()}",
            onclick: move |e| e.stop_propagation(),

            div { class: "nav-container",
                a { class: "nav-brand", href: "#home", "{brand}" }

                ul { id: "navLinks", class: "{menu_state.links_class()}",
                    for link in links.iter() {
                        {
                            let href = link.href.clone();
                            let active = tracker.read().is_link_active(&link.href);
                            rsx! {
                                li { key: "{link.href}",
                                    a {
                                        class: nav_link_class(active),
                                        href: "{link.href}",
                                        onclick: move |e| {
                                            e.prevent_default();
                                            let target = tracker.read().scroll_target_for(&href);
                                            match target {
                                                Some(top) => {
                                                    let _ = document::eval(&format!(
                                                        "window.scrollTo({{ top: {}, behavior: 'smooth' }});",
                                                        top
                                                    ));
                                                    menu.write().close();
                                                }
                                                None => tracing::debug!(href = %href, "No scroll target"),
                                            }
                                        },
                                        "{link.label}"
                                    }
                                }
                            }
                        }
                    }
                }

                button {
                    id: "mobileMenuToggle",
                    class: "mobile-menu-toggle",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{menu_state.is_open()}",
                    onclick: move |_| {
                        menu.write().toggle();
                    },
                    Icon { kind: icon }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_classes() {
        assert_eq!(nav_link_class(true), "nav-link active");
        assert_eq!(nav_link_class(false), "nav-link");
    }

    #[test]
    fn nav_link_new() {
        let link = NavLink::new("#about", "About");
        assert_eq!(link.href, "#about");
        assert_eq!(link.label, "About");
    }
}
