//! Home page - the whole single-page portfolio.

use dioxus::prelude::*;
use starfolio_core::hero_delay;
use starfolio_ui::{use_page, use_page_bridge, Navbar, Reveal, TestimonialCarousel, TiltCard};

use crate::content;

/// Single-page portfolio.
///
/// Clicks that reach the page root came from outside the navbar and close
/// the mobile menu.
#[component]
pub fn Home() -> Element {
    let page = use_page();
    let mut menu = page.menu;
    use_page_bridge();

    let config = page.config.read().clone();
    let hero_lines = [
        ("hero-greeting", "Hi, I'm Shivam"),
        ("hero-title", "I build fast, dependable software"),
        ("hero-subtitle", "Backend systems, developer tooling, and the occasional pixel."),
    ];

    rsx! {
        div {
            class: "page",
            onclick: move |_| menu.write().close(),

            div { class: "space-background" }

            Navbar { brand: content::BRAND.to_string(), links: content::nav_links() }

            main {
                section { id: "home", class: "hero",
                    div { class: "hero-content",
                        for (index, (class, text)) in hero_lines.iter().enumerate() {
                            {
                                let delay = hero_delay(index, &config);
                                rsx! {
                                    p {
                                        key: "{class}",
                                        class: "{class}",
                                        style: "animation-delay: {delay};",
                                        "{text}"
                                    }
                                }
                            }
                        }
                    }
                }

                section { id: "about",
                    Reveal { id: "about-title".to_string(), class: "section-title".to_string(),
                        h2 { "About" }
                    }
                    Reveal { id: "about-card".to_string(), class: "glass-card".to_string(),
                        p {
                            "I design and run production systems that have to stay up. "
                            "Most of my work lives where performance, reliability and "
                            "developer experience meet."
                        }
                    }
                }

                section { id: "experience",
                    Reveal { id: "experience-title".to_string(), class: "section-title".to_string(),
                        h2 { "Experience" }
                    }
                    div { class: "timeline",
                        for item in content::experience() {
                            Reveal { key: "{item.id}", id: item.id.to_string(), class: "timeline-item".to_string(),
                                span { class: "timeline-period", "{item.period}" }
                                h3 { "{item.title}" }
                                p { class: "timeline-company", "{item.company}" }
                                p { "{item.summary}" }
                            }
                        }
                    }
                }

                section { id: "projects",
                    Reveal { id: "projects-title".to_string(), class: "section-title".to_string(),
                        h2 { "Projects" }
                    }
                    div { class: "project-grid",
                        for project in content::projects() {
                            TiltCard { key: "{project.id}", id: project.id.to_string(),
                                h3 { "{project.name}" }
                                p { "{project.description}" }
                                div { class: "project-tags",
                                    for tag in project.tags.iter() {
                                        span { class: "tag", "{tag}" }
                                    }
                                }
                                a { href: "{project.url}", target: "_blank", rel: "noopener noreferrer", "Source" }
                            }
                        }
                    }
                }

                section { id: "expertise",
                    Reveal { id: "expertise-title".to_string(), class: "section-title".to_string(),
                        h2 { "Expertise" }
                    }
                    div { class: "expertise-grid",
                        for area in content::expertise() {
                            Reveal { key: "{area.id}", id: area.id.to_string(), class: "expertise-card".to_string(),
                                h3 { "{area.title}" }
                                ul {
                                    for skill in area.skills.iter() {
                                        li { "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }

                section { id: "testimonials",
                    Reveal { id: "testimonials-title".to_string(), class: "section-title".to_string(),
                        h2 { "Testimonials" }
                    }
                    TestimonialCarousel { testimonials: content::testimonials() }
                }

                section { id: "contact",
                    Reveal { id: "contact-title".to_string(), class: "section-title".to_string(),
                        h2 { "Contact" }
                    }
                    Reveal { id: "contact-card".to_string(), class: "glass-card".to_string(),
                        p { "Open to interesting problems. Say hello:" }
                        a { href: "mailto:hello@example.com", "hello@example.com" }
                    }
                }
            }

            footer { class: "footer",
                p { "© Shivam" }
            }
        }
    }
}
