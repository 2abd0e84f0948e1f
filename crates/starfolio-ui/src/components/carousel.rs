//! Testimonial Carousel Component
//!
//! Slides are rendered once from the testimonial list; the core
//! `Carousel` decides which one is visible and when to advance.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use starfolio_core::{Carousel, ClampState, Clock, SlideView, SystemClock, Testimonial};
use tokio::sync::Notify;

use crate::components::icons::{Icon, IconKind};
use crate::context::use_page;

/// Next action of the auto-advance loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvanceStep {
    /// Deadline reached
    Tick,
    /// Sleep until the deadline
    Sleep(Duration),
    /// Paused on hover; wait for `pointer_leave`
    Park,
    /// No slides, nothing will ever advance
    Stop,
}

/// Decide what the auto-advance loop does next.
pub fn auto_advance_step<C: Clock>(carousel: &Carousel<C>) -> AutoAdvanceStep {
    if carousel.is_empty() {
        return AutoAdvanceStep::Stop;
    }
    match carousel.until_next_tick() {
        Some(wait) if wait.is_zero() => AutoAdvanceStep::Tick,
        Some(wait) => AutoAdvanceStep::Sleep(wait),
        None => AutoAdvanceStep::Park,
    }
}

/// Rotating testimonial carousel with dots, prev/next controls and
/// pause-on-hover.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TestimonialCarousel { testimonials: content::testimonials() }
/// }
/// ```
#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>) -> Element {
    let page = use_page();
    let mut carousel = use_signal(|| {
        Carousel::new(&testimonials, &page.config.peek(), SystemClock::new())
    });

    let resume = use_hook(|| Rc::new(Notify::new()));

    // Auto-advance loop. Sleeps until the next deadline, parks while
    // hovered, exits for empty data.
    use_future({
        let resume = resume.clone();
        move || {
            let resume = resume.clone();
            async move {
                loop {
                    let step = auto_advance_step(&*carousel.peek());
                    match step {
                        AutoAdvanceStep::Tick => {
                            carousel.write().tick();
                        }
                        AutoAdvanceStep::Sleep(wait) => tokio::time::sleep(wait).await,
                        AutoAdvanceStep::Park => resume.notified().await,
                        AutoAdvanceStep::Stop => return,
                    }
                }
            }
        }
    });

    let on_leave = move |_: MouseEvent| {
        carousel.write().pointer_leave();
        resume.notify_one();
    };

    let state = carousel.read();
    if state.is_empty() {
        return VNode::empty();
    }

    let transform = state.track_transform();
    let slides = state.slides().to_vec();
    let dots = state.dots();
    let clamps = state.clamps().clone();
    drop(state);

    rsx! {
        div {
            class: "testimonial-carousel",
            onmouseenter: move |_| carousel.write().pointer_enter(),
            onmouseleave: on_leave,

            div { class: "carousel-viewport",
                div { class: "carousel-track", style: "transform: {transform};",
                    for slide in slides {
                        TestimonialSlide {
                            key: "{slide.index}",
                            active: dots[slide.index].active,
                            clamp: clamps.get(slide.index),
                            quote_style: clamps.quote_style(slide.index),
                            on_measured: move |(index, overflows): (usize, bool)| {
                                carousel.write().clamps_mut().set_overflow(index, overflows);
                            },
                            on_toggle: move |index: usize| {
                                carousel.write().clamps_mut().toggle(index);
                            },
                            slide: slide.clone(),
                        }
                    }
                }
            }

            button {
                class: "carousel-btn carousel-prev",
                "aria-label": "Previous testimonial",
                onclick: move |_| {
                    carousel.write().prev();
                },
                Icon { kind: IconKind::ChevronLeft }
            }
            button {
                class: "carousel-btn carousel-next",
                "aria-label": "Next testimonial",
                onclick: move |_| {
                    carousel.write().next();
                },
                Icon { kind: IconKind::ChevronRight }
            }

            div { class: "carousel-dots",
                for dot in dots.iter().copied() {
                    {
                        let label = format!("Go to testimonial {}", dot.index + 1);
                        rsx! {
                            button {
                                key: "{dot.index}",
                                class: dot.class(),
                                "aria-label": "{label}",
                                onclick: move |_| {
                                    carousel.write().go_to_slide(dot.index as isize);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One slide. Reports whether its quote overflows the clamp once mounted.
#[component]
fn TestimonialSlide(
    slide: SlideView,
    active: bool,
    clamp: ClampState,
    quote_style: String,
    on_measured: EventHandler<(usize, bool)>,
    on_toggle: EventHandler<usize>,
) -> Element {
    let index = slide.index;
    let slide_class = if active { "testimonial-slide active" } else { "testimonial-slide" };
    let subtitle = slide.subtitle();

    rsx! {
        div { class: slide_class,
            div { class: "testimonial-header",
                if !slide.image_url.is_empty() {
                    img { class: "testimonial-avatar", src: "{slide.image_url}", alt: "{slide.image_alt}" }
                }
                div { class: "testimonial-meta",
                    h4 { class: "testimonial-name", "{slide.name}" }
                    p { class: "testimonial-role", "{subtitle}" }
                }
            }

            p {
                id: "{slide.quote_id()}",
                class: "testimonial-text",
                style: "{quote_style}",
                onmounted: move |evt: MountedEvent| async move {
                    let el = evt.data();
                    if let (Ok(scroll), Ok(rect)) = (el.get_scroll_size().await, el.get_client_rect().await) {
                        on_measured.call((index, scroll.height > rect.height() + 1.0));
                    }
                },
                "“{slide.quote}”"
            }

            if let Some(label) = clamp.label() {
                button {
                    class: "testimonial-toggle",
                    onclick: move |_| on_toggle.call(index),
                    "{label}"
                }
            }

            if slide.has_link() {
                a {
                    class: "testimonial-link",
                    href: "{slide.link_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View profile "
                    Icon { kind: IconKind::ExternalLink, size: 14 }
                }
            }
        }
    }
}
