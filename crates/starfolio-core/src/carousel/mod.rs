//! Testimonial carousel.
//!
//! ## Architecture
//!
//! ```text
//! Testimonial[] ──render()──▶ SlideView[]      (pure, built once)
//!                                  │
//! Carousel { state, timer, clamps }◀── go_to_slide / next / prev
//!                                  ◀── pointer_enter / pointer_leave
//!                                  ◀── tick (host loop, injected clock)
//! ```
//!
//! `go_to_slide` is the only path that changes `current_index`, so the
//! visible slide and the active dot can never disagree.

mod clamp;
mod slides;
mod state;

pub use clamp::{ClampState, ClampStates};
pub use slides::{render, SlideView, Testimonial};
pub use state::{Carousel, CarouselState, DotView};
