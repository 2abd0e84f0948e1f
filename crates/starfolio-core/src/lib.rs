//! Starfolio Core Library
//!
//! DOM-free behaviour for a single-page portfolio: scroll-driven nav
//! highlighting, one-shot reveal animations, and a testimonial carousel.
//!
//! ## Overview
//!
//! Every component is an explicit instance owning its own state. Time is
//! read through an injected [`Clock`], so throttling and auto-advance run
//! identically under a real event loop and in tests.
//!
//! ## Quick Start
//!
//! ```
//! use starfolio_core::{Carousel, ManualClock, PortfolioConfig, Testimonial};
//!
//! let clock = ManualClock::new();
//! let testimonials = vec![
//!     Testimonial {
//!         name: "Ada".into(),
//!         role: "CTO".into(),
//!         company: "Analytical".into(),
//!         image_url: String::new(),
//!         text: "Ships.".into(),
//!         link_url: String::new(),
//!     };
//!     2
//! ];
//! let mut carousel = Carousel::new(&testimonials, &PortfolioConfig::default(), clock.clone());
//!
//! clock.advance_ms(5000);
//! carousel.tick();
//! assert_eq!(carousel.current_index(), 1);
//! ```

pub mod carousel;
pub mod clock;
pub mod config;
pub mod error;
pub mod page;
pub mod scroll;
pub mod timer;

// Re-exports
pub use carousel::{render, Carousel, CarouselState, ClampState, ClampStates, DotView, SlideView, Testimonial};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::PortfolioConfig;
pub use error::{StarfolioError, StarfolioResult};
pub use page::{hero_delay, MobileMenu, Tilt};
pub use scroll::{
    intersection_ratio, scroll_target, ElementRect, NavEntry, NavbarAppearance, PageLayout,
    RevealSet, RevealTarget, ScrollTracker, ScrollUpdate, SectionGeometry,
};
pub use timer::{RepeatingTimer, Throttle};
