//! Scroll-driven UI state.
//!
//! - [`ScrollTracker`]: active-section highlighting and navbar appearance,
//!   each behind its own leading-edge throttle
//! - [`RevealSet`]: one-shot reveal-on-view bookkeeping
//! - [`PageLayout`]: measured page geometry the tracker works from

mod layout;
mod navbar;
mod reveal;
mod tracker;

pub use layout::{scroll_target, PageLayout, SectionGeometry};
pub use navbar::NavbarAppearance;
pub use reveal::{intersection_ratio, ElementRect, RevealSet, RevealTarget};
pub use tracker::{NavEntry, ScrollTracker, ScrollUpdate};
