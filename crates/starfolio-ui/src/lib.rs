//! Starfolio UI Components
//!
//! Dioxus components that drive the `starfolio-core` state machines from
//! real page events.
//!
//! ## Event flow
//!
//! - A single long-lived JS bridge (see [`use_page_bridge`]) reports layout,
//!   scroll offsets, reveal intersections and the reduced-motion preference
//! - Components hold core state in signals and mutate it only through the
//!   core API; rendering reads the derived views (classes, transforms)

pub mod bridge;
pub mod components;
pub mod context;

pub use bridge::{use_page_bridge, PageSignal};
pub use components::*;
pub use context::{use_page, use_page_provider, PageContext};
