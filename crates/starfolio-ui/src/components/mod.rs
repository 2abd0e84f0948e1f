//! Page components.
//!
//! Each component renders from core state and forwards events back to it:
//! - Navbar: active link highlight, smooth scroll, mobile menu
//! - Reveal / TiltCard: one-shot reveal targets, pointer tilt
//! - TestimonialCarousel: slides, dots, auto-advance, quote clamps

mod carousel;
mod icons;
mod navbar;
mod reveal;
mod tilt_card;

pub use carousel::*;
pub use icons::*;
pub use navbar::*;
pub use reveal::*;
pub use tilt_card::*;
