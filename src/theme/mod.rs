//! Visual theme for Starfolio.

mod styles;

pub use styles::GLOBAL_STYLES;
