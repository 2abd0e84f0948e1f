//! Page components for Starfolio.

mod home;

pub use home::Home;
