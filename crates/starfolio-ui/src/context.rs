//! Page state context.
//!
//! ## Usage
//!
//! ```ignore
//! // In the root component
//! use_page_provider(config, force_reduced_motion);
//!
//! // In child components
//! let page = use_page();
//! ```

use dioxus::prelude::*;
use starfolio_core::{MobileMenu, PageLayout, PortfolioConfig, RevealSet, ScrollTracker, SystemClock};

/// Shared page state. Every field is a signal, so the context is `Copy`.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub config: Signal<PortfolioConfig>,
    pub tracker: Signal<ScrollTracker<SystemClock>>,
    pub reveal: Signal<RevealSet>,
    pub menu: Signal<MobileMenu>,
    /// Reduced motion requested on the command line
    pub force_reduced_motion: Signal<bool>,
}

impl PageContext {
    /// Class list for a reveal target.
    pub fn reveal_class(&self, id: &str, base: &str) -> String {
        if self.reveal.read().is_revealed(id) {
            format!("{} scroll-reveal revealed", base)
        } else {
            format!("{} scroll-reveal", base)
        }
    }
}

/// Create the page state and provide it to all child components.
pub fn use_page_provider(config: PortfolioConfig, force_reduced_motion: bool) -> PageContext {
    let tracker = use_signal({
        let config = config.clone();
        move || ScrollTracker::new(&PageLayout::default(), &config, SystemClock::new())
    });
    let reveal = use_signal({
        let threshold = config.reveal_threshold;
        move || RevealSet::new(threshold)
    });
    let menu = use_signal(MobileMenu::default);
    let force_reduced_motion = use_signal(|| force_reduced_motion);
    let config = use_signal(|| config);

    use_context_provider(|| PageContext {
        config,
        tracker,
        reveal,
        menu,
        force_reduced_motion,
    })
}

/// Hook to access the page state from context.
pub fn use_page() -> PageContext {
    use_context::<PageContext>()
}
