//! Page event bridge.
//!
//! The browser side only observes and reports. Throttling, active-section
//! selection and reveal bookkeeping all happen in Rust.

use dioxus::prelude::*;
use serde::Deserialize;
use starfolio_core::{PageLayout, PortfolioConfig};

use crate::context::{use_page, PageContext};

/// Messages sent from the page observer script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageSignal {
    /// Fresh measurements (load and resize)
    Layout { layout: PageLayout },
    /// Raw, unthrottled scroll offset
    Scroll { offset: f64 },
    /// A `[data-reveal]` element intersected the viewport
    Reveal { id: String, ratio: f64 },
    /// `prefers-reduced-motion` at startup
    ReducedMotion { enabled: bool },
}

const OBSERVER_SCRIPT: &str = r#"
const measure = () => {
  const navbar = document.querySelector('.navbar');
  dioxus.send({
    kind: 'layout',
    layout: {
      navbar_height: navbar ? navbar.offsetHeight : null,
      sections: Array.from(document.querySelectorAll('section[id]')).map((s) => ({
        id: s.id,
        offset_top: s.offsetTop,
        height: s.offsetHeight,
      })),
      links: Array.from(document.querySelectorAll('.nav-link'))
        .map((l) => l.getAttribute('href'))
        .filter((h) => h),
    },
  });
};
const scrolled = () => dioxus.send({
  kind: 'scroll',
  offset: window.pageYOffset || document.documentElement.scrollTop,
});

dioxus.send({
  kind: 'reduced_motion',
  enabled: window.matchMedia('(prefers-reduced-motion: reduce)').matches,
});
measure();
scrolled();
window.addEventListener('resize', measure);
window.addEventListener('load', () => { measure(); scrolled(); });
window.addEventListener('scroll', scrolled, { passive: true });

if ('IntersectionObserver' in window) {
  const observer = new IntersectionObserver((entries) => {
    entries.forEach((entry) => {
      if (!entry.isIntersecting) return;
      dioxus.send({ kind: 'reveal', id: entry.target.id, ratio: entry.intersectionRatio });
      if (entry.intersectionRatio >= __THRESHOLD__) observer.unobserve(entry.target);
    });
  }, { threshold: __THRESHOLD__, rootMargin: '0px 0px -__MARGIN__px 0px' });
  document.querySelectorAll('[data-reveal]').forEach((el) => observer.observe(el));
}

await new Promise(() => {});
"#;

fn observer_script(config: &PortfolioConfig) -> String {
    OBSERVER_SCRIPT
        .replace("__THRESHOLD__", &config.reveal_threshold.to_string())
        .replace("__MARGIN__", &config.reveal_bottom_margin_px.to_string())
}

/// Apply one bridge message to the page state.
pub fn apply_signal(page: PageContext, signal: PageSignal) {
    let PageContext {
        mut tracker,
        mut reveal,
        force_reduced_motion,
        ..
    } = page;

    match signal {
        PageSignal::Layout { layout } => {
            tracker.write().relayout(&layout);
        }
        PageSignal::Scroll { offset } => {
            let update = tracker.write().on_scroll(offset);
            if update.active_changed {
                if let Some(link) = tracker.peek().active_link() {
                    tracing::debug!(link, "Nav highlight moved");
                }
            }
        }
        PageSignal::Reveal { id, ratio } => {
            let mut set = reveal.write();
            set.observe(id.clone());
            set.on_intersection(&id, ratio);
        }
        PageSignal::ReducedMotion { enabled } => {
            if enabled || *force_reduced_motion.peek() {
                let revealed = reveal.write().enable_reduced_motion();
                tracing::info!(revealed, "Reduced motion: reveal animations disabled");
            }
        }
    }
}

/// Start the page observer once the DOM is mounted.
pub fn use_page_bridge() {
    let page = use_page();

    use_effect(move || {
        let script = observer_script(&page.config.peek());
        spawn(async move {
            let mut eval = document::eval(&script);
            loop {
                match eval.recv::<PageSignal>().await {
                    Ok(signal) => apply_signal(page, signal),
                    Err(e) => {
                        tracing::warn!("Page bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });
}
