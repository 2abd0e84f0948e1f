//! Active-section tracking.

use crate::clock::Clock;
use crate::config::PortfolioConfig;
use crate::timer::Throttle;

use super::layout::PageLayout;
use super::navbar::NavbarAppearance;

/// One measured section and the nav link pointing at it.
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub id: String,
    /// `href` of the matching nav link; a section may have none
    pub link: Option<String>,
    pub section_top: f64,
    pub section_height: f64,
}

impl NavEntry {
    /// Half-open scroll interval during which this entry is active.
    fn interval(&self, navbar_height: f64, bias: f64) -> (f64, f64) {
        let top = self.section_top - navbar_height - bias;
        (top, top + self.section_height)
    }
}

/// What a throttled scroll event actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollUpdate {
    /// Active-section recompute ran (was not throttled)
    pub highlight_ran: bool,
    /// The active entry changed
    pub active_changed: bool,
    /// New navbar appearance, when the navbar handler ran
    pub navbar: Option<NavbarAppearance>,
}

/// Keeps nav highlighting and navbar appearance in step with scrolling.
///
/// At most one entry is active at a time. When no entry's interval
/// contains the scroll offset the previous active entry is kept.
#[derive(Debug)]
pub struct ScrollTracker<C: Clock> {
    clock: C,
    entries: Vec<NavEntry>,
    navbar_height: Option<f64>,
    active: Option<usize>,
    bias: f64,
    solid_after: f64,
    navbar: NavbarAppearance,
    highlight_throttle: Throttle,
    navbar_throttle: Throttle,
}

impl<C: Clock> ScrollTracker<C> {
    pub fn new(layout: &PageLayout, config: &PortfolioConfig, clock: C) -> Self {
        let mut tracker = Self {
            clock,
            entries: Vec::new(),
            navbar_height: None,
            active: None,
            bias: config.nav_bias_px,
            solid_after: config.navbar_solid_after_px,
            navbar: NavbarAppearance::default(),
            highlight_throttle: Throttle::new(config.scroll_throttle()),
            navbar_throttle: Throttle::new(config.scroll_throttle()),
        };
        tracker.relayout(layout);
        tracker
    }

    /// Replace the measured geometry, keeping the active entry if its
    /// section still exists.
    pub fn relayout(&mut self, layout: &PageLayout) {
        let previous = self.active_entry().map(|e| e.id.clone());

        self.navbar_height = layout.navbar_height;
        self.entries = layout
            .sections
            .iter()
            .map(|section| NavEntry {
                id: section.id.clone(),
                link: layout.link_for(&section.id).map(str::to_string),
                section_top: section.offset_top,
                section_height: section.height,
            })
            .collect();
        self.active = previous.and_then(|id| self.entries.iter().position(|e| e.id == id));

        if self.navbar_height.is_none() && !self.entries.is_empty() {
            tracing::warn!("Navbar not found, section highlighting disabled");
        }
        tracing::debug!(sections = self.entries.len(), "Scroll layout updated");
    }

    /// Pick the active entry for `offset`. Returns whether it changed.
    ///
    /// The last entry (in document order) whose interval contains the
    /// offset wins. Does nothing without a navbar.
    pub fn recompute_active_section(&mut self, offset: f64) -> bool {
        let Some(navbar_height) = self.navbar_height else {
            return false;
        };

        let hit = self.entries.iter().rposition(|entry| {
            let (top, bottom) = entry.interval(navbar_height, self.bias);
            offset >= top && offset < bottom
        });

        match hit {
            Some(index) if self.active != Some(index) => {
                self.active = Some(index);
                tracing::debug!(section = %self.entries[index].id, offset, "Active section changed");
                true
            }
            _ => false,
        }
    }

    /// Scroll event entry point; both handlers are throttled separately.
    pub fn on_scroll(&mut self, offset: f64) -> ScrollUpdate {
        let now = self.clock.now();
        let mut update = ScrollUpdate::default();

        if self.highlight_throttle.try_acquire(now) {
            update.highlight_ran = true;
            update.active_changed = self.recompute_active_section(offset);
        }

        if self.navbar_height.is_some() && self.navbar_throttle.try_acquire(now) {
            self.navbar = NavbarAppearance::for_offset(offset, self.solid_after);
            update.navbar = Some(self.navbar);
        }

        update
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn navbar_height(&self) -> Option<f64> {
        self.navbar_height
    }

    pub fn active_entry(&self) -> Option<&NavEntry> {
        self.active.and_then(|i| self.entries.get(i))
    }

    /// `href` of the highlighted nav link, if any.
    pub fn active_link(&self) -> Option<&str> {
        self.active_entry().and_then(|e| e.link.as_deref())
    }

    pub fn is_link_active(&self, href: &str) -> bool {
        self.active_link() == Some(href)
    }

    pub fn navbar_appearance(&self) -> NavbarAppearance {
        self.navbar
    }

    /// Smooth-scroll destination for a nav link, or `None` when the
    /// target section or the navbar is missing.
    pub fn scroll_target_for(&self, href: &str) -> Option<f64> {
        let navbar_height = self.navbar_height?;
        let id = href.strip_prefix('#')?;
        let entry = self.entries.iter().find(|e| e.id == id)?;
        Some(super::scroll_target(entry.section_top, navbar_height))
    }
}
