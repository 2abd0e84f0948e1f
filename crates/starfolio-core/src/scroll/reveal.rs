//! One-shot reveal-on-view bookkeeping.

use serde::{Deserialize, Serialize};

/// Element box relative to the viewport (`getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

/// Visible fraction of `rect` inside a viewport shrunk at the bottom by
/// `bottom_margin` pixels.
pub fn intersection_ratio(rect: ElementRect, viewport_height: f64, bottom_margin: f64) -> f64 {
    let root_bottom = viewport_height - bottom_margin;
    if rect.height <= 0.0 {
        // Zero-area elements count as fully visible when inside the root.
        return if rect.top >= 0.0 && rect.top <= root_bottom { 1.0 } else { 0.0 };
    }

    let visible_top = rect.top.max(0.0);
    let visible_bottom = (rect.top + rect.height).min(root_bottom);
    ((visible_bottom - visible_top).max(0.0) / rect.height).min(1.0)
}

/// A watched element and whether it has been revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub id: String,
    pub revealed: bool,
}

/// Tracks reveal targets. Reveal is monotonic: once revealed a target is
/// no longer watched and never hidden again.
#[derive(Debug, Clone)]
pub struct RevealSet {
    targets: Vec<RevealTarget>,
    threshold: f64,
    reduced_motion: bool,
}

impl RevealSet {
    pub fn new(threshold: f64) -> Self {
        Self {
            targets: Vec::new(),
            threshold,
            reduced_motion: false,
        }
    }

    /// Register an element. Already-known ids are left untouched.
    ///
    /// Under reduced motion the target is revealed on registration.
    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.targets.iter().any(|t| t.id == id) {
            return;
        }
        self.targets.push(RevealTarget {
            id,
            revealed: self.reduced_motion,
        });
    }

    /// Feed an intersection observation. Returns `true` only on the
    /// call that reveals the target.
    pub fn on_intersection(&mut self, id: &str, ratio: f64) -> bool {
        if ratio < self.threshold {
            return false;
        }
        match self.targets.iter_mut().find(|t| t.id == id && !t.revealed) {
            Some(target) => {
                target.revealed = true;
                tracing::debug!(target = %id, ratio, "Revealed");
                true
            }
            None => false,
        }
    }

    /// Reveal everything now and for later registrations. Returns how
    /// many targets flipped.
    pub fn enable_reduced_motion(&mut self) -> usize {
        self.reduced_motion = true;
        self.reveal_all()
    }

    /// Reveal every registered target. Returns how many flipped.
    pub fn reveal_all(&mut self) -> usize {
        let mut flipped = 0;
        for target in self.targets.iter_mut().filter(|t| !t.revealed) {
            target.revealed = true;
            flipped += 1;
        }
        flipped
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.targets.iter().any(|t| t.id == id && t.revealed)
    }

    /// Ids still waiting to be revealed.
    pub fn watching(&self) -> impl Iterator<Item = &str> {
        self.targets
            .iter()
            .filter(|t| !t.revealed)
            .map(|t| t.id.as_str())
    }

    pub fn targets(&self) -> &[RevealTarget] {
        &self.targets
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_happens_once() {
        let mut set = RevealSet::new(0.1);
        set.observe("about-title");

        assert!(!set.on_intersection("about-title", 0.05));
        assert!(set.on_intersection("about-title", 0.1));
        assert!(!set.on_intersection("about-title", 0.9));
        // scrolling away does not hide it
        assert!(!set.on_intersection("about-title", 0.0));
        assert!(set.is_revealed("about-title"));
        assert_eq!(set.watching().count(), 0);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut set = RevealSet::new(0.1);
        assert!(!set.on_intersection("ghost", 1.0));
        assert!(!set.is_revealed("ghost"));
    }

    #[test]
    fn observe_twice_keeps_state() {
        let mut set = RevealSet::new(0.1);
        set.observe("card");
        set.on_intersection("card", 0.5);
        set.observe("card");
        assert_eq!(set.targets().len(), 1);
        assert!(set.is_revealed("card"));
    }

    #[test]
    fn reduced_motion_reveals_everything() {
        let mut set = RevealSet::new(0.1);
        set.observe("a");
        set.observe("b");
        set.on_intersection("a", 1.0);

        assert_eq!(set.enable_reduced_motion(), 1);
        set.observe("c");
        assert!(set.is_revealed("c"));
        assert_eq!(set.watching().count(), 0);
    }

    #[test]
    fn ratio_with_bottom_margin() {
        // 800px viewport, 50px margin: root ends at 750
        let rect = ElementRect { top: 700.0, height: 100.0 };
        assert!((intersection_ratio(rect, 800.0, 50.0) - 0.5).abs() < 1e-9);

        let below = ElementRect { top: 760.0, height: 100.0 };
        assert_eq!(intersection_ratio(below, 800.0, 50.0), 0.0);

        let above = ElementRect { top: -50.0, height: 100.0 };
        assert!((intersection_ratio(above, 800.0, 50.0) - 0.5).abs() < 1e-9);

        let tall = ElementRect { top: -100.0, height: 2000.0 };
        assert!((intersection_ratio(tall, 800.0, 50.0) - 0.375).abs() < 1e-9);
    }

    #[test]
    fn zero_height_elements() {
        let inside = ElementRect { top: 10.0, height: 0.0 };
        assert_eq!(intersection_ratio(inside, 800.0, 50.0), 1.0);
        let outside = ElementRect { top: 900.0, height: 0.0 };
        assert_eq!(intersection_ratio(outside, 800.0, 50.0), 0.0);
    }
}
