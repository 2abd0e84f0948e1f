//! Per-slide quote clamp toggles.
//!
//! Purely local visual state; never touches the carousel position.

/// Clamp state of one slide's quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClampState {
    /// Measured: the quote is taller than the clamp
    pub overflows: bool,
    pub expanded: bool,
}

impl ClampState {
    /// Toggle control label, if the control is shown at all.
    pub fn label(&self) -> Option<&'static str> {
        match (self.overflows, self.expanded) {
            (false, _) => None,
            (true, false) => Some("Read more"),
            (true, true) => Some("Show less"),
        }
    }

    pub fn is_clamped(&self) -> bool {
        !self.expanded
    }
}

/// Clamp state for every slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClampStates {
    slides: Vec<ClampState>,
    lines: u32,
}

impl ClampStates {
    pub fn new(count: usize, lines: u32) -> Self {
        Self {
            slides: vec![ClampState::default(); count],
            lines,
        }
    }

    pub fn get(&self, index: usize) -> ClampState {
        self.slides.get(index).copied().unwrap_or_default()
    }

    /// Record whether slide `index` overflows its clamp.
    pub fn set_overflow(&mut self, index: usize, overflows: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.overflows = overflows;
        }
    }

    /// Flip expansion of slide `index`. Returns the new `expanded` value,
    /// or `None` when the slide has no toggle.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slide = self.slides.get_mut(index).filter(|s| s.overflows)?;
        slide.expanded = !slide.expanded;
        Some(slide.expanded)
    }

    /// Inline style applying the line clamp to a collapsed quote.
    pub fn quote_style(&self, index: usize) -> String {
        if self.get(index).is_clamped() {
            format!(
                "display: -webkit-box; -webkit-box-orient: vertical; -webkit-line-clamp: {}; overflow: hidden;",
                self.lines
            )
        } else {
            String::new()
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}
