//! Navbar background intensity.

/// Visual state of the fixed navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarAppearance {
    /// At (or near) the top of the page
    #[default]
    Translucent,
    /// Scrolled past the threshold
    Solid,
}

impl NavbarAppearance {
    /// Appearance for a scroll offset given the solid threshold.
    pub fn for_offset(offset: f64, solid_after: f64) -> Self {
        if offset > solid_after {
            NavbarAppearance::Solid
        } else {
            NavbarAppearance::Translucent
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarAppearance::Translucent => "rgba(10, 14, 39, 0.8)",
            NavbarAppearance::Solid => "rgba(10, 14, 39, 0.95)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavbarAppearance::Translucent => "none",
            NavbarAppearance::Solid => "0 4px 20px rgba(0, 0, 0, 0.3)",
        }
    }

    /// Inline style string for the navbar element.
    pub fn style(&self) -> String {
        format!("background: {}; box-shadow: {};", self.background(), self.box_shadow())
    }
}
