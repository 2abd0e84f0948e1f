//! Small page affordances: mobile menu, card tilt, hero stagger.

use crate::config::PortfolioConfig;

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu (nav link clicked, or click outside the navbar).
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Lucide icon name for the toggle button.
    pub fn icon(&self) -> &'static str {
        if self.open {
            "x"
        } else {
            "menu"
        }
    }

    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }
}

/// Pointer-follow tilt for project cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub angle_x: f64,
    pub angle_y: f64,
    perspective: f64,
}

impl Tilt {
    /// Tilt for a pointer at (`x`, `y`) inside a `width` x `height` card,
    /// coordinates relative to the card's top-left corner.
    pub fn from_pointer(width: f64, height: f64, x: f64, y: f64, config: &PortfolioConfig) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            angle_x: (y - center_y) / config.tilt_divisor,
            angle_y: (center_x - x) / config.tilt_divisor,
            perspective: config.tilt_perspective_px,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY(-5px)",
            self.perspective, self.angle_x, self.angle_y
        )
    }
}

/// `animation-delay` for the `index`th hero element.
pub fn hero_delay(index: usize, config: &PortfolioConfig) -> String {
    let seconds = index as f64 * config.hero_stagger_s;
    format!("{}s", (seconds * 1000.0).round() / 1000.0)
}
