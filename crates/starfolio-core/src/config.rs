//! Tunable constants for the page behaviour.
//!
//! Every field has a default matching the shipped page, so an empty JSON
//! object (or no file at all) yields a working configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{StarfolioError, StarfolioResult};

/// Behaviour configuration, loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// Pixels a section is pre-activated before it reaches the navbar
    pub nav_bias_px: f64,
    /// Leading-edge throttle window for scroll handlers
    pub scroll_throttle_ms: u64,
    /// Carousel auto-advance period
    pub auto_advance_ms: u64,
    /// Visible fraction at which a reveal target is revealed
    pub reveal_threshold: f64,
    /// Bottom root margin shrinking the viewport for reveal checks
    pub reveal_bottom_margin_px: f64,
    /// Scroll offset past which the navbar turns solid
    pub navbar_solid_after_px: f64,
    /// Line clamp applied to testimonial quotes
    pub clamp_lines: u32,
    /// Pointer offset divisor for card tilt angles
    pub tilt_divisor: f64,
    /// CSS perspective distance for card tilt
    pub tilt_perspective_px: f64,
    /// Seconds between staggered hero entrance animations
    pub hero_stagger_s: f64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            nav_bias_px: 100.0,
            scroll_throttle_ms: 100,
            auto_advance_ms: 5000,
            reveal_threshold: 0.1,
            reveal_bottom_margin_px: 50.0,
            navbar_solid_after_px: 50.0,
            clamp_lines: 3,
            tilt_divisor: 20.0,
            tilt_perspective_px: 1000.0,
            hero_stagger_s: 0.1,
        }
    }
}

impl PortfolioConfig {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> StarfolioResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&raw)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(raw: &str) -> StarfolioResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the state machines cannot work with.
    pub fn validate(&self) -> StarfolioResult<()> {
        if self.scroll_throttle_ms == 0 {
            return Err(StarfolioError::InvalidConfig(
                "scroll_throttle_ms must be > 0".to_string(),
            ));
        }
        if self.auto_advance_ms == 0 {
            return Err(StarfolioError::InvalidConfig(
                "auto_advance_ms must be > 0".to_string(),
            ));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(StarfolioError::InvalidConfig(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !(self.reveal_bottom_margin_px.is_finite() && self.reveal_bottom_margin_px >= 0.0) {
            return Err(StarfolioError::InvalidConfig(format!(
                "reveal_bottom_margin_px must be a non-negative number, got {}",
                self.reveal_bottom_margin_px
            )));
        }
        if self.tilt_divisor <= 0.0 {
            return Err(StarfolioError::InvalidConfig(format!(
                "tilt_divisor must be positive, got {}",
                self.tilt_divisor
            )));
        }
        if self.clamp_lines == 0 {
            return Err(StarfolioError::InvalidConfig(
                "clamp_lines must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_page() {
        let config = PortfolioConfig::default();
        assert_eq!(config.scroll_throttle(), Duration::from_millis(100));
        assert_eq!(config.auto_advance(), Duration::from_millis(5000));
        assert_eq!(config.nav_bias_px, 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PortfolioConfig::from_json(r#"{ "auto_advance_ms": 8000 }"#).unwrap();
        assert_eq!(config.auto_advance_ms, 8000);
        assert_eq!(config.scroll_throttle_ms, 100);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = PortfolioConfig::from_json(r#"{ "auto_advance_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, StarfolioError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        assert!(PortfolioConfig::from_json(r#"{ "reveal_threshold": 0.0 }"#).is_err());
        assert!(PortfolioConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).is_err());
        assert!(PortfolioConfig::from_json(r#"{ "reveal_threshold": 1.0 }"#).is_ok());
    }

    #[test]
    fn test_rejects_negative_margin() {
        let err = PortfolioConfig::from_json(r#"{ "reveal_bottom_margin_px": -50 }"#).unwrap_err();
        assert!(matches!(err, StarfolioError::InvalidConfig(_)));

        let mut config = PortfolioConfig::default();
        config.reveal_bottom_margin_px = f64::NAN;
        assert!(config.validate().is_err());
        config.reveal_bottom_margin_px = f64::INFINITY;
        assert!(config.validate().is_err());
        config.reveal_bottom_margin_px = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = PortfolioConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, StarfolioError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "nav_bias_px": 40 }}"#).unwrap();

        let config = PortfolioConfig::load(file.path()).unwrap();
        assert_eq!(config.nav_bias_px, 40.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PortfolioConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, StarfolioError::Io(_)));
    }
}
