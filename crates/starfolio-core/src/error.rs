//! Error types for Starfolio

use thiserror::Error;

/// Main error type for Starfolio operations.
///
/// Only configuration loading can fail. The behaviour layer itself
/// degrades silently when the page is missing the nodes it drives.
#[derive(Error, Debug)]
pub enum StarfolioError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using StarfolioError
pub type StarfolioResult<T> = Result<T, StarfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StarfolioError::InvalidConfig("auto_advance_ms must be > 0".to_string());
        assert_eq!(format!("{}", err), "Invalid config: auto_advance_ms must be > 0");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StarfolioError = io_err.into();
        assert!(matches!(err, StarfolioError::Io(_)));
    }
}
