//! Error types for DevBlog

use thiserror::Error;

/// Main error type for DevBlog operations.
///
/// Card data never produces one of these: malformed dates and read times
/// degrade to sentinel sort keys instead.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Site configuration could not be used
    #[error("Config error: {0}")]
    Config(String),

    /// Posts file did not contain usable cards
    #[error("Invalid posts file: {0}")]
    InvalidPosts(String),

    /// QR code could not be produced by the renderer
    #[error("QR render error: {0}")]
    QrRender(String),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::QrRender("data too long".to_string());
        assert_eq!(format!("{}", err), "QR render error: data too long");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::Json(_)));
    }
}
