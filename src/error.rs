//! Custom error types for portfolio-term.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for portfolio-term operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse RON file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Failed to serialize RON: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Profile file not found: {0}")]
    ProfileNotFound(PathBuf),
}

/// Result type alias using our custom Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        let display = format!("{}", err);
        assert!(display.contains("IO error"));
    }

    #[test]
    fn test_error_display_profile_not_found() {
        let err = Error::ProfileNotFound(PathBuf::from("/path/to/me.ron"));
        let display = format!("{}", err);
        assert!(display.contains("Profile file not found"));
        assert!(display.contains("/path/to/me.ron"));
    }

    #[test]
    fn test_parse_error_from() {
        let parse_err = ron::from_str::<u32>("not a number").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(format!("{}", err).contains("Failed to parse RON file"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
