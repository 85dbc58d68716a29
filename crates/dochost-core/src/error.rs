//! Error types and handling for dochost-core operations.
//!
//! The resolver itself defines no failure kinds of its own: every error it
//! returns originates from the project store collaborator (missing project,
//! dangling hierarchy link) or from loading configuration and inventory
//! files, and is propagated unmodified. Errors carry a `category()` string
//! for structured logging.

use thiserror::Error;

/// The main error type for dochost-core operations.
///
/// All public functions in dochost-core return `Result<T, Error>` for
/// consistent error handling. Automatic conversions from common standard
/// library and serialization errors are provided.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading and writing configuration and inventory files. The
    /// underlying `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or inventory is invalid.
    ///
    /// Covers malformed serve settings and inconsistent inventory data, such
    /// as a project registered as its own main-language project.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource was not found.
    ///
    /// Used for unknown project slugs and for hierarchy links that reference
    /// a project the store does not hold.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Project store lookup failed.
    ///
    /// Wraps failures reported by a [`ProjectStore`](crate::ProjectStore)
    /// implementation backed by external persistence. The in-memory registry
    /// never produces this variant.
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization or deserialization failed.
    ///
    /// Occurs when converting inventory or configuration data between
    /// formats (TOML, JSON) fails.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Returns a static string that categorizes the error type for logging
    /// and error-handling logic.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::Store(_) => "store",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        let errors = vec![
            Error::Config("missing field".to_string()),
            Error::NotFound("project".to_string()),
            Error::Store("connection reset".to_string()),
            Error::Serialization("bad toml".to_string()),
        ];

        for error in errors {
            let error_string = error.to_string();
            assert!(!error_string.is_empty());
            match error {
                Error::Config(msg) => {
                    assert!(error_string.contains("Configuration error"));
                    assert!(error_string.contains(&msg));
                },
                Error::NotFound(msg) => {
                    assert!(error_string.contains("Not found"));
                    assert!(error_string.contains(&msg));
                },
                Error::Store(msg) => {
                    assert!(error_string.contains("Store error"));
                    assert!(error_string.contains(&msg));
                },
                Error::Serialization(msg) => {
                    assert!(error_string.contains("Serialization error"));
                    assert!(error_string.contains(&msg));
                },
                Error::Io(_) => {},
            }
        }
    }

    #[test]
    fn test_error_categories() {
        let cases = vec![
            (Error::Io(io::Error::other("test")), "io"),
            (Error::Config("test".to_string()), "config"),
            (Error::NotFound("test".to_string()), "not_found"),
            (Error::Store("test".to_string()), "store"),
            (Error::Serialization("test".to_string()), "serialization"),
        ];

        for (error, expected_category) in cases {
            assert_eq!(error.category(), expected_category);
        }
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_err.into();

        match error {
            Error::Io(inner) => assert!(inner.to_string().contains("file not found")),
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_error_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let error: Error = toml_err.into();

        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_chain_source() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();

        let source = std::error::Error::source(&error);
        assert!(source.is_some());
        assert!(source.unwrap().to_string().contains("access denied"));
    }
}
