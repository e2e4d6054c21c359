//! Shared error types for the application

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for srcmirror operations
#[derive(Debug, Error)]
pub enum Error {
    /// No scanner declares a capability matching the file
    #[error("No scanner available for file: {}", path.display())]
    UnsupportedFileType { path: PathBuf },

    /// Read or write failure on a specific file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fatal failure before any file is processed
    #[error("Setup failed: {message}")]
    Setup {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A filename glob that could not be compiled
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a setup error without an underlying cause
    pub fn setup(message: impl Into<String>) -> Self {
        Self::Setup {
            message: message.into(),
            source: None,
        }
    }

    /// Create a setup error wrapping the I/O failure that caused it
    pub fn setup_io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Setup {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn unsupported(path: &Path) -> Self {
        Self::UnsupportedFileType {
            path: path.to_path_buf(),
        }
    }

    /// Whether this error aborts the whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Setup { .. } | Self::Configuration(_))
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_names_path() {
        let err = Error::io("src/Foo.cs", io::Error::new(io::ErrorKind::NotFound, "gone"));
        let message = err.to_string();
        assert!(message.contains("src/Foo.cs"));
        assert!(message.contains("gone"));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_setup_error_is_fatal() {
        let err = Error::setup("destination root cannot be created");
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Setup failed: destination root cannot be created"
        );
    }

    #[test]
    fn test_unsupported_file_type_message() {
        let err = Error::unsupported(Path::new("notes.md"));
        assert_eq!(err.to_string(), "No scanner available for file: notes.md");
        assert!(!err.is_fatal());
    }
}
