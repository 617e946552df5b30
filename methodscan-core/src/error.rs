//! Typed error handling for methodscan.
//!
//! Library functions return [`ScanResult`] so callers can match on what went
//! wrong. A method that is simply absent from the source is *not* an error and
//! never produces one of these.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for methodscan operations.
#[derive(Error, Debug)]
pub enum ScanError {
    /// I/O error when reading the source or config file
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors (bad TOML, empty keywords or markers)
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A declaration pattern could not be compiled
    #[error("Pattern error for `{name}`: {message}")]
    Pattern { name: String, message: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a pattern compilation error.
    pub fn pattern(name: impl Into<String>, err: regex::Error) -> Self {
        Self::Pattern {
            name: name.into(),
            message: err.to_string(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if analysis can continue with built-in defaults after this error.
    ///
    /// Only a broken config file qualifies; an unreadable source is always fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for methodscan results.
pub type ScanResult<T> = Result<T, ScanError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> ScanResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> ScanResult<T> {
        self.map_err(|e| ScanError::io(path, e))
    }
}
