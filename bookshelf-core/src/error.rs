//! Error types for bookshelf core.

use std::{error::Error, fmt, io};

/// Error type for bookshelf core operations.
#[derive(Debug)]
pub enum BookshelfError {
    /// An underlying I/O error.
    Io(io::Error),
    /// A configuration document failed to parse.
    Yaml(serde_yaml::Error),
    /// A catch-all error with a message.
    Other(String),
}

impl fmt::Display for BookshelfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Yaml(err) => write!(f, "yaml error: {err}"),
            Self::Other(message) => write!(f, "{message}"),
        }
    }
}

impl Error for BookshelfError {}

impl From<io::Error> for BookshelfError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_yaml::Error> for BookshelfError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Yaml(value)
    }
}

/// Convenience result type for bookshelf core.
pub type Result<T> = std::result::Result<T, BookshelfError>;
