//! Error classification shared by every layer.
//!
//! Each error type in the crate reports an [`ErrorKind`] so callers can map
//! failures to transport responses without inspecting message text.

use std::fmt;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field was blank or a value fell outside its vocabulary.
    InvalidArgument,
    /// No entity exists with the requested identity.
    NotFound,
    /// An entity with the same identity is already stored.
    AlreadyExists,
    /// Storage failure or a fault caught at an operation boundary.
    Internal,
}

impl ErrorKind {
    /// Returns a stable lowercase label for logs and responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::NotFound => "not_found",
            Self::AlreadyExists => "already_exists",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
