//! Error types for task domain validation and parsing.

use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned while constructing or parsing task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The status is not one of `pending`, `in-progress` or `completed`.
    #[error("invalid status '{0}', expected pending, in-progress or completed")]
    InvalidStatus(String),

    /// The priority is not one of `low`, `medium` or `high`.
    #[error("invalid priority '{0}', expected low, medium or high")]
    InvalidPriority(String),
}

impl TaskDomainError {
    /// Domain validation failures are always caller errors.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}
