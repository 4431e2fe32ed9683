//! Error types for task list validation.

use crate::error::ErrorKind;
use thiserror::Error;

/// Errors returned while validating task list input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskListDomainError {
    /// The list name is empty after trimming.
    #[error("name cannot be empty")]
    EmptyName,

    /// An operation was given an empty list identifier.
    #[error("id cannot be empty")]
    EmptyId,
}

impl TaskListDomainError {
    /// Validation failures are always caller errors.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}
