//! Identifier and name types for task lists.

use super::TaskListDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a task list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskListId(String);

impl TaskListId {
    /// Wraps an identifier produced by an identity generator or storage.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rejects the empty identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::EmptyId`] when the identifier is empty.
    pub fn ensure_present(&self) -> Result<&Self, TaskListDomainError> {
        if self.is_empty() {
            return Err(TaskListDomainError::EmptyId);
        }
        Ok(self)
    }
}

impl From<&str> for TaskListId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskListId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for TaskListId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task list name that is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskListName(String);

impl TaskListName {
    /// Creates a validated name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::EmptyName`] when the value is empty or
    /// whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskListDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskListDomainError::EmptyName);
        }
        Ok(Self(raw))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskListName {
    type Error = TaskListDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskListName> for String {
    fn from(value: TaskListName) -> Self {
        value.0
    }
}

impl fmt::Display for TaskListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
