//! Status/priority filter applied by task queries.

use super::{Task, TaskDomainError, TaskPriority, TaskStatus};

/// Conjunctive filter; `None` leaves a field unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            status: None,
            priority: None,
        }
    }

    /// Parses raw query values, treating blank strings as "no constraint".
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] or
    /// [`TaskDomainError::InvalidPriority`] for non-blank values outside the
    /// vocabularies.
    pub fn parse(status: &str, priority: &str) -> Result<Self, TaskDomainError> {
        Ok(Self {
            status: TaskStatus::parse_optional(status)?,
            priority: TaskPriority::parse_optional(priority)?,
        })
    }

    /// Constrains the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Constrains the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the status constraint.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority constraint.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns `true` when `task` satisfies every constraint.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status() == status)
            && self.priority.is_none_or(|priority| task.priority() == priority)
    }
}
