//! Task list entity.

use super::{TaskListId, TaskListName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Named grouping of tasks.
///
/// Completion percentage is derived from the tasks and never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    id: TaskListId,
    name: TaskListName,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskListData {
    /// Persisted identifier.
    pub id: TaskListId,
    /// Persisted name.
    pub name: TaskListName,
    /// Persisted description.
    pub description: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskList {
    /// Creates a task list stamped with the current clock time.
    #[must_use]
    pub fn new(
        id: TaskListId,
        name: TaskListName,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            name,
            description: description.into(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task list from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskListData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskListId {
        &self.id
    }

    /// Returns the name.
    #[must_use]
    pub const fn name(&self) -> &TaskListName {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the supplied changes and refreshes the update timestamp.
    ///
    /// `None` leaves the corresponding field untouched.
    pub fn amend(
        &mut self,
        name: Option<TaskListName>,
        description: Option<String>,
        clock: &impl Clock,
    ) {
        if let Some(new_name) = name {
            self.name = new_name;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        self.updated_at = clock.utc();
    }
}

impl From<TaskList> for PersistedTaskListData {
    fn from(list: TaskList) -> Self {
        Self {
            id: list.id,
            name: list.name,
            description: list.description,
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}
