//! Task entity and the parameter objects used to create and revise it.

use super::{TaskId, TaskPriority, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work, optionally assigned to a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    list_id: String,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated fields for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Owning list, empty when unassigned.
    pub list_id: String,
    /// Task title.
    pub title: TaskTitle,
    /// Free-text description.
    pub description: String,
    /// Initial priority.
    pub priority: TaskPriority,
}

/// Replacement values for every mutable task field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRevision {
    /// Owning list, empty when unassigned.
    pub list_id: String,
    /// Task title.
    pub title: TaskTitle,
    /// Free-text description.
    pub description: String,
    /// Progress state.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: TaskPriority,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning list.
    pub list_id: String,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task stamped with the current clock time.
    #[must_use]
    pub fn new(id: TaskId, draft: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            list_id: draft.list_id,
            title: draft.title,
            description: draft.description,
            status: TaskStatus::Pending,
            priority: draft.priority,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            list_id: data.list_id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning list identifier, empty when unassigned.
    #[must_use]
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
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

    /// Returns `true` when the task is assigned to `list_id`.
    #[must_use]
    pub fn belongs_to(&self, list_id: &str) -> bool {
        self.list_id == list_id
    }

    /// Replaces every mutable field and refreshes the update timestamp.
    ///
    /// Identity and creation timestamp are never touched.
    pub fn revise(&mut self, revision: TaskRevision, clock: &impl Clock) {
        self.list_id = revision.list_id;
        self.title = revision.title;
        self.description = revision.description;
        self.status = revision.status;
        self.priority = revision.priority;
        self.updated_at = clock.utc();
    }
}

impl From<Task> for PersistedTaskData {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            list_id: task.list_id,
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}
