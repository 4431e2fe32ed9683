//! Diesel row models for task persistence.

use super::schema::tasks;
use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning list identifier.
    pub list_id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status label.
    pub status: String,
    /// Priority label.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning list identifier.
    pub list_id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status label.
    pub status: String,
    /// Priority label.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model covering every mutable column; `created_at` is absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Owning list identifier.
    pub list_id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status label.
    pub status: String,
    /// Priority label.
    pub priority: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for NewTaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            list_id: task.list_id().to_owned(),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

impl From<&Task> for TaskChangeset {
    fn from(task: &Task) -> Self {
        Self {
            list_id: task.list_id().to_owned(),
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            status: task.status().as_str().to_owned(),
            priority: task.priority().as_str().to_owned(),
            updated_at: task.updated_at(),
        }
    }
}
