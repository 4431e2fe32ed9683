//! Diesel row models for task list persistence.

use super::schema::task_lists;
use crate::task_list::domain::TaskList;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task list records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskListRow {
    /// Task list identifier.
    pub id: String,
    /// List name.
    pub name: String,
    /// List description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task list records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_lists)]
pub struct NewTaskListRow {
    /// Task list identifier.
    pub id: String,
    /// List name.
    pub name: String,
    /// List description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model; `created_at` is never written after insert.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = task_lists)]
pub struct TaskListChangeset {
    /// List name.
    pub name: String,
    /// List description.
    pub description: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&TaskList> for NewTaskListRow {
    fn from(list: &TaskList) -> Self {
        Self {
            id: list.id().as_str().to_owned(),
            name: list.name().as_str().to_owned(),
            description: list.description().to_owned(),
            created_at: list.created_at(),
            updated_at: list.updated_at(),
        }
    }
}

impl From<&TaskList> for TaskListChangeset {
    fn from(list: &TaskList) -> Self {
        Self {
            name: list.name().as_str().to_owned(),
            description: list.description().to_owned(),
            updated_at: list.updated_at(),
        }
    }
}
