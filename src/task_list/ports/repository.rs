//! Repository port for task list persistence.

use crate::error::ErrorKind;
use crate::fault::Fault;
use crate::task_list::domain::{TaskList, TaskListId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task list repository operations.
pub type TaskListRepositoryResult<T> = Result<T, TaskListRepositoryError>;

/// Task list persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskListRepository: Send + Sync {
    /// Stores a new task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::DuplicateTaskList`] when the
    /// identifier already exists.
    async fn create(&self, list: &TaskList) -> TaskListRepositoryResult<()>;

    /// Returns every task list, newest first.
    async fn get_all(&self) -> TaskListRepositoryResult<Vec<TaskList>>;

    /// Returns the task list with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list does not
    /// exist.
    async fn get_by_id(&self, id: &TaskListId) -> TaskListRepositoryResult<TaskList>;

    /// Replaces the name, description and update timestamp of a list,
    /// keeping the stored creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list does not
    /// exist.
    async fn update(&self, list: &TaskList) -> TaskListRepositoryResult<()>;

    /// Removes a task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list does not
    /// exist.
    async fn delete(&self, id: &TaskListId) -> TaskListRepositoryResult<()>;
}

/// Errors returned by task list repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskListRepositoryError {
    /// A list with the same identifier already exists.
    #[error("duplicate task list identifier: {0}")]
    DuplicateTaskList(TaskListId),

    /// The list was not found.
    #[error("task list not found: {0}")]
    NotFound(TaskListId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),

    /// A panic was caught inside the repository.
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl TaskListRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateTaskList(_) => ErrorKind::AlreadyExists,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Persistence(_) | Self::Fault(_) => ErrorKind::Internal,
        }
    }
}
