//! Repository port for task persistence and querying.

use crate::error::ErrorKind;
use crate::fault::Fault;
use crate::task::domain::{Task, TaskFilter, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Listing operations return owned tasks ordered by creation time, newest
/// first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns every stored task.
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn get_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task>;

    /// Replaces the mutable fields of an existing task.
    ///
    /// The stored creation timestamp is kept regardless of the value carried
    /// by `task`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()>;

    /// Returns the tasks matching every constraint of `filter`.
    async fn get_by_filters(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts tasks assigned to `list_id` with exactly `status`.
    async fn count_by_list_id_and_status(
        &self,
        list_id: &str,
        status: TaskStatus,
    ) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),

    /// A panic was caught inside the repository.
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Classifies the failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateTask(_) => ErrorKind::AlreadyExists,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Persistence(_) | Self::Fault(_) => ErrorKind::Internal,
        }
    }
}
