//! Service layer for task list management.

use crate::error::ErrorKind;
use crate::fault::{Fault, FaultBoundary};
use crate::identity::{IdGenerator, UuidIdGenerator};
use crate::logging::Logger;
use crate::task_list::{
    domain::{TaskList, TaskListDomainError, TaskListId, TaskListName},
    ports::{TaskListRepository, TaskListRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for a partial task list update.
///
/// Blank fields are left unchanged on the stored list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskListRequest {
    name: String,
    description: String,
}

impl UpdateTaskListRequest {
    /// Creates an update carrying both fields.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    fn into_changes(self) -> Result<(Option<TaskListName>, Option<String>), TaskListDomainError> {
        let name = if self.name.is_empty() {
            None
        } else {
            Some(TaskListName::new(self.name)?)
        };
        let description = Some(self.description).filter(|value| !value.is_empty());
        Ok((name, description))
    }
}

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum TaskListServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskListDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskListRepositoryError),
    /// A panic was caught inside the service.
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl TaskListServiceError {
    /// Classifies the failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::Repository(err) => err.kind(),
            Self::Fault(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for task list service operations.
pub type TaskListServiceResult<T> = Result<T, TaskListServiceError>;

/// Task list orchestration service.
#[derive(Clone)]
pub struct TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    ids: Arc<dyn IdGenerator>,
    boundary: FaultBoundary,
}

impl<R, C> TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service that generates UUID identities.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            ids: Arc::new(UuidIdGenerator),
            boundary: FaultBoundary::new("service", Logger::default()),
        }
    }

    /// Replaces the identity generator.
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replaces the logger faults and mutations are reported to.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.boundary = FaultBoundary::new("service", logger);
        self
    }

    /// Creates a task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Domain`] for a blank name and
    /// [`TaskListServiceError::Repository`] when storage fails.
    pub async fn create(
        &self,
        name: &str,
        description: &str,
    ) -> TaskListServiceResult<TaskList> {
        self.boundary
            .run_async("create", self.create_list(name, description))
            .await
    }

    /// Returns every task list, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Repository`] when storage fails.
    pub async fn get_all(&self) -> TaskListServiceResult<Vec<TaskList>> {
        self.boundary
            .run_async("get_all", async {
                self.repository
                    .get_all()
                    .await
                    .map_err(TaskListServiceError::from)
            })
            .await
    }

    /// Returns the task list with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::EmptyId`] for an empty identifier and
    /// [`TaskListServiceError::Repository`] when the list does not exist.
    pub async fn get_by_id(&self, id: &TaskListId) -> TaskListServiceResult<TaskList> {
        self.boundary
            .run_async("get_by_id", self.find_list(id))
            .await
    }

    /// Applies a partial update: blank fields keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Domain`] for an empty identifier or a
    /// whitespace-only name, and [`TaskListServiceError::Repository`] when
    /// the list does not exist or storage fails.
    pub async fn update(
        &self,
        id: &TaskListId,
        request: UpdateTaskListRequest,
    ) -> TaskListServiceResult<TaskList> {
        self.boundary
            .run_async("update", self.amend_list(id, request))
            .await
    }

    /// Deletes a task list. Tasks that reference it are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListDomainError::EmptyId`] for an empty identifier and
    /// [`TaskListServiceError::Repository`] when the list does not exist.
    pub async fn delete(&self, id: &TaskListId) -> TaskListServiceResult<()> {
        self.boundary
            .run_async("delete", self.delete_list(id))
            .await
    }

    async fn create_list(&self, name: &str, description: &str) -> TaskListServiceResult<TaskList> {
        let list_name = TaskListName::new(name)?;
        let list = TaskList::new(
            TaskListId::new(self.ids.generate()),
            list_name,
            description,
            &*self.clock,
        );
        self.repository.create(&list).await?;
        self.boundary.logger().in_scope(|| {
            tracing::debug!(list_id = %list.id(), "task list created");
        });
        Ok(list)
    }

    async fn find_list(&self, id: &TaskListId) -> TaskListServiceResult<TaskList> {
        id.ensure_present()?;
        Ok(self.repository.get_by_id(id).await?)
    }

    async fn amend_list(
        &self,
        id: &TaskListId,
        request: UpdateTaskListRequest,
    ) -> TaskListServiceResult<TaskList> {
        id.ensure_present()?;
        let (name, description) = request.into_changes()?;
        let mut list = self.repository.get_by_id(id).await?;
        list.amend(name, description, &*self.clock);
        self.repository.update(&list).await?;
        self.boundary.logger().in_scope(|| {
            tracing::debug!(list_id = %list.id(), "task list updated");
        });
        Ok(list)
    }

    async fn delete_list(&self, id: &TaskListId) -> TaskListServiceResult<()> {
        id.ensure_present()?;
        self.repository.delete(id).await?;
        self.boundary.logger().in_scope(|| {
            tracing::debug!(list_id = %id, "task list deleted");
        });
        Ok(())
    }
}
