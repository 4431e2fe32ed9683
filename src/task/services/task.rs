//! Service layer for task creation, querying and revision.

use crate::error::ErrorKind;
use crate::fault::{Fault, FaultBoundary};
use crate::identity::{IdGenerator, UuidIdGenerator};
use crate::logging::Logger;
use crate::task::{
    domain::{
        NewTask, Task, TaskDomainError, TaskFilter, TaskId, TaskPriority, TaskRevision,
        TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Priority defaults to `medium` when left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    list_id: String,
    title: String,
    description: String,
    priority: String,
}

impl CreateTaskRequest {
    /// Creates a request for an unassigned task.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            list_id: String::new(),
            title: title.into(),
            description: String::new(),
            priority: String::new(),
        }
    }

    /// Assigns the task to a list.
    #[must_use]
    pub fn with_list_id(mut self, list_id: impl Into<String>) -> Self {
        self.list_id = list_id.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority label.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }
}

/// Request payload for replacing every mutable field of a task.
///
/// Fields left blank are written as blank; status and priority must be valid
/// labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    list_id: String,
    title: String,
    description: String,
    status: String,
    priority: String,
}

impl UpdateTaskRequest {
    /// Creates a full-replace update.
    #[must_use]
    pub fn new(
        list_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            list_id: list_id.into(),
            title: title.into(),
            description: description.into(),
            status: status.into(),
            priority: priority.into(),
        }
    }

    fn validate(self) -> Result<TaskRevision, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let status = TaskStatus::try_from(self.status.as_str())?;
        let priority = TaskPriority::try_from(self.priority.as_str())?;
        Ok(TaskRevision {
            list_id: self.list_id,
            title,
            description: self.description,
            status,
            priority,
        })
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// A panic was caught inside the service.
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl TaskServiceError {
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

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    ids: Arc<dyn IdGenerator>,
    boundary: FaultBoundary,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
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

    /// Creates a pending task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for a blank title or an unknown
    /// priority, and [`TaskServiceError::Repository`] when storage fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        self.boundary
            .run_async("create", self.create_task(request))
            .await
    }

    /// Returns every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn get_all(&self) -> TaskServiceResult<Vec<Task>> {
        self.boundary
            .run_async("get_all", async {
                self.repository
                    .get_all()
                    .await
                    .map_err(TaskServiceError::from)
            })
            .await
    }

    /// Returns tasks matching the given labels; blank labels match anything.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for a non-blank label outside its
    /// vocabulary, before storage is touched.
    pub async fn get_by_filters(
        &self,
        status: &str,
        priority: &str,
    ) -> TaskServiceResult<Vec<Task>> {
        self.boundary
            .run_async("get_by_filters", self.filter_tasks(status, priority))
            .await
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] wrapping
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn get_by_id(&self, id: &TaskId) -> TaskServiceResult<Task> {
        self.boundary
            .run_async("get_by_id", async {
                self.repository
                    .get_by_id(id)
                    .await
                    .map_err(TaskServiceError::from)
            })
            .await
    }

    /// Replaces every mutable field of a task.
    ///
    /// Validation runs before storage is touched; the creation timestamp is
    /// kept and the update timestamp refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for a blank title or an invalid
    /// status or priority, and [`TaskServiceError::Repository`] when the task
    /// does not exist or storage fails.
    pub async fn update(
        &self,
        id: &TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        self.boundary
            .run_async("update", self.revise_task(id, request))
            .await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] wrapping
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: &TaskId) -> TaskServiceResult<()> {
        self.boundary
            .run_async("delete", self.delete_task(id))
            .await
    }

    async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let priority = TaskPriority::parse_optional(&request.priority)?.unwrap_or_default();
        let draft = NewTask {
            list_id: request.list_id,
            title,
            description: request.description,
            priority,
        };

        let task = Task::new(TaskId::new(self.ids.generate()), draft, &*self.clock);
        self.repository.create(&task).await?;
        self.boundary.logger().in_scope(|| {
            tracing::debug!(task_id = %task.id(), list_id = task.list_id(), "task created");
        });
        Ok(task)
    }

    async fn filter_tasks(&self, status: &str, priority: &str) -> TaskServiceResult<Vec<Task>> {
        let filter = TaskFilter::parse(status, priority)?;
        Ok(self.repository.get_by_filters(&filter).await?)
    }

    async fn revise_task(&self, id: &TaskId, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let revision = request.validate()?;
        let mut task = self.repository.get_by_id(id).await?;
        task.revise(revision, &*self.clock);
        self.repository.update(&task).await?;
        self.boundary.logger().in_scope(|| {
            tracing::debug!(task_id = %task.id(), status = %task.status(), "task updated");
        });
        Ok(task)
    }

    async fn delete_task(&self, id: &TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await?;
        self.boundary.logger().in_scope(|| {
            tracing::debug!(task_id = %id, "task deleted");
        });
        Ok(())
    }
}
