//! Completion percentage of task lists.
//!
//! Progress is derived from the tasks on every call and never stored. The
//! task read and the list read are independent, so a task created between
//! them may or may not be counted.

use super::task_list::{TaskListService, TaskListServiceError};
use crate::error::ErrorKind;
use crate::fault::{Fault, FaultBoundary};
use crate::logging::Logger;
use crate::task::{
    domain::CompletionTally,
    ports::TaskRepository,
    services::{TaskService, TaskServiceError},
};
use crate::task_list::{
    domain::{TaskList, TaskListId},
    ports::TaskListRepository,
};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// A task list paired with its completion percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskListProgress {
    /// The list itself.
    pub list: TaskList,
    /// Percentage of the list's tasks that are completed.
    pub completion_percentage: f64,
}

/// Errors raised while computing progress.
#[derive(Debug, Error)]
pub enum TaskListProgressError {
    /// Reading task lists failed.
    #[error(transparent)]
    TaskList(#[from] TaskListServiceError),
    /// Reading tasks failed.
    #[error(transparent)]
    Task(#[from] TaskServiceError),
    /// A panic was caught while aggregating.
    #[error(transparent)]
    Fault(#[from] Fault),
}

impl TaskListProgressError {
    /// Classifies the failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskList(err) => err.kind(),
            Self::Task(err) => err.kind(),
            Self::Fault(_) => ErrorKind::Internal,
        }
    }
}

/// Result type for progress operations.
pub type TaskListProgressResult<T> = Result<T, TaskListProgressError>;

/// Computes completion percentages by aggregating tasks read through the
/// task service.
#[derive(Clone)]
pub struct TaskListProgressService<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<TaskService<T, C>>,
    boundary: FaultBoundary,
}

impl<T, C> TaskListProgressService<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a progress service over a shared task service.
    #[must_use]
    pub fn new(tasks: Arc<TaskService<T, C>>) -> Self {
        Self {
            tasks,
            boundary: FaultBoundary::new("service", Logger::default()),
        }
    }

    /// Replaces the logger faults are reported to.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.boundary = FaultBoundary::new("service", logger);
        self
    }

    /// Returns `100 * completed / total` for the list, or `0.0` when it has
    /// no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListProgressError::Task`] when tasks cannot be read.
    pub async fn completion_percentage(&self, list_id: &TaskListId) -> TaskListProgressResult<f64> {
        self.boundary
            .run_async("completion_percentage", self.tally(list_id))
            .await
            .map(|tally| tally.percentage())
    }

    /// Pairs `list` with its completion percentage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListProgressError::Task`] when tasks cannot be read.
    pub async fn with_progress(&self, list: TaskList) -> TaskListProgressResult<TaskListProgress> {
        let completion_percentage = self.completion_percentage(list.id()).await?;
        Ok(TaskListProgress {
            list,
            completion_percentage,
        })
    }

    /// Returns every task list with its completion percentage, newest first.
    ///
    /// # Errors
    ///
    /// Propagates failures from either service.
    pub async fn list_all_with_progress<R, LC>(
        &self,
        lists: &TaskListService<R, LC>,
    ) -> TaskListProgressResult<Vec<TaskListProgress>>
    where
        R: TaskListRepository,
        LC: Clock + Send + Sync,
    {
        self.boundary
            .run_async("list_all_with_progress", self.pair_all(lists))
            .await
    }

    /// Returns one task list with its completion percentage.
    ///
    /// # Errors
    ///
    /// Propagates failures from either service, including `NotFound`.
    pub async fn get_with_progress<R, LC>(
        &self,
        lists: &TaskListService<R, LC>,
        id: &TaskListId,
    ) -> TaskListProgressResult<TaskListProgress>
    where
        R: TaskListRepository,
        LC: Clock + Send + Sync,
    {
        self.boundary
            .run_async("get_with_progress", self.pair_one(lists, id))
            .await
    }

    async fn pair_all<R, LC>(
        &self,
        lists: &TaskListService<R, LC>,
    ) -> TaskListProgressResult<Vec<TaskListProgress>>
    where
        R: TaskListRepository,
        LC: Clock + Send + Sync,
    {
        let all_lists = lists.get_all().await?;
        let all_tasks = self.tasks.get_by_filters("", "").await?;
        Ok(all_lists
            .into_iter()
            .map(|list| {
                let tally = CompletionTally::from_tasks(&all_tasks, list.id().as_str());
                TaskListProgress {
                    list,
                    completion_percentage: tally.percentage(),
                }
            })
            .collect())
    }

    async fn pair_one<R, LC>(
        &self,
        lists: &TaskListService<R, LC>,
        id: &TaskListId,
    ) -> TaskListProgressResult<TaskListProgress>
    where
        R: TaskListRepository,
        LC: Clock + Send + Sync,
    {
        let list = lists.get_by_id(id).await?;
        let tally = self.tally(list.id()).await?;
        Ok(TaskListProgress {
            list,
            completion_percentage: tally.percentage(),
        })
    }

    async fn tally(&self, list_id: &TaskListId) -> TaskListProgressResult<CompletionTally> {
        let tasks = self.tasks.get_by_filters("", "").await?;
        Ok(CompletionTally::from_tasks(&tasks, list_id.as_str()))
    }
}
