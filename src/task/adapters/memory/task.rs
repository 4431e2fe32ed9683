//! In-memory task repository.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::fault::FaultBoundary;
use crate::logging::Logger;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskFilter, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same store. Reads take the shared lock and writes the
/// exclusive lock; tasks are cloned on the way in and on the way out.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
    boundary: FaultBoundary,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository reporting faults to the current logger.
    #[must_use]
    pub fn new() -> Self {
        Self::with_logger(Logger::default())
    }

    /// Creates an empty repository reporting faults to `logger`.
    #[must_use]
    pub fn with_logger(logger: Logger) -> Self {
        Self {
            tasks: Arc::default(),
            boundary: FaultBoundary::new("repository", logger),
        }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Orders tasks newest first, breaking ties by identifier.
fn newest_first(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|left, right| {
        right
            .created_at()
            .cmp(&left.created_at())
            .then_with(|| left.id().cmp(right.id()))
    });
    tasks
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.boundary.run("create", || {
            let mut tasks = self.tasks.write();
            if tasks.contains_key(task.id()) {
                return Err(TaskRepositoryError::DuplicateTask(task.id().clone()));
            }
            tasks.insert(task.id().clone(), task.clone());
            Ok(())
        })
    }

    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.boundary.run("get_all", || {
            let tasks = self.tasks.read();
            Ok(newest_first(tasks.values().cloned().collect()))
        })
    }

    async fn get_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        self.boundary.run("get_by_id", || {
            self.tasks
                .read()
                .get(id)
                .cloned()
                .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
        })
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.boundary.run("update", || {
            let mut tasks = self.tasks.write();
            let stored = tasks
                .get_mut(task.id())
                .ok_or_else(|| TaskRepositoryError::NotFound(task.id().clone()))?;

            let mut data = PersistedTaskData::from(task.clone());
            data.created_at = stored.created_at();
            *stored = Task::from_persisted(data);
            Ok(())
        })
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        self.boundary.run("delete", || {
            self.tasks
                .write()
                .remove(id)
                .map(drop)
                .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))
        })
    }

    async fn get_by_filters(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        self.boundary.run("get_by_filters", || {
            let tasks = self.tasks.read();
            let matching = tasks
                .values()
                .filter(|task| filter.matches(task))
                .cloned()
                .collect();
            Ok(newest_first(matching))
        })
    }

    async fn count_by_list_id_and_status(
        &self,
        list_id: &str,
        status: TaskStatus,
    ) -> TaskRepositoryResult<usize> {
        self.boundary.run("count_by_list_id_and_status", || {
            let tasks = self.tasks.read();
            Ok(tasks
                .values()
                .filter(|task| task.belongs_to(list_id) && task.status() == status)
                .count())
        })
    }
}
