//! In-memory task list repository.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::fault::FaultBoundary;
use crate::logging::Logger;
use crate::task_list::{
    domain::{PersistedTaskListData, TaskList, TaskListId},
    ports::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult},
};

/// Thread-safe in-memory task list repository.
#[derive(Debug, Clone)]
pub struct InMemoryTaskListRepository {
    lists: Arc<RwLock<HashMap<TaskListId, TaskList>>>,
    boundary: FaultBoundary,
}

impl InMemoryTaskListRepository {
    /// Creates an empty repository reporting faults to the current logger.
    #[must_use]
    pub fn new() -> Self {
        Self::with_logger(Logger::default())
    }

    /// Creates an empty repository reporting faults to `logger`.
    #[must_use]
    pub fn with_logger(logger: Logger) -> Self {
        Self {
            lists: Arc::default(),
            boundary: FaultBoundary::new("repository", logger),
        }
    }
}

impl Default for InMemoryTaskListRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskListRepository for InMemoryTaskListRepository {
    async fn create(&self, list: &TaskList) -> TaskListRepositoryResult<()> {
        self.boundary.run("create", || {
            let mut lists = self.lists.write();
            if lists.contains_key(list.id()) {
                return Err(TaskListRepositoryError::DuplicateTaskList(list.id().clone()));
            }
            lists.insert(list.id().clone(), list.clone());
            Ok(())
        })
    }

    async fn get_all(&self) -> TaskListRepositoryResult<Vec<TaskList>> {
        self.boundary.run("get_all", || {
            let mut all: Vec<TaskList> = self.lists.read().values().cloned().collect();
            all.sort_by(|left, right| {
                right
                    .created_at()
                    .cmp(&left.created_at())
                    .then_with(|| left.id().cmp(right.id()))
            });
            Ok(all)
        })
    }

    async fn get_by_id(&self, id: &TaskListId) -> TaskListRepositoryResult<TaskList> {
        self.boundary.run("get_by_id", || {
            self.lists
                .read()
                .get(id)
                .cloned()
                .ok_or_else(|| TaskListRepositoryError::NotFound(id.clone()))
        })
    }

    async fn update(&self, list: &TaskList) -> TaskListRepositoryResult<()> {
        self.boundary.run("update", || {
            let mut lists = self.lists.write();
            let stored = lists
                .get_mut(list.id())
                .ok_or_else(|| TaskListRepositoryError::NotFound(list.id().clone()))?;

            let mut data = PersistedTaskListData::from(list.clone());
            data.created_at = stored.created_at();
            *stored = TaskList::from_persisted(data);
            Ok(())
        })
    }

    async fn delete(&self, id: &TaskListId) -> TaskListRepositoryResult<()> {
        self.boundary.run("delete", || {
            self.lists
                .write()
                .remove(id)
                .map(drop)
                .ok_or_else(|| TaskListRepositoryError::NotFound(id.clone()))
        })
    }
}
