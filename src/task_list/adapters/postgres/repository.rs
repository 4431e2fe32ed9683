//! `PostgreSQL` repository implementation for task list storage.

use super::{
    models::{NewTaskListRow, TaskListChangeset, TaskListRow},
    schema::task_lists,
};
use crate::fault::FaultBoundary;
use crate::logging::Logger;
use crate::postgres::{PgPool, get_conn_with, run_blocking_with};
use crate::task_list::{
    domain::{PersistedTaskListData, TaskList, TaskListId, TaskListName},
    ports::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task list repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskListRepository {
    pool: PgPool,
    boundary: FaultBoundary,
}

impl PostgresTaskListRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_logger(pool, Logger::default())
    }

    /// Creates a repository reporting faults to `logger`.
    #[must_use]
    pub const fn with_logger(pool: PgPool, logger: Logger) -> Self {
        Self {
            pool,
            boundary: FaultBoundary::new("repository", logger),
        }
    }

    async fn run_blocking<F, T>(
        &self,
        operation: &'static str,
        f: F,
    ) -> TaskListRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskListRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let boundary = self.boundary.clone();
        run_blocking_with(
            move || {
                boundary.run(operation, || {
                    let mut connection =
                        get_conn_with(&pool, TaskListRepositoryError::persistence)?;
                    f(&mut connection)
                })
            },
            TaskListRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TaskListRepository for PostgresTaskListRepository {
    async fn create(&self, list: &TaskList) -> TaskListRepositoryResult<()> {
        let list_id = list.id().clone();
        let new_row = NewTaskListRow::from(list);

        self.run_blocking("create", move |connection| {
            diesel::insert_into(task_lists::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskListRepositoryError::DuplicateTaskList(list_id.clone())
                    }
                    _ => TaskListRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn get_all(&self) -> TaskListRepositoryResult<Vec<TaskList>> {
        self.run_blocking("get_all", |connection| {
            let rows = task_lists::table
                .select(TaskListRow::as_select())
                .order((task_lists::created_at.desc(), task_lists::id.asc()))
                .load::<TaskListRow>(connection)
                .map_err(TaskListRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task_list).collect()
        })
        .await
    }

    async fn get_by_id(&self, id: &TaskListId) -> TaskListRepositoryResult<TaskList> {
        let lookup_id = id.clone();
        self.run_blocking("get_by_id", move |connection| {
            let row = task_lists::table
                .find(lookup_id.as_str())
                .select(TaskListRow::as_select())
                .first::<TaskListRow>(connection)
                .optional()
                .map_err(TaskListRepositoryError::persistence)?;
            row.map(row_to_task_list)
                .transpose()?
                .ok_or(TaskListRepositoryError::NotFound(lookup_id))
        })
        .await
    }

    async fn update(&self, list: &TaskList) -> TaskListRepositoryResult<()> {
        let list_id = list.id().clone();
        let changeset = TaskListChangeset::from(list);

        self.run_blocking("update", move |connection| {
            let affected = diesel::update(task_lists::table.find(list_id.as_str()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskListRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskListRepositoryError::NotFound(list_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &TaskListId) -> TaskListRepositoryResult<()> {
        let list_id = id.clone();
        self.run_blocking("delete", move |connection| {
            let affected = diesel::delete(task_lists::table.find(list_id.as_str()))
                .execute(connection)
                .map_err(TaskListRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskListRepositoryError::NotFound(list_id));
            }
            Ok(())
        })
        .await
    }
}

/// Converts a stored row into a task list.
pub(super) fn row_to_task_list(row: TaskListRow) -> TaskListRepositoryResult<TaskList> {
    let name = TaskListName::new(row.name).map_err(TaskListRepositoryError::persistence)?;
    Ok(TaskList::from_persisted(PersistedTaskListData {
        id: TaskListId::new(row.id),
        name,
        description: row.description,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
