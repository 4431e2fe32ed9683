//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::fault::FaultBoundary;
use crate::logging::Logger;
use crate::postgres::{PgPool, get_conn_with, run_blocking_with};
use crate::task::{
    domain::{
        PersistedTaskData, Task, TaskFilter, TaskId, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
    boundary: FaultBoundary,
}

impl PostgresTaskRepository {
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

    async fn run_blocking<F, T>(&self, operation: &'static str, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let boundary = self.boundary.clone();
        run_blocking_with(
            move || {
                boundary.run(operation, || {
                    let mut connection =
                        get_conn_with(&pool, TaskRepositoryError::persistence)?;
                    f(&mut connection)
                })
            },
            TaskRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id().clone();
        let new_row = NewTaskRow::from(task);

        self.run_blocking("create", move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id.clone())
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.get_by_filters(&TaskFilter::any()).await
    }

    async fn get_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Task> {
        let lookup_id = id.clone();
        self.run_blocking("get_by_id", move |connection| {
            let row = tasks::table
                .find(lookup_id.as_str())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task)
                .transpose()?
                .ok_or(TaskRepositoryError::NotFound(lookup_id))
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id().clone();
        let changeset = TaskChangeset::from(task);

        self.run_blocking("update", move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.as_str()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let task_id = id.clone();
        self.run_blocking("delete", move |connection| {
            let affected = diesel::delete(tasks::table.find(task_id.as_str()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn get_by_filters(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>> {
        let criteria = *filter;
        self.run_blocking("get_by_filters", move |connection| {
            let mut query = tasks::table.select(TaskRow::as_select()).into_boxed();
            if let Some(status) = criteria.status() {
                query = query.filter(tasks::status.eq(status.as_str()));
            }
            if let Some(priority) = criteria.priority() {
                query = query.filter(tasks::priority.eq(priority.as_str()));
            }

            let rows = query
                .order((tasks::created_at.desc(), tasks::id.asc()))
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn count_by_list_id_and_status(
        &self,
        list_id: &str,
        status: TaskStatus,
    ) -> TaskRepositoryResult<usize> {
        let lookup_list_id = list_id.to_owned();
        self.run_blocking("count_by_list_id_and_status", move |connection| {
            let count = tasks::table
                .filter(tasks::list_id.eq(&lookup_list_id))
                .filter(tasks::status.eq(status.as_str()))
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            usize::try_from(count).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

/// Converts a stored row into a task, rejecting labels outside the
/// vocabularies.
pub(super) fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        list_id,
        title,
        description,
        status: persisted_status,
        priority: persisted_priority,
        created_at,
        updated_at,
    } = row;

    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let task_title = TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        list_id,
        title: task_title,
        description,
        status,
        priority,
        created_at,
        updated_at,
    }))
}
