//! Port contracts for task list persistence.

pub mod repository;

#[cfg(test)]
pub use repository::MockTaskListRepository;
pub use repository::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult};
