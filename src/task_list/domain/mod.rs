//! Domain model for task lists.

mod error;
mod ids;
mod task_list;

pub use error::TaskListDomainError;
pub use ids::{TaskListId, TaskListName};
pub use task_list::{PersistedTaskListData, TaskList};
