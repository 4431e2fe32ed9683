//! Application services for task lists.

mod progress;
mod task_list;

pub use progress::{
    TaskListProgress, TaskListProgressError, TaskListProgressResult, TaskListProgressService,
};
pub use task_list::{
    TaskListService, TaskListServiceError, TaskListServiceResult, UpdateTaskListRequest,
};
