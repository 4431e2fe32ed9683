//! Application services for task orchestration.

mod task;

pub use task::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
