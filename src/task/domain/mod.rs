//! Domain model for tasks.
//!
//! Tasks carry a title, an optional owning list, and status/priority values
//! drawn from fixed vocabularies. All infrastructure concerns stay outside of
//! this module.

mod error;
mod filter;
mod ids;
mod progress;
mod status;
mod task;

pub use error::TaskDomainError;
pub use filter::TaskFilter;
pub use ids::{TaskId, TaskTitle};
pub use progress::CompletionTally;
pub use status::{TaskPriority, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task, TaskRevision};
