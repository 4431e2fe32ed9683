//! Completion tally for the tasks of one list.

use super::{Task, TaskStatus};

/// Counts of completed and total tasks in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionTally {
    completed: usize,
    total: usize,
}

impl CompletionTally {
    /// Creates a tally from precomputed counts, for example from
    /// `count_by_list_id_and_status`.
    #[must_use]
    pub const fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Tallies the tasks assigned to `list_id`.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, list_id: &str) -> Self {
        tasks
            .into_iter()
            .filter(|task| task.belongs_to(list_id))
            .fold(Self::default(), |tally, task| Self {
                completed: tally.completed + usize::from(task.status() == TaskStatus::Completed),
                total: tally.total + 1,
            })
    }

    /// Returns the number of completed tasks.
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Returns the number of tasks in the list.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns `100 * completed / total`, or `0.0` for an empty list.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "percentages are reported as floating point; task counts stay far below 2^52"
    )]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}
