//! Use-case for listing tasks in a given status.

use super::{TaskQueryError, TaskResponse};
use crate::task::{domain::TaskStatus, ports::TaskRepository};
use std::sync::Arc;
use tracing::debug;

/// Lists tasks by workflow status.
#[derive(Clone)]
pub struct FindTasksByStatus<T>
where
    T: TaskRepository,
{
    tasks: Arc<T>,
}

impl<T> FindTasksByStatus<T>
where
    T: TaskRepository,
{
    /// Creates the use-case from its repository.
    #[must_use]
    pub const fn new(tasks: Arc<T>) -> Self {
        Self { tasks }
    }

    /// Returns summaries of every task with `status`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::Repository`] when storage fails.
    pub async fn execute(&self, status: TaskStatus) -> Result<Vec<TaskResponse>, TaskQueryError> {
        let tasks = self.tasks.find_by_status(status).await?;
        debug!(%status, count = tasks.len(), "tasks found by status");
        Ok(tasks.iter().map(TaskResponse::from).collect())
    }
}
