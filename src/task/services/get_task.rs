//! Use-case for fetching a task, optionally with its comments.

use crate::{
    error::FailureKind,
    task::{
        domain::{Task, TaskComment, TaskId},
        ports::{TaskCommentRepository, TaskRepository, TaskRepositoryError},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors returned by task queries.
#[derive(Debug, Error)]
pub enum TaskQueryError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskQueryError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::TaskNotFound(_) => FailureKind::NotFound,
            Self::Repository(_) => FailureKind::Persistence,
        }
    }
}

/// A task together with its comments when they were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    /// The requested task.
    pub task: Task,
    /// `None` when comments were not requested, otherwise every comment on
    /// the task in the order they were saved.
    pub comments: Option<Vec<TaskComment>>,
}

/// Fetches a single task by identifier.
#[derive(Clone)]
pub struct GetTaskById<T, M>
where
    T: TaskRepository,
    M: TaskCommentRepository,
{
    tasks: Arc<T>,
    comments: Arc<M>,
}

impl<T, M> GetTaskById<T, M>
where
    T: TaskRepository,
    M: TaskCommentRepository,
{
    /// Creates the use-case from its repositories.
    #[must_use]
    pub const fn new(tasks: Arc<T>, comments: Arc<M>) -> Self {
        Self { tasks, comments }
    }

    /// Returns the task, loading its comments only when `with_comments` is
    /// set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::TaskNotFound`] when the task does not exist,
    /// or [`TaskQueryError::Repository`] when storage fails.
    pub async fn execute(
        &self,
        task_id: TaskId,
        with_comments: bool,
    ) -> Result<TaskDetails, TaskQueryError> {
        debug!(%task_id, with_comments, "fetching task");

        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskQueryError::TaskNotFound(task_id))?;

        let comments = if with_comments {
            Some(self.comments.find_all_by_task_id(task_id).await?)
        } else {
            None
        };

        Ok(TaskDetails { task, comments })
    }
}
