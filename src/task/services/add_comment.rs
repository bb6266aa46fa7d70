//! Use-case for commenting on an existing task.

use crate::{
    error::FailureKind,
    task::{
        domain::{TaskComment, TaskDomainError, TaskId},
        ports::{TaskCommentRepository, TaskRepository, TaskRepositoryError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for adding a comment to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommentRequest {
    text: String,
    author: String,
}

impl AddCommentRequest {
    /// Creates a comment request.
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// Errors returned by [`AddCommentToTask`].
#[derive(Debug, Error)]
pub enum AddCommentError {
    /// Comment input violated an entity invariant.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl AddCommentError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::TaskNotFound(_) => FailureKind::NotFound,
            Self::Repository(_) => FailureKind::Persistence,
        }
    }
}

/// Adds comments to existing tasks.
#[derive(Clone)]
pub struct AddCommentToTask<T, M, C>
where
    T: TaskRepository,
    M: TaskCommentRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    comments: Arc<M>,
    clock: Arc<C>,
}

impl<T, M, C> AddCommentToTask<T, M, C>
where
    T: TaskRepository,
    M: TaskCommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use-case from its repositories and time source.
    #[must_use]
    pub const fn new(tasks: Arc<T>, comments: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            comments,
            clock,
        }
    }

    /// Validates and persists a comment on the task identified by `task_id`.
    ///
    /// The comment timestamp is read from the injected clock.
    ///
    /// # Errors
    ///
    /// Returns [`AddCommentError::TaskNotFound`] when the task does not
    /// exist, [`AddCommentError::Validation`] when the text or author is
    /// blank, or [`AddCommentError::Repository`] when storage fails.
    pub async fn execute(
        &self,
        task_id: TaskId,
        request: AddCommentRequest,
    ) -> Result<TaskComment, AddCommentError> {
        debug!(%task_id, author = %request.author, "adding comment");

        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(AddCommentError::TaskNotFound(task_id))?;

        let posted_at = self.clock.utc();
        let comment = TaskComment::new(&task, request.text, request.author, posted_at)?;
        let saved = self.comments.save(comment).await?;
        info!(%task_id, comment_id = ?saved.id(), "comment added");
        Ok(saved)
    }
}
