//! Task comment entity.

use super::{CommentId, Task, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable annotation attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskComment {
    id: Option<CommentId>,
    task_id: TaskId,
    text: String,
    author: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: CommentId,
    /// Identifier of the owning task.
    pub task_id: TaskId,
    /// Persisted text.
    pub text: String,
    /// Persisted author.
    pub author: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TaskComment {
    /// Validates comment input and creates a comment on `task`.
    ///
    /// The timestamp is supplied by the caller; the entity never reads a
    /// clock. Checks run in a fixed order: task, text, author.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CommentWithoutTask`] when the task has no
    /// identity, [`TaskDomainError::EmptyCommentText`] when the text is
    /// blank, or [`TaskDomainError::EmptyCommentAuthor`] when the author is
    /// blank.
    pub fn new(
        task: &Task,
        text: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TaskDomainError> {
        let task_id = task.id().ok_or(TaskDomainError::CommentWithoutTask)?;

        let raw_text = text.into();
        if raw_text.trim().is_empty() {
            return Err(TaskDomainError::EmptyCommentText);
        }

        let raw_author = author.into();
        let trimmed_author = raw_author.trim();
        if trimmed_author.is_empty() {
            return Err(TaskDomainError::EmptyCommentAuthor);
        }

        Ok(Self {
            id: None,
            task_id,
            text: raw_text,
            author: trimmed_author.to_owned(),
            created_at,
        })
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: Some(data.id),
            task_id: data.task_id,
            text: data.text,
            author: data.author,
            created_at: data.created_at,
        }
    }

    /// Returns this comment with the storage-assigned identifier.
    ///
    /// Intended for repository adapters on save. Identity is assigned once:
    /// a comment that already carries an identifier keeps it.
    #[must_use]
    pub fn with_id(mut self, id: CommentId) -> Self {
        self.id = self.id.or(Some(id));
        self
    }

    /// Returns the comment identifier, or `None` before persistence.
    #[must_use]
    pub const fn id(&self) -> Option<CommentId> {
        self.id
    }

    /// Returns the identifier of the owning task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the comment author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
