//! Error types for task domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing tasks and task comments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The owning project has not been persisted yet.
    #[error("task must belong to a persisted project")]
    ProjectNotPersisted,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Estimated hours are not strictly positive or reach the integer limit.
    #[error("estimated hours must be between 1 and {max}, got {0}", max = i32::MAX - 1)]
    InvalidEstimatedHours(i32),

    /// The assignee is empty after trimming.
    #[error("task assignee must not be empty")]
    EmptyAssignee,

    /// The task status was not supplied.
    #[error("task status is required")]
    MissingStatus,

    /// The creation timestamp was not supplied.
    #[error("task creation time is required")]
    MissingCreatedAt,

    /// The finish timestamp was not supplied for an unfinished task.
    #[error("task finish time is required")]
    MissingFinishedAt,

    /// The creation timestamp lies in the past.
    #[error("task creation time {0} is in the past")]
    CreatedAtInPast(DateTime<Utc>),

    /// The finish timestamp lies in the past.
    #[error("task finish time {0} is in the past")]
    FinishedAtInPast(DateTime<Utc>),

    /// The creation timestamp is after the finish timestamp.
    #[error("task creation time {created_at} must not be after finish time {finished_at}")]
    CreatedAfterFinished {
        /// Supplied creation timestamp.
        created_at: DateTime<Utc>,
        /// Effective finish timestamp.
        finished_at: DateTime<Utc>,
    },

    /// The comment is not attached to a persisted task.
    #[error("comment must be associated with a persisted task")]
    CommentWithoutTask,

    /// The comment text is empty after trimming.
    #[error("comment text must not be empty")]
    EmptyCommentText,

    /// The comment author is empty after trimming.
    #[error("comment author must not be empty")]
    EmptyCommentAuthor,
}

/// Error returned while parsing task status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status '{0}', expected TODO, IN_PROGRESS or DONE")]
pub struct ParseTaskStatusError(pub String);
