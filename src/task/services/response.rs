//! Serialisable response shapes for task use-cases.
//!
//! These types decide what a transport layer sends back. Absent optional
//! values are left out of the serialised form entirely, so "not requested"
//! and "requested but empty" stay distinguishable.

use super::TaskDetails;
use crate::{
    project::domain::ProjectId,
    task::domain::{CommentId, Task, TaskComment, TaskId, TaskStatus},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of a task without its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    /// Task identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Task title.
    pub title: String,
    /// Owning project.
    pub project_id: ProjectId,
    /// Estimated effort in hours.
    pub estimated_hours: i32,
    /// Person responsible for the task.
    pub assignee: String,
    /// Workflow status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Finish timestamp.
    pub finished_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            project_id: task.project_id(),
            estimated_hours: task.estimated_hours().value(),
            assignee: task.assignee().to_owned(),
            status: task.status(),
            created_at: task.created_at(),
            finished_at: task.finished_at(),
        }
    }
}

/// A single task comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponse {
    /// Comment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CommentId>,
    /// Owning task.
    pub task_id: TaskId,
    /// Comment text.
    pub text: String,
    /// Comment author.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&TaskComment> for CommentResponse {
    fn from(comment: &TaskComment) -> Self {
        Self {
            id: comment.id(),
            task_id: comment.task_id(),
            text: comment.text().to_owned(),
            author: comment.author().to_owned(),
            created_at: comment.created_at(),
        }
    }
}

/// A task with its comments attached when they were requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskWithCommentsResponse {
    /// Task fields, flattened into the top level.
    #[serde(flatten)]
    pub task: TaskResponse,
    /// Comments, omitted from the output when they were not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentResponse>>,
}

impl From<&TaskDetails> for TaskWithCommentsResponse {
    fn from(details: &TaskDetails) -> Self {
        Self {
            task: TaskResponse::from(&details.task),
            comments: details
                .comments
                .as_ref()
                .map(|comments| comments.iter().map(CommentResponse::from).collect()),
        }
    }
}
