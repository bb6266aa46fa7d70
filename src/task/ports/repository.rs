//! Repository ports for tasks and task comments.

use crate::{
    project::domain::{Project, ProjectId},
    task::domain::{Task, TaskComment, TaskId, TaskStatus},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task and comment repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns whether `project` already owns a task with the given title.
    async fn exists_by_title_and_project(
        &self,
        title: &str,
        project: &Project,
    ) -> TaskRepositoryResult<bool>;

    /// Stores a new task and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTitle`] when the owning
    /// project already holds a task with the same title.
    async fn save(&self, task: Task) -> TaskRepositoryResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks with the given status in storage order.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;
}

/// Task comment persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskCommentRepository: Send + Sync {
    /// Stores a new comment and returns it with its assigned identifier.
    async fn save(&self, comment: TaskComment) -> TaskRepositoryResult<TaskComment>;

    /// Returns every comment on the task in the order they were saved.
    ///
    /// Returns an empty vector when the task has no comments.
    async fn find_all_by_task_id(&self, task_id: TaskId)
    -> TaskRepositoryResult<Vec<TaskComment>>;
}

/// Errors returned by task and comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same title already exists in the project.
    #[error("duplicate task title '{title}' in project {project_id}")]
    DuplicateTitle {
        /// Conflicting title.
        title: String,
        /// Owning project.
        project_id: ProjectId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
