//! In-memory repository for task comments.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{TaskComment, TaskId},
    ports::{TaskCommentRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory comment repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskCommentRepository {
    comments: Arc<RwLock<Vec<TaskComment>>>,
}

impl InMemoryTaskCommentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskCommentRepository for InMemoryTaskCommentRepository {
    async fn save(&self, comment: TaskComment) -> TaskRepositoryResult<TaskComment> {
        let mut comments = self.comments.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let id = comment.id().unwrap_or_default();
        let saved = comment.with_id(id);
        comments.push(saved.clone());
        Ok(saved)
    }

    async fn find_all_by_task_id(
        &self,
        task_id: TaskId,
    ) -> TaskRepositoryResult<Vec<TaskComment>> {
        let comments = self.comments.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(comments
            .iter()
            .filter(|comment| comment.task_id() == task_id)
            .cloned()
            .collect())
    }
}
