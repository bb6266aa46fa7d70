//! In-memory repository for tasks.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::{
    project::domain::{Project, ProjectId},
    task::{
        domain::{Task, TaskId, TaskStatus},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
};

/// Thread-safe in-memory task repository.
///
/// Tasks are kept in insertion order and titles are unique per project.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    id_index: HashMap<TaskId, usize>,
    title_index: HashSet<(ProjectId, String)>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn exists_by_title_and_project(
        &self,
        title: &str,
        project: &Project,
    ) -> TaskRepositoryResult<bool> {
        let Some(project_id) = project.id() else {
            return Ok(false);
        };
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .title_index
            .contains(&(project_id, title.trim().to_owned())))
    }

    async fn save(&self, task: Task) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let title_key = (task.project_id(), task.title().to_owned());
        if state.title_index.contains(&title_key) {
            return Err(TaskRepositoryError::DuplicateTitle {
                title: title_key.1,
                project_id: title_key.0,
            });
        }

        let id = task.id().unwrap_or_default();
        let saved = task.with_id(id);
        let position = state.tasks.len();
        state.title_index.insert(title_key);
        state.id_index.insert(id, position);
        state.tasks.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .id_index
            .get(&id)
            .and_then(|position| state.tasks.get(*position))
            .cloned())
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }
}
