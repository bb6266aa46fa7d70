//! In-memory repository for projects.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository.
///
/// Identifiers are assigned on save and project names are kept unique, so
/// this adapter is the authoritative uniqueness guard for its callers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectId, Project>,
    name_index: HashMap<String, ProjectId>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn exists_by_name(&self, name: &str) -> ProjectRepositoryResult<bool> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.name_index.contains_key(name))
    }

    async fn save(&self, project: Project) -> ProjectRepositoryResult<Project> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.name_index.contains_key(project.name()) {
            return Err(ProjectRepositoryError::DuplicateName(
                project.name().to_owned(),
            ));
        }

        let id = project.id().unwrap_or_default();
        let saved = project.with_id(id);
        state.name_index.insert(saved.name().to_owned(), id);
        state.projects.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.projects.get(&id).cloned())
    }
}
