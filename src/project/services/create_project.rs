//! Use-case for creating a project with a unique name.

use crate::{
    error::FailureKind,
    project::{
        domain::{NewProject, Project, ProjectDomainError, ProjectStatus},
        ports::{ProjectRepository, ProjectRepositoryError},
    },
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    status: Option<ProjectStatus>,
    description: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with required project fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: ProjectStatus,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: Some(start_date),
            end_date: Some(end_date),
            status: Some(status),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Clears the start date, as when a caller omits it.
    #[must_use]
    pub const fn without_start_date(mut self) -> Self {
        self.start_date = None;
        self
    }

    /// Clears the status, as when a caller omits it.
    #[must_use]
    pub const fn without_status(mut self) -> Self {
        self.status = None;
        self
    }
}

impl From<CreateProjectRequest> for NewProject {
    fn from(request: CreateProjectRequest) -> Self {
        Self {
            name: request.name,
            start_date: request.start_date,
            end_date: request.end_date,
            status: request.status,
            description: request.description,
        }
    }
}

/// Errors returned by [`CreateProject`].
#[derive(Debug, Error)]
pub enum CreateProjectError {
    /// Project input violated an entity invariant.
    #[error(transparent)]
    Validation(#[from] ProjectDomainError),

    /// A project with the same name already exists.
    #[error("a project named '{0}' already exists")]
    Duplicate(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(ProjectRepositoryError),
}

impl CreateProjectError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::Duplicate(_) => FailureKind::Duplicate,
            Self::Repository(_) => FailureKind::Persistence,
        }
    }
}

impl From<ProjectRepositoryError> for CreateProjectError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::DuplicateName(name) => Self::Duplicate(name),
            other @ ProjectRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Creates projects after checking name uniqueness.
#[derive(Clone)]
pub struct CreateProject<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> CreateProject<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use-case from its repository and time source.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Validates and persists a new project.
    ///
    /// Nothing is saved unless the name is free and the project passes
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns [`CreateProjectError::Duplicate`] when the name is taken,
    /// [`CreateProjectError::Validation`] when an invariant fails, or
    /// [`CreateProjectError::Repository`] when storage fails.
    pub async fn execute(
        &self,
        request: CreateProjectRequest,
    ) -> Result<Project, CreateProjectError> {
        let name = request.name.trim().to_owned();
        debug!(project_name = %name, "creating project");

        if self.repository.exists_by_name(&name).await? {
            warn!(project_name = %name, "project name already in use");
            return Err(CreateProjectError::Duplicate(name));
        }

        let project = Project::new(request.into(), &*self.clock)?;
        let saved = self.repository.save(project).await?;
        info!(
            project_id = ?saved.id(),
            project_name = saved.name(),
            status = %saved.status(),
            "project created"
        );
        Ok(saved)
    }
}
