//! Use-case for adding a task to an open project.

use crate::{
    error::FailureKind,
    project::{
        domain::ProjectId,
        ports::{ProjectRepository, ProjectRepositoryError},
    },
    task::{
        domain::{NewTask, Task, TaskDomainError, TaskSchedulePolicy, TaskStatus},
        ports::{TaskRepository, TaskRepositoryError},
    },
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task inside a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    estimated_hours: i32,
    assignee: String,
    status: Option<TaskStatus>,
    created_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields and no schedule.
    #[must_use]
    pub fn new(
        project_id: ProjectId,
        title: impl Into<String>,
        estimated_hours: i32,
        assignee: impl Into<String>,
        status: TaskStatus,
    ) -> Self {
        Self {
            project_id,
            title: title.into(),
            estimated_hours,
            assignee: assignee.into(),
            status: Some(status),
            created_at: None,
            finished_at: None,
        }
    }

    /// Sets the planned start and end of the task.
    #[must_use]
    pub const fn scheduled(
        mut self,
        created_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        self.created_at = Some(created_at);
        self.finished_at = Some(finished_at);
        self
    }

    /// Sets only the planned start of the task.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Returns the target project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    fn into_new_task(self) -> NewTask {
        NewTask {
            title: self.title,
            estimated_hours: self.estimated_hours,
            assignee: self.assignee,
            status: self.status,
            created_at: self.created_at,
            finished_at: self.finished_at,
        }
    }
}

/// Errors returned by [`CreateTask`].
#[derive(Debug, Error)]
pub enum CreateTaskError {
    /// Task input violated an entity invariant.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The target project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The target project is closed and accepts no new tasks.
    #[error("project {0} is closed and cannot accept new tasks")]
    ProjectClosed(ProjectId),

    /// The project already holds a task with the same title.
    #[error("a task titled '{title}' already exists in project {project_id}")]
    DuplicateTitle {
        /// Conflicting title.
        title: String,
        /// Owning project.
        project_id: ProjectId,
    },

    /// Project lookup failed.
    #[error(transparent)]
    ProjectRepository(#[from] ProjectRepositoryError),

    /// Task storage failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl CreateTaskError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::ProjectNotFound(_) => FailureKind::NotFound,
            Self::ProjectClosed(_) => FailureKind::BusinessRule,
            Self::DuplicateTitle { .. } => FailureKind::Duplicate,
            Self::ProjectRepository(_) | Self::Repository(_) => FailureKind::Persistence,
        }
    }
}

impl From<TaskRepositoryError> for CreateTaskError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::DuplicateTitle { title, project_id } => {
                Self::DuplicateTitle { title, project_id }
            }
            other @ TaskRepositoryError::Persistence(_) => Self::Repository(other),
        }
    }
}

/// Creates tasks in projects that are still open.
#[derive(Clone)]
pub struct CreateTask<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    clock: Arc<C>,
    policy: TaskSchedulePolicy,
}

impl<P, T, C> CreateTask<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates the use-case with the default schedule policy.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            projects,
            tasks,
            clock,
            policy: TaskSchedulePolicy::strict(),
        }
    }

    /// Replaces the schedule policy applied to new tasks.
    #[must_use]
    pub const fn with_policy(mut self, policy: TaskSchedulePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates and persists a new task.
    ///
    /// Checks run in order: project existence, project status, title
    /// uniqueness, task invariants. A closed project is reported even when
    /// the title is also taken.
    ///
    /// # Errors
    ///
    /// Returns [`CreateTaskError::ProjectNotFound`],
    /// [`CreateTaskError::ProjectClosed`],
    /// [`CreateTaskError::DuplicateTitle`], or
    /// [`CreateTaskError::Validation`] for the first failing check, and a
    /// repository variant when storage fails.
    pub async fn execute(&self, request: CreateTaskRequest) -> Result<Task, CreateTaskError> {
        let project_id = request.project_id;
        debug!(%project_id, title = %request.title, "creating task");

        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or(CreateTaskError::ProjectNotFound(project_id))?;

        if !project.can_accept_task() {
            warn!(%project_id, status = %project.status(), "project rejects new tasks");
            return Err(CreateTaskError::ProjectClosed(project_id));
        }

        let title = request.title.trim().to_owned();
        if self
            .tasks
            .exists_by_title_and_project(&title, &project)
            .await?
        {
            warn!(%project_id, %title, "task title already used in project");
            return Err(CreateTaskError::DuplicateTitle { title, project_id });
        }

        let task = Task::new(
            request.into_new_task(),
            &project,
            &self.policy,
            &*self.clock,
        )?;
        let saved = self.tasks.save(task).await?;
        info!(
            task_id = ?saved.id(),
            %project_id,
            status = %saved.status(),
            "task created"
        );
        Ok(saved)
    }
}
