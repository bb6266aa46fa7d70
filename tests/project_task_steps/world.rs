//! Shared world state for project and task BDD scenarios.

use std::sync::Arc;

use chrono::Duration;
use mockable::{Clock, DefaultClock};
use project_tracker::{
    error::FailureKind,
    project::{
        adapters::memory::InMemoryProjectRepository,
        domain::{Project, ProjectStatus},
        services::{CreateProject, CreateProjectRequest},
    },
    task::{
        adapters::memory::{InMemoryTaskCommentRepository, InMemoryTaskRepository},
        domain::{Task, TaskId, TaskStatus},
        services::{AddCommentToTask, CreateTask, CreateTaskRequest, GetTaskById, TaskDetails},
    },
};
use rstest::fixture;

/// Scenario world for project and task behaviour tests.
pub struct ProjectTaskWorld {
    pub clock: Arc<DefaultClock>,
    pub comments: Arc<InMemoryTaskCommentRepository>,
    pub create_project: CreateProject<InMemoryProjectRepository, DefaultClock>,
    pub create_task: CreateTask<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>,
    pub add_comment:
        AddCommentToTask<InMemoryTaskRepository, InMemoryTaskCommentRepository, DefaultClock>,
    pub get_task: GetTaskById<InMemoryTaskRepository, InMemoryTaskCommentRepository>,
    pub last_project: Option<Project>,
    pub last_task: Option<Task>,
    pub last_details: Option<TaskDetails>,
    pub missing_task_id: Option<TaskId>,
    pub last_failure: Option<FailureKind>,
}

impl ProjectTaskWorld {
    /// Creates a world backed by empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        let projects = Arc::new(InMemoryProjectRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let comments = Arc::new(InMemoryTaskCommentRepository::new());
        let clock = Arc::new(DefaultClock);

        Self {
            create_project: CreateProject::new(Arc::clone(&projects), Arc::clone(&clock)),
            create_task: CreateTask::new(projects, Arc::clone(&tasks), Arc::clone(&clock)),
            add_comment: AddCommentToTask::new(
                Arc::clone(&tasks),
                Arc::clone(&comments),
                Arc::clone(&clock),
            ),
            get_task: GetTaskById::new(tasks, Arc::clone(&comments)),
            comments,
            clock,
            last_project: None,
            last_task: None,
            last_details: None,
            missing_task_id: None,
            last_failure: None,
        }
    }

    /// Parses a status name used in feature files.
    ///
    /// # Errors
    ///
    /// Returns an error if `status` is not a project status.
    pub fn project_status(status: &str) -> Result<ProjectStatus, eyre::Report> {
        ProjectStatus::try_from(status)
            .map_err(|err| eyre::eyre!("invalid project status in scenario: {err}"))
    }

    /// Builds a 30-day project request starting today.
    #[must_use]
    pub fn project_request(&self, name: &str, status: ProjectStatus) -> CreateProjectRequest {
        let today = self.clock.utc().date_naive();
        CreateProjectRequest::new(name, today, today + Duration::days(30), status)
            .with_description("desc")
    }

    /// Builds a `Todo` task request for the last stored project.
    ///
    /// # Errors
    ///
    /// Returns an error if no stored project is in the world.
    pub fn task_request(&self, title: &str) -> Result<CreateTaskRequest, eyre::Report> {
        let project_id = self
            .last_project
            .as_ref()
            .and_then(Project::id)
            .ok_or_else(|| eyre::eyre!("missing stored project in scenario world"))?;
        let start = self.clock.utc() + Duration::hours(1);
        Ok(
            CreateTaskRequest::new(project_id, title, 5, "dev", TaskStatus::Todo)
                .scheduled(start, start + Duration::days(2)),
        )
    }

    /// Returns the identifier of the last stored task.
    ///
    /// # Errors
    ///
    /// Returns an error if no stored task is in the world.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.last_task
            .as_ref()
            .and_then(Task::id)
            .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))
    }
}

impl Default for ProjectTaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectTaskWorld {
    ProjectTaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
