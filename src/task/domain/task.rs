//! Task entity and its construction rules.

use super::{EstimatedHours, TaskDomainError, TaskId, TaskSchedulePolicy, TaskStatus};
use crate::project::domain::{Project, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Unvalidated task fields as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Requested title, unique within the owning project.
    pub title: String,
    /// Estimated effort in hours.
    pub estimated_hours: i32,
    /// Person responsible for the task.
    pub assignee: String,
    /// Initial workflow status.
    pub status: Option<TaskStatus>,
    /// Planned start of the work.
    pub created_at: Option<DateTime<Utc>>,
    /// Planned end of the work. Ignored when the status is `Done`.
    pub finished_at: Option<DateTime<Utc>>,
}

/// Task entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: Option<TaskId>,
    title: String,
    project_id: ProjectId,
    estimated_hours: EstimatedHours,
    assignee: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Identifier of the owning project.
    pub project_id: ProjectId,
    /// Persisted estimate.
    pub estimated_hours: EstimatedHours,
    /// Persisted assignee.
    pub assignee: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted finish timestamp.
    pub finished_at: DateTime<Utc>,
}

impl Task {
    /// Validates task input and creates a task owned by `project`.
    ///
    /// Checks run in a fixed order: owning project, title, estimated hours,
    /// assignee, status, timestamps, timestamp ordering. When the status is
    /// [`TaskStatus::Done`] the finish time is set to the current instant and
    /// any supplied value is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError`] describing the first violated invariant.
    pub fn new(
        input: NewTask,
        project: &Project,
        policy: &TaskSchedulePolicy,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let NewTask {
            title,
            estimated_hours,
            assignee,
            status,
            created_at,
            finished_at,
        } = input;

        let project_id = project.id().ok_or(TaskDomainError::ProjectNotPersisted)?;

        let trimmed_title = title.trim();
        if trimmed_title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let hours = EstimatedHours::new(estimated_hours)?;

        let trimmed_assignee = assignee.trim();
        if trimmed_assignee.is_empty() {
            return Err(TaskDomainError::EmptyAssignee);
        }

        let task_status = status.ok_or(TaskDomainError::MissingStatus)?;

        let now = clock.utc();
        let is_done = matches!(task_status, TaskStatus::Done);
        let check_past = policy.reject_past_timestamps && !is_done;

        let finish = if is_done {
            now
        } else {
            let supplied = finished_at.ok_or(TaskDomainError::MissingFinishedAt)?;
            if check_past && supplied < now {
                return Err(TaskDomainError::FinishedAtInPast(supplied));
            }
            supplied
        };

        let created = created_at.ok_or(TaskDomainError::MissingCreatedAt)?;
        if check_past && created < now {
            return Err(TaskDomainError::CreatedAtInPast(created));
        }

        if created > finish {
            return Err(TaskDomainError::CreatedAfterFinished {
                created_at: created,
                finished_at: finish,
            });
        }

        Ok(Self {
            id: None,
            title: trimmed_title.to_owned(),
            project_id,
            estimated_hours: hours,
            assignee: trimmed_assignee.to_owned(),
            status: task_status,
            created_at: created,
            finished_at: finish,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            project_id: data.project_id,
            estimated_hours: data.estimated_hours,
            assignee: data.assignee,
            status: data.status,
            created_at: data.created_at,
            finished_at: data.finished_at,
        }
    }

    /// Returns this task with the storage-assigned identifier.
    ///
    /// Intended for repository adapters on save. Identity is assigned once:
    /// a task that already carries an identifier keeps it.
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = self.id.or(Some(id));
        self
    }

    /// Returns the task identifier, or `None` before persistence.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the identifier of the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the estimated effort.
    #[must_use]
    pub const fn estimated_hours(&self) -> EstimatedHours {
        self.estimated_hours
    }

    /// Returns the assignee.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the finish timestamp.
    #[must_use]
    pub const fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}
