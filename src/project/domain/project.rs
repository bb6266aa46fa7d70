//! Project entity and its construction rules.

use super::{ProjectDomainError, ProjectId, ProjectStatus};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Serialize;

/// Unvalidated project fields as received from a caller.
///
/// Dates and status are optional so that missing input surfaces as a
/// validation failure instead of being impossible to express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    /// Requested project name.
    pub name: String,
    /// First day of the project.
    pub start_date: Option<NaiveDate>,
    /// Last day of the project.
    pub end_date: Option<NaiveDate>,
    /// Initial lifecycle status.
    pub status: Option<ProjectStatus>,
    /// Free-form description.
    pub description: Option<String>,
}

impl NewProject {
    /// Creates project input with every required field present.
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
}

/// Project entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    id: Option<ProjectId>,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ProjectStatus,
    description: Option<String>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted start date.
    pub start_date: NaiveDate,
    /// Persisted end date.
    pub end_date: NaiveDate,
    /// Persisted status.
    pub status: ProjectStatus,
    /// Persisted description, if any.
    pub description: Option<String>,
}

impl Project {
    /// Validates project input and creates a project without identity.
    ///
    /// Checks run in a fixed order: name, date presence, end date, start
    /// date, status. The first failing check determines the error.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError`] describing the first violated
    /// invariant.
    pub fn new(input: NewProject, clock: &impl Clock) -> Result<Self, ProjectDomainError> {
        let NewProject {
            name,
            start_date,
            end_date,
            status,
            description,
        } = input;

        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return Err(ProjectDomainError::EmptyName);
        }

        let (Some(start), Some(end)) = (start_date, end_date) else {
            return Err(ProjectDomainError::MissingDates);
        };

        let today = clock.utc().date_naive();
        if end < today {
            return Err(ProjectDomainError::EndDateInPast {
                end_date: end,
                today,
            });
        }
        if start > end || start > today {
            return Err(ProjectDomainError::InvalidStartDate {
                start_date: start,
                end_date: end,
                today,
            });
        }

        let project_status = status.ok_or(ProjectDomainError::MissingStatus)?;

        Ok(Self {
            id: None,
            name: trimmed_name.to_owned(),
            start_date: start,
            end_date: end,
            status: project_status,
            description: normalize_description(description),
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: Some(data.id),
            name: data.name,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            description: data.description,
        }
    }

    /// Returns this project with the storage-assigned identifier.
    ///
    /// Intended for repository adapters on save. Identity is assigned once:
    /// a project that already carries an identifier keeps it.
    #[must_use]
    pub fn with_id(mut self, id: ProjectId) -> Self {
        self.id = self.id.or(Some(id));
        self
    }

    /// Returns the project identifier, or `None` before persistence.
    #[must_use]
    pub const fn id(&self) -> Option<ProjectId> {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the end date.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns whether new tasks may be added to this project.
    #[must_use]
    pub const fn can_accept_task(&self) -> bool {
        !matches!(self.status, ProjectStatus::Closed)
    }
}

/// Whitespace-only descriptions are treated as absent.
fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
