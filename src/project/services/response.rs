//! Serialisable response shape for project use-cases.

use crate::project::domain::{Project, ProjectId, ProjectStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Project as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectResponse {
    /// Project identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProjectId>,
    /// Project name.
    pub name: String,
    /// First day of the project.
    pub start_date: NaiveDate,
    /// Last day of the project.
    pub end_date: NaiveDate,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Description, omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id(),
            name: project.name().to_owned(),
            start_date: project.start_date(),
            end_date: project.end_date(),
            status: project.status(),
            description: project.description().map(str::to_owned),
        }
    }
}
