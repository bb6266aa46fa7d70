//! Application services for project orchestration.

mod create_project;
mod response;

pub use create_project::{CreateProject, CreateProjectError, CreateProjectRequest};
pub use response::ProjectResponse;
