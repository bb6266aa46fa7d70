//! In-memory integration tests for project creation.

use super::helpers::{Workspace, workspace};
use chrono::Duration;
use project_tracker::{
    error::FailureKind,
    project::{
        domain::{ProjectDomainError, ProjectStatus},
        services::{CreateProjectError, CreateProjectRequest, ProjectResponse},
    },
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_project_assigns_identity(workspace: Workspace) -> Result<(), eyre::Report> {
    let created = workspace
        .create_project
        .execute(
            workspace
                .project_request("Alpha", ProjectStatus::Planned)
                .with_description("desc"),
        )
        .await?;

    eyre::ensure!(created.id().is_some(), "project should carry an identifier");
    eyre::ensure!(created.name() == "Alpha", "name mismatch");
    eyre::ensure!(created.description() == Some("desc"), "description mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_project_with_same_name_is_duplicate(workspace: Workspace) {
    workspace
        .create_project
        .execute(workspace.project_request("Alpha", ProjectStatus::Planned))
        .await
        .expect("first project should be created");

    let result = workspace
        .create_project
        .execute(workspace.project_request("Alpha", ProjectStatus::Active))
        .await;

    assert!(matches!(result, Err(CreateProjectError::Duplicate(ref name)) if name == "Alpha"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_ending_yesterday_is_invalid(workspace: Workspace) {
    let today = workspace.today();
    let request = CreateProjectRequest::new(
        "Late",
        today - Duration::days(10),
        today - Duration::days(1),
        ProjectStatus::Active,
    );

    let result = workspace.create_project.execute(request).await;

    assert!(matches!(
        result,
        Err(CreateProjectError::Validation(
            ProjectDomainError::EndDateInPast { .. }
        ))
    ));
    assert_eq!(
        result.err().map(|err| err.kind()),
        Some(FailureKind::Validation)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_response_serialises_status_name(workspace: Workspace) {
    let created = workspace
        .create_project
        .execute(workspace.project_request("Alpha", ProjectStatus::Active))
        .await
        .expect("project should be created");

    let json = serde_json::to_value(ProjectResponse::from(&created))
        .expect("response should serialise");

    assert_eq!(json["status"], "ACTIVE");
    assert!(json.get("description").is_none());
}
