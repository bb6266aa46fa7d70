//! In-memory integration tests for task creation, comments, and lookups.

use super::helpers::{Workspace, project_id, workspace};
use project_tracker::{
    error::FailureKind,
    project::domain::ProjectStatus,
    task::{
        domain::{TaskId, TaskStatus},
        services::{
            AddCommentError, AddCommentRequest, CreateTaskError, CreateTaskRequest,
            TaskWithCommentsResponse,
        },
    },
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_is_created_in_active_project(workspace: Workspace) -> Result<(), eyre::Report> {
    let project = workspace.project("Alpha", ProjectStatus::Active).await?;

    let task = workspace
        .create_task
        .execute(workspace.task_request(project_id(&project)?, "T1"))
        .await?;

    eyre::ensure!(task.id().is_some(), "task should carry an identifier");
    eyre::ensure!(task.project_id() == project_id(&project)?, "owner mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closed_project_rejects_tasks(workspace: Workspace) -> Result<(), eyre::Report> {
    let project = workspace.project("Archive", ProjectStatus::Closed).await?;

    let result = workspace
        .create_task
        .execute(workspace.task_request(project_id(&project)?, "T1"))
        .await;

    eyre::ensure!(
        matches!(result, Err(CreateTaskError::ProjectClosed(_))),
        "expected ProjectClosed, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn done_task_finishes_now(workspace: Workspace) -> Result<(), eyre::Report> {
    let project = workspace.project("Alpha", ProjectStatus::Active).await?;
    let start = workspace.soon();
    let supplied_finish = start + chrono::Duration::days(90);
    let request = CreateTaskRequest::new(project_id(&project)?, "Ship", 3, "dev", TaskStatus::Done)
        .scheduled(start - chrono::Duration::days(2), supplied_finish);

    let task = workspace.create_task.execute(request).await?;

    eyre::ensure!(
        task.finished_at() < supplied_finish,
        "finish time should be replaced with the current instant"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comments_round_trip_through_task_lookup(
    workspace: Workspace,
) -> Result<(), eyre::Report> {
    let project = workspace.project("Alpha", ProjectStatus::Active).await?;
    let task = workspace
        .create_task
        .execute(workspace.task_request(project_id(&project)?, "T1"))
        .await?;
    let task_id = task
        .id()
        .ok_or_else(|| eyre::eyre!("stored task has no identifier"))?;

    workspace
        .add_comment
        .execute(task_id, AddCommentRequest::new("looks good", "ana"))
        .await?;

    let without = workspace.get_task.execute(task_id, false).await?;
    let with = workspace.get_task.execute(task_id, true).await?;

    let without_json = serde_json::to_value(TaskWithCommentsResponse::from(&without))?;
    let with_json = serde_json::to_value(TaskWithCommentsResponse::from(&with))?;
    eyre::ensure!(without_json.get("comments").is_none(), "comments leaked");
    eyre::ensure!(with_json["comments"][0]["author"] == "ana", "author mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comment_on_missing_task_is_not_found(workspace: Workspace) {
    let result = workspace
        .add_comment
        .execute(TaskId::new(), AddCommentRequest::new("hello", "bob"))
        .await;

    assert!(matches!(result, Err(AddCommentError::TaskNotFound(_))));
    assert_eq!(result.err().map(|err| err.kind()), Some(FailureKind::NotFound));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_are_found_by_status(workspace: Workspace) -> Result<(), eyre::Report> {
    let project = workspace.project("Alpha", ProjectStatus::Active).await?;
    let id = project_id(&project)?;
    let start = workspace.soon();
    workspace
        .create_task
        .execute(workspace.task_request(id, "T1"))
        .await?;
    workspace
        .create_task
        .execute(
            CreateTaskRequest::new(id, "T2", 2, "dev", TaskStatus::InProgress)
                .scheduled(start, start + chrono::Duration::days(1)),
        )
        .await?;
    workspace
        .create_task
        .execute(workspace.task_request(id, "T3"))
        .await?;

    let todo = workspace.find_by_status.execute(TaskStatus::Todo).await?;
    let done = workspace.find_by_status.execute(TaskStatus::Done).await?;

    let titles: Vec<&str> = todo.iter().map(|task| task.title.as_str()).collect();
    eyre::ensure!(titles == ["T1", "T3"], "unexpected titles {titles:?}");
    eyre::ensure!(done.is_empty(), "no task should be done");
    Ok(())
}
