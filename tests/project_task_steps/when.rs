//! When steps for project and task BDD scenarios.

use super::world::{ProjectTaskWorld, run_async};
use project_tracker::task::{domain::TaskId, services::AddCommentRequest};
use rstest_bdd_macros::when;

#[when(r#"a project "{name}" is created with status "{status}""#)]
fn create_project(
    world: &mut ProjectTaskWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = ProjectTaskWorld::project_status(&status)?;
    let request = world.project_request(&name, parsed);
    let result = run_async(world.create_project.execute(request));
    match result {
        Ok(project) => world.last_project = Some(project),
        Err(err) => world.last_failure = Some(err.kind()),
    }
    Ok(())
}

#[when(r#"a task "{title}" is created in the project"#)]
fn create_task(world: &mut ProjectTaskWorld, title: String) -> Result<(), eyre::Report> {
    let request = world.task_request(&title)?;
    match run_async(world.create_task.execute(request)) {
        Ok(task) => world.last_task = Some(task),
        Err(err) => world.last_failure = Some(err.kind()),
    }
    Ok(())
}

#[when(r#"a comment "{text}" by "{author}" is added to a missing task"#)]
fn comment_on_missing_task(world: &mut ProjectTaskWorld, text: String, author: String) {
    let missing = TaskId::new();
    world.missing_task_id = Some(missing);
    if let Err(err) = run_async(
        world
            .add_comment
            .execute(missing, AddCommentRequest::new(text, author)),
    ) {
        world.last_failure = Some(err.kind());
    }
}

#[when("the task is fetched with comments")]
fn fetch_task_with_comments(world: &mut ProjectTaskWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let details = run_async(world.get_task.execute(task_id, true))?;
    world.last_details = Some(details);
    Ok(())
}
