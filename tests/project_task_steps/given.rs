//! Given steps for project and task BDD scenarios.

use super::world::{ProjectTaskWorld, run_async};
use eyre::WrapErr;
use project_tracker::task::services::AddCommentRequest;
use rstest_bdd_macros::given;

#[given("an empty project store")]
fn empty_project_store(world: &mut ProjectTaskWorld) {
    world.last_project = None;
}

#[given(r#"a project "{name}" exists with status "{status}""#)]
fn project_exists(
    world: &mut ProjectTaskWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = ProjectTaskWorld::project_status(&status)?;
    let request = world.project_request(&name, parsed);
    let created = run_async(world.create_project.execute(request))
    .wrap_err("create project in scenario setup")?;
    world.last_project = Some(created);
    Ok(())
}

#[given(r#"a task "{title}" exists in the project"#)]
fn task_exists(world: &mut ProjectTaskWorld, title: String) -> Result<(), eyre::Report> {
    let request = world.task_request(&title)?;
    let created = run_async(world.create_task.execute(request))
        .wrap_err("create task in scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"a comment "{text}" by "{author}" was added to the task"#)]
fn comment_added(
    world: &mut ProjectTaskWorld,
    text: String,
    author: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    run_async(
        world
            .add_comment
            .execute(task_id, AddCommentRequest::new(text, author)),
    )
    .wrap_err("add comment in scenario setup")?;
    Ok(())
}
