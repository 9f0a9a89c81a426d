use pet_core::entities::CareTask;
use pet_core::responses::TaskView;
use pet_core::schedule::Schedule;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::parse::{parse_date, parse_date_or};
use crate::context::AppContext;
use crate::output::output;

/// Handle `petcare task`.
pub fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Add {
            owner,
            pet,
            label,
            every,
            start,
            notes,
        } => {
            let schedule = Schedule::new(*every, parse_date(start, "start")?)?;
            let task = CareTask::new(label, schedule, notes.clone().unwrap_or_default())?;
            let view = TaskView::from(&task);
            ctx.pet_mut(owner, pet)?.add_task(task)?;
            output(&view, flags.format)
        }
        TaskCommands::Complete {
            owner,
            pet,
            label,
            on,
        } => {
            let on = parse_date_or(on.as_deref(), "on", ctx.today)?;
            let view = complete(ctx, owner, pet, label, on)?;
            output(&view, flags.format)
        }
        TaskCommands::Remove { owner, pet, label } => {
            let removed = ctx.pet_mut(owner, pet)?.remove_task(label.trim()).is_some();
            output(
                &json!({ "owner": owner, "pet": pet, "task": label.trim(), "removed": removed }),
                flags.format,
            )
        }
        TaskCommands::List { owner, pet } => {
            let tasks: Vec<TaskView> = ctx
                .pet(owner, pet)?
                .all_tasks()
                .iter()
                .map(TaskView::from)
                .collect();
            output(&tasks, flags.format)
        }
    }
}

/// Record a completion, warning when it moves the due date backwards.
fn complete(
    ctx: &mut AppContext,
    owner: &str,
    pet: &str,
    label: &str,
    on: chrono::NaiveDate,
) -> anyhow::Result<TaskView> {
    let task = ctx
        .pet_mut(owner, pet)?
        .task_mut(label.trim())
        .ok_or_else(|| pet_core::errors::CoreError::not_found("task", label.trim()))?;

    let before = task.next_due_date();
    task.complete(on);
    let after = task.next_due_date();
    if after < before {
        tracing::warn!(
            task = task.label(),
            %before,
            %after,
            "completion moved the next due date backwards"
        );
    }
    Ok(TaskView::from(&*task))
}
