//! Task management commands

use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::{CommandContext, OutputFormat, TaskFilterArgs};
use crate::client::models::{Task, TaskDraft, TaskPriority, TaskStatus};
use crate::error::{Error, Result};
use crate::models::TaskDisplay;
use crate::output::Formattable;

/// List tasks, with server-side filters and local title search
pub async fn list(ctx: &CommandContext, filters: &TaskFilterArgs) -> Result<()> {
    ctx.require_authenticated().await?;

    let filter = filters.to_filter();
    ctx.tasks.fetch(Some(&filter)).await?;

    let cached = ctx.tasks.items().await;
    let visible: Vec<TaskDisplay> = filter
        .apply_search(&cached)
        .into_iter()
        .map(TaskDisplay::from)
        .collect();

    visible.print(ctx.format)
}

/// Show one task in detail
pub async fn get(ctx: &CommandContext, id: i64) -> Result<()> {
    ctx.require_authenticated().await?;

    let task = ctx.tasks.get_by_id(id).await?;
    display_task_detail(&task, ctx.format)
}

/// Create a task
pub async fn create(
    ctx: &CommandContext,
    title: &str,
    description: Option<String>,
    status: TaskStatus,
    priority: TaskPriority,
    due: Option<NaiveDate>,
    team: Option<i64>,
) -> Result<()> {
    ctx.require_authenticated().await?;

    let team_id = resolve_team_id(ctx, team).await?;

    let draft = TaskDraft {
        title: title.to_string(),
        description,
        status,
        priority,
        due_date: due,
        team_id,
    };

    let task = ctx.tasks.create(&draft).await?;

    match ctx.format {
        OutputFormat::Json => print_task_json(&task),
        _ => {
            eprintln!(
                "{} Task \"{}\" created (ID: {})",
                "✓".green(),
                task.title,
                task.id
            );
            Ok(())
        }
    }
}

/// Replace a task's fields. Flags that are omitted keep the current value;
/// the server takes a full replacement, so the current task is read first.
#[allow(clippy::too_many_arguments)]
pub async fn update(
    ctx: &CommandContext,
    id: i64,
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    due: Option<NaiveDate>,
    team: Option<i64>,
) -> Result<()> {
    ctx.require_authenticated().await?;

    let current = ctx.tasks.get_by_id(id).await?;
    let team_id = match team.or_else(|| current.team_id()) {
        Some(team_id) => team_id,
        None => resolve_team_id(ctx, None).await?,
    };

    let draft = TaskDraft {
        title: title.unwrap_or_else(|| current.title.clone()),
        description: description.or_else(|| current.description.clone()),
        status: status.unwrap_or(current.status),
        priority: priority.unwrap_or(current.priority),
        due_date: due.or(current.due_date),
        team_id,
    };

    let task = ctx.tasks.update(id, &draft).await?;

    match ctx.format {
        OutputFormat::Json => print_task_json(&task),
        _ => {
            eprintln!("{} Task {} updated", "✓".green(), task.id);
            Ok(())
        }
    }
}

/// Delete a task, with confirmation unless --yes
pub async fn delete(ctx: &CommandContext, id: i64, yes: bool) -> Result<()> {
    ctx.require_authenticated().await?;

    let task = ctx.tasks.get_by_id(id).await?;

    if !yes {
        eprintln!(
            "{} Delete task \"{}\"? This cannot be undone.",
            "⚠".yellow(),
            task.title
        );

        let confirm = Confirm::new()
            .with_prompt("Confirm deletion?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    ctx.tasks.remove(id).await?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "data": { "deleted": true, "task_id": id, "title": task.title },
                "meta": {
                    "version": env!("CARGO_PKG_VERSION"),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                }
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        _ => {
            eprintln!("{} Task \"{}\" deleted", "✓".green(), task.title);
            Ok(())
        }
    }
}

/// Pick the owning team: an explicit flag wins, a single team is used
/// unambiguously, and anything else needs the flag spelled out.
async fn resolve_team_id(ctx: &CommandContext, flag: Option<i64>) -> Result<i64> {
    if let Some(team_id) = flag {
        return Ok(team_id);
    }

    if ctx.teams.is_empty().await {
        ctx.teams.fetch().await?;
    }

    let teams = ctx.teams.items().await;
    match teams.len() {
        0 => Err(Error::NoTeamAvailable),
        1 => Ok(teams[0].id),
        _ => Err(Error::Other(
            "Multiple teams available. Pass --team <ID>; see 'taskops team list'.".to_string(),
        )),
    }
}

fn print_task_json(task: &Task) -> Result<()> {
    let output = serde_json::json!({
        "data": task,
        "meta": {
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Render one task's full detail
fn display_task_detail(task: &Task, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Pretty => {
            println!();
            println!("{}: {}", "Task".bold(), task.title);
            println!("{}: {}", "ID".dimmed(), task.id);
            println!("{}: {}", "Status".dimmed(), task.status.label());
            println!("{}: {}", "Priority".dimmed(), task.priority.label());

            if let Some(ref description) = task.description {
                println!("{}: {}", "Description".dimmed(), description);
            }
            if let Some(due) = task.due_date {
                println!("{}: {}", "Due".dimmed(), due.format("%Y-%m-%d"));
            }
            match task.team {
                Some(ref team) => {
                    println!("{}: {} (ID: {})", "Team".dimmed(), team.name, team.id)
                }
                None => println!("{}: {}", "Team".dimmed(), "(none)".dimmed()),
            }
            println!();
            Ok(())
        }
        OutputFormat::Table => {
            let rows = vec![TaskDisplay::from(task)];
            rows.print(OutputFormat::Table)
        }
        OutputFormat::Json => print_task_json(task),
    }
}
