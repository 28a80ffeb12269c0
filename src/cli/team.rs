//! Team management commands

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::TeamDraft;
use crate::error::Result;
use crate::models::{TaskDisplay, TeamDisplay};
use crate::output::Formattable;

/// List the caller's teams
pub async fn list(ctx: &CommandContext) -> Result<()> {
    ctx.require_authenticated().await?;

    ctx.teams.fetch().await?;

    let rows: Vec<TeamDisplay> = ctx
        .teams
        .items()
        .await
        .iter()
        .map(TeamDisplay::from)
        .collect();

    rows.print(ctx.format)
}

/// Create a team
pub async fn create(ctx: &CommandContext, name: &str) -> Result<()> {
    ctx.require_authenticated().await?;

    let draft = TeamDraft {
        name: name.to_string(),
    };
    let team = ctx.teams.create(&draft).await?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "data": team,
                "meta": {
                    "version": env!("CARGO_PKG_VERSION"),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                }
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            eprintln!(
                "{} Team \"{}\" created (ID: {})",
                "✓".green(),
                team.name,
                team.id
            );
        }
    }

    Ok(())
}

/// List the tasks of one team
pub async fn tasks(ctx: &CommandContext, team_id: i64) -> Result<()> {
    ctx.require_authenticated().await?;

    let tasks = ctx.teams.team_tasks(team_id).await?;
    let rows: Vec<TaskDisplay> = tasks.iter().map(TaskDisplay::from).collect();

    rows.print(ctx.format)
}
