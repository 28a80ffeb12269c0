//! taskops CLI - command-line companion for the task tracker

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod query;
mod session;

use cli::{Cli, Commands, CommandContext, TaskCommands, TeamCommands};
use error::{ApiError, Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext::new(cli.format, cli.api_url.as_deref(), cli.config.as_deref()).await?;

    let result = dispatch(&ctx, cli.command).await;

    // A 401 on a data call means the stored token is dead. Drop it so the
    // next command starts anonymous instead of failing the same way.
    if let Err(Error::Api(ApiError::Unauthorized)) = &result {
        ctx.session.logout().await;
    }

    result
}

async fn dispatch(ctx: &CommandContext, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email, password } => cli::auth::login(ctx, &email, password).await,
        Commands::Register {
            email,
            name,
            password,
        } => cli::auth::register(ctx, &email, name, password).await,
        Commands::Logout => cli::auth::logout(ctx).await,
        Commands::Status => cli::auth::status(ctx).await,
        Commands::Task(task_cmd) => match task_cmd {
            TaskCommands::List { filters } => cli::task::list(ctx, &filters).await,
            TaskCommands::Get { id } => cli::task::get(ctx, id).await,
            TaskCommands::Create {
                title,
                description,
                status,
                priority,
                due,
                team,
            } => cli::task::create(ctx, &title, description, status, priority, due, team).await,
            TaskCommands::Update {
                id,
                title,
                description,
                status,
                priority,
                due,
                team,
            } => {
                cli::task::update(ctx, id, title, description, status, priority, due, team).await
            }
            TaskCommands::Delete { id, yes } => cli::task::delete(ctx, id, yes).await,
        },
        Commands::Team(team_cmd) => match team_cmd {
            TeamCommands::List => cli::team::list(ctx).await,
            TeamCommands::Create { name } => cli::team::create(ctx, &name).await,
            TeamCommands::Tasks { id } => cli::team::tasks(ctx, id).await,
        },
    }
}
