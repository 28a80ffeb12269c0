//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

use crate::client::models::{TaskPriority, TaskStatus};
use crate::query::TaskFilter;

pub mod auth;
pub mod context;
pub mod task;
pub mod team;

pub use context::CommandContext;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting
    #[default]
    Pretty,
    /// Table format - machine-parseable, one row per entry
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

/// Task list filters for narrowing down results
#[derive(Debug, Clone, Args, Default)]
pub struct TaskFilterArgs {
    /// Filter by status (todo, in-progress, done)
    #[arg(long, value_enum)]
    pub status: Option<TaskStatus>,

    /// Filter by priority (low, medium, high)
    #[arg(long, value_enum)]
    pub priority: Option<TaskPriority>,

    /// Filter by team id
    #[arg(long)]
    pub team: Option<i64>,

    /// Filter by title/description substring, case-insensitive (applied locally)
    #[arg(long)]
    pub search: Option<String>,
}

impl TaskFilterArgs {
    pub fn to_filter(&self) -> TaskFilter {
        TaskFilter {
            status: self.status,
            priority: self.priority,
            team_id: self.team,
            search: self.search.clone(),
        }
    }
}

/// taskops CLI - command-line companion for the task tracker
#[derive(Parser, Debug)]
#[command(name = "taskops")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json); falls back to the config
    /// file's preference, then to pretty
    #[arg(
        long,
        global = true,
        env = "TASKOPS_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override API base URL
    #[arg(long, global = true, env = "TASKOPS_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "TASKOPS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TASKOPS_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store a session
    Login {
        /// Account email address
        email: String,

        /// Password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create a new account
    Register {
        /// Account email address
        email: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Drop the stored session
    Logout,

    /// Show session and configuration status
    Status,

    /// Manage tasks
    #[command(subcommand)]
    Task(TaskCommands),

    /// Manage teams
    #[command(subcommand)]
    Team(TeamCommands),
}

/// Task management subcommands
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filters: TaskFilterArgs,
    },

    /// Show one task
    #[command(visible_alias = "g")]
    Get {
        /// Task id
        id: i64,
    },

    /// Create a task
    Create {
        /// Task title
        title: String,

        /// Longer description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Initial status
        #[arg(long, value_enum, default_value = "todo")]
        status: TaskStatus,

        /// Priority
        #[arg(long, short = 'p', value_enum, default_value = "medium")]
        priority: TaskPriority,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<chrono::NaiveDate>,

        /// Owning team id (defaults to your only team when unambiguous)
        #[arg(long, short = 't')]
        team: Option<i64>,
    },

    /// Replace a task's fields
    Update {
        /// Task id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// New status
        #[arg(long, value_enum)]
        status: Option<TaskStatus>,

        /// New priority
        #[arg(long, short = 'p', value_enum)]
        priority: Option<TaskPriority>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<chrono::NaiveDate>,

        /// New owning team id
        #[arg(long, short = 't')]
        team: Option<i64>,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: i64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Team management subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List your teams
    #[command(visible_alias = "ls")]
    List,

    /// Create a team
    Create {
        /// Team name
        name: String,
    },

    /// List the tasks of one team
    Tasks {
        /// Team id
        id: i64,
    },
}
