//! Wire types for the task-tracking API
//!
//! Field names and single-character status/priority codes match the server's
//! serializers exactly; renaming happens at the display layer, never here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task workflow state. Serialized as the server's one-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TaskStatus {
    /// Not started
    #[serde(rename = "T")]
    #[value(name = "todo")]
    ToDo,

    /// Currently being worked on
    #[serde(rename = "P")]
    #[value(name = "in-progress")]
    InProgress,

    /// Finished
    #[serde(rename = "D")]
    #[value(name = "done")]
    Done,
}

impl TaskStatus {
    /// One-letter code used on the wire and in query parameters
    pub fn code(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "T",
            TaskStatus::InProgress => "P",
            TaskStatus::Done => "D",
        }
    }

    /// Human-readable label for table output
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Task priority. Serialized as the server's one-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum TaskPriority {
    #[serde(rename = "L")]
    #[value(name = "low")]
    Low,

    #[serde(rename = "M")]
    #[value(name = "medium")]
    Medium,

    #[serde(rename = "H")]
    #[value(name = "high")]
    High,
}

impl TaskPriority {
    /// One-letter code used on the wire and in query parameters
    pub fn code(&self) -> &'static str {
        match self {
            TaskPriority::Low => "L",
            TaskPriority::Medium => "M",
            TaskPriority::High => "H",
        }
    }

    /// Human-readable label for table output
    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A member of a team, as nested in team responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    pub email: String,
}

/// Team resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,

    pub name: String,

    /// Present in team list/detail responses, absent when nested in a task
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Task resource as returned by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub status: TaskStatus,

    pub priority: TaskPriority,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Owning team; nullable in transit, required at creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Id of the owning team, if any
    pub fn team_id(&self) -> Option<i64> {
        self.team.as_ref().map(|t| t.id)
    }
}

/// Payload for creating or fully replacing a task.
///
/// The server takes `team_id` write-only and answers with the nested `team`
/// object; the draft is never inserted into the cache, only the response is.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub status: TaskStatus,

    pub priority: TaskPriority,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    pub team_id: i64,
}

/// Payload for creating a team
#[derive(Debug, Clone, Serialize)]
pub struct TeamDraft {
    pub name: String,
}

/// Access/refresh token pair issued by the token endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Login payload for the token endpoint
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload.
///
/// The server requires a `password2` confirmation field; the constructor
/// mirrors `password` into it so callers only supply the triple the
/// interface documents.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    password2: String,
}

impl RegisterRequest {
    pub fn new(email: &str, name: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
            password2: password.to_string(),
        }
    }
}
