//! Display model implementations for table and JSON output

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Task, Team};

/// Task display model for table/JSON output.
///
/// Wire codes become the labels a person would write ("In Progress", not
/// "P"), and nullable fields render as "--".
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TaskDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "PRIORITY")]
    pub priority: String,

    #[tabled(rename = "DUE")]
    pub due_date: String,

    #[tabled(rename = "TEAM")]
    pub team: String,
}

impl From<&Task> for TaskDisplay {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            status: task.status.label().to_string(),
            priority: task.priority.label().to_string(),
            due_date: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "--".to_string()),
            team: task
                .team
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl From<Task> for TaskDisplay {
    fn from(task: Task) -> Self {
        Self::from(&task)
    }
}

/// Team display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "MEMBERS")]
    pub members: usize,
}

impl From<&Team> for TeamDisplay {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            members: team.members.len(),
        }
    }
}

impl From<Team> for TeamDisplay {
    fn from(team: Team) -> Self {
        Self::from(&team)
    }
}
