//! Query composition for task listings
//!
//! Turns the active filter selection into the query string the server
//! understands. The search term is deliberately excluded: the server has no
//! search endpoint, so matching happens client-side against the cached list.

use crate::client::models::{Task, TaskPriority, TaskStatus};

/// Active narrowing criteria for a task listing
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub team_id: Option<i64>,
    pub search: Option<String>,
}

impl TaskFilter {
    /// Compose the server-side query string.
    ///
    /// Returns the empty string when no server-side criterion is set, else
    /// `?key=value&...` with only the set criteria, in a stable order.
    pub fn compose(&self) -> String {
        let mut params = Vec::new();

        if let Some(status) = self.status {
            params.push(format!("status={}", status.code()));
        }
        if let Some(priority) = self.priority {
            params.push(format!("priority={}", priority.code()));
        }
        if let Some(team_id) = self.team_id {
            params.push(format!("team_id={}", team_id));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }

    /// Whether a task matches the search term (case-insensitive substring of
    /// the title or description). No term means everything matches.
    pub fn matches_search(&self, task: &Task) -> bool {
        match &self.search {
            Some(term) if !term.is_empty() => {
                let needle = term.to_lowercase();
                task.title.to_lowercase().contains(&needle)
                    || task
                        .description
                        .as_ref()
                        .map(|d| d.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            }
            _ => true,
        }
    }

    /// Narrow a cached list by the search term, preserving order
    pub fn apply_search<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches_search(t)).collect()
    }
}
