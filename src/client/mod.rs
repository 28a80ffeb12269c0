//! Task-tracking API client

use async_trait::async_trait;

use crate::error::Result;

pub mod gateway;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod tracker;

use models::{RegisterRequest, Task, TaskDraft, Team, TeamDraft, TokenPair};

pub use gateway::Gateway;
pub use tracker::TrackerClient;

/// Task-tracking API surface.
///
/// One method per endpoint of the reference service. Implemented by the real
/// HTTP client and by the mock used in store tests; the caches only ever see
/// this trait.
#[async_trait]
pub trait TrackerApi: Send + Sync {
    /// Exchange credentials for an access/refresh token pair
    async fn issue_token(&self, email: &str, password: &str) -> Result<TokenPair>;

    /// Create a new account. Does not authenticate the caller.
    async fn register(&self, request: &RegisterRequest) -> Result<()>;

    /// List tasks, optionally narrowed by a composed query string
    /// (empty string means no filters)
    async fn list_tasks(&self, query: &str) -> Result<Vec<Task>>;

    /// Fetch a single task by id
    async fn get_task(&self, id: i64) -> Result<Task>;

    /// Create a task and return the server's authoritative copy
    async fn create_task(&self, draft: &TaskDraft) -> Result<Task>;

    /// Replace a task (full PUT) and return the server's authoritative copy
    async fn update_task(&self, id: i64, draft: &TaskDraft) -> Result<Task>;

    /// Delete a task
    async fn delete_task(&self, id: i64) -> Result<()>;

    /// List the caller's teams
    async fn list_teams(&self) -> Result<Vec<Team>>;

    /// Create a team and return the server's authoritative copy
    async fn create_team(&self, draft: &TeamDraft) -> Result<Team>;

    /// List the tasks of one team
    async fn list_team_tasks(&self, team_id: i64) -> Result<Vec<Task>>;
}
