//! HTTP implementation of the tracker API

use async_trait::async_trait;

use super::models::{LoginRequest, RegisterRequest, Task, TaskDraft, Team, TeamDraft, TokenPair};
use super::{Gateway, TrackerApi};
use crate::error::Result;

/// API client backed by the authenticated gateway.
///
/// Paths live here and nowhere else; callers speak in resources and ids.
pub struct TrackerClient {
    gateway: Gateway,
}

impl TrackerClient {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl TrackerApi for TrackerClient {
    async fn issue_token(&self, email: &str, password: &str) -> Result<TokenPair> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.gateway.post("/api/token/", &request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        // The server answers 201 with the created user; the body is not
        // needed beyond confirming success.
        let _: serde_json::Value = self.gateway.post("/api/users/register/", request).await?;
        Ok(())
    }

    async fn list_tasks(&self, query: &str) -> Result<Vec<Task>> {
        let path = format!("/api/tasks/{}", query);
        self.gateway.get(&path).await
    }

    async fn get_task(&self, id: i64) -> Result<Task> {
        self.gateway.get(&format!("/api/tasks/{}/", id)).await
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        self.gateway.post("/api/tasks/", draft).await
    }

    async fn update_task(&self, id: i64, draft: &TaskDraft) -> Result<Task> {
        self.gateway.put(&format!("/api/tasks/{}/", id), draft).await
    }

    async fn delete_task(&self, id: i64) -> Result<()> {
        self.gateway.delete(&format!("/api/tasks/{}/", id)).await
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        self.gateway.get("/api/teams/").await
    }

    async fn create_team(&self, draft: &TeamDraft) -> Result<Team> {
        self.gateway.post("/api/teams/", draft).await
    }

    async fn list_team_tasks(&self, team_id: i64) -> Result<Vec<Task>> {
        self.gateway
            .get(&format!("/api/teams/{}/tasks/", team_id))
            .await
    }
}
