//! Mock tracker API client for testing
//!
//! Provides a mock implementation of [`TrackerApi`] for unit testing the
//! stores and session manager without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::TrackerApi;
use super::models::{RegisterRequest, Task, TaskDraft, Team, TeamDraft, TokenPair};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockTrackerClient::new()
///     .with_tasks(vec![task(1, "Buy milk")]).await;
///
/// let tasks = mock.list_tasks("").await?;
/// assert_eq!(tasks.len(), 1);
/// ```
pub struct MockTrackerClient {
    /// Tasks to return from list_tasks and friends
    tasks: Arc<Mutex<Vec<Task>>>,
    /// Teams to return from list_teams
    teams: Arc<Mutex<Vec<Team>>>,
    /// Token pair to return from issue_token
    token: Arc<Mutex<Option<TokenPair>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Query strings seen by list_tasks, for test assertions
    captured_queries: Arc<Mutex<Vec<String>>>,
    /// Registration payloads seen by register
    captured_registrations: Arc<Mutex<Vec<RegisterRequest>>>,
    /// Next id handed out by create_task/create_team
    next_id: Arc<Mutex<i64>>,
}

impl Default for MockTrackerClient {
    fn default() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(Vec::new())),
            teams: Arc::new(Mutex::new(Vec::new())),
            token: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_queries: Arc::new(Mutex::new(Vec::new())),
            captured_registrations: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1000)),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub issue_token: usize,
    pub register: usize,
    pub list_tasks: usize,
    pub get_task: usize,
    pub create_task: usize,
    pub update_task: usize,
    pub delete_task: usize,
    pub list_teams: usize,
    pub create_team: usize,
    pub list_team_tasks: usize,
}

impl MockTrackerClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure tasks to return from list_tasks.
    pub async fn with_tasks(self, tasks: Vec<Task>) -> Self {
        *self.tasks.lock().await = tasks;
        self
    }

    /// Configure teams to return from list_teams.
    pub async fn with_teams(self, teams: Vec<Team>) -> Self {
        *self.teams.lock().await = teams;
        self
    }

    /// Configure the token pair to return from issue_token.
    pub async fn with_token(self, token: TokenPair) -> Self {
        *self.token.lock().await = Some(token);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Arm a one-shot error after construction, for tests that need earlier
    /// calls to succeed first.
    pub async fn set_error(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Query strings that list_tasks was called with.
    pub async fn captured_queries(&self) -> Vec<String> {
        self.captured_queries.lock().await.clone()
    }

    /// Registration payloads that register was called with.
    #[allow(dead_code)]
    pub async fn captured_registrations(&self) -> Vec<RegisterRequest> {
        self.captured_registrations.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    async fn allocate_id(&self) -> i64 {
        let mut next = self.next_id.lock().await;
        let id = *next;
        *next += 1;
        id
    }
}

#[async_trait]
impl TrackerApi for MockTrackerClient {
    async fn issue_token(&self, _email: &str, _password: &str) -> Result<TokenPair> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.issue_token += 1;
        drop(counts);

        let token = self.token.lock().await;
        Ok(token.clone().unwrap_or_else(|| TokenPair {
            access: "mock-access-token".to_string(),
            refresh: "mock-refresh-token".to_string(),
        }))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.register += 1;
        drop(counts);

        self.captured_registrations.lock().await.push(request.clone());
        Ok(())
    }

    async fn list_tasks(&self, query: &str) -> Result<Vec<Task>> {
        self.captured_queries.lock().await.push(query.to_string());
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_tasks += 1;
        drop(counts);

        Ok(self.tasks.lock().await.clone())
    }

    async fn get_task(&self, id: i64) -> Result<Task> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.get_task += 1;
        drop(counts);

        let tasks = self.tasks.lock().await;
        tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Task not found: {}", id)).into())
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.create_task += 1;
        drop(counts);

        // Resolve the team the way the server would: from the write-only id
        // to the nested object.
        let team = self
            .teams
            .lock()
            .await
            .iter()
            .find(|t| t.id == draft.team_id)
            .cloned();

        let task = Task {
            id: self.allocate_id().await,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: draft.priority,
            due_date: draft.due_date,
            team,
            created_at: Some(chrono::Utc::now()),
            updated_at: Some(chrono::Utc::now()),
        };

        self.tasks.lock().await.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: i64, draft: &TaskDraft) -> Result<Task> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.update_task += 1;
        drop(counts);

        let team = self
            .teams
            .lock()
            .await
            .iter()
            .find(|t| t.id == draft.team_id)
            .cloned();

        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ApiError::NotFound(format!("Task not found: {}", id)))?;

        task.title = draft.title.clone();
        task.description = draft.description.clone();
        task.status = draft.status;
        task.priority = draft.priority;
        task.due_date = draft.due_date;
        task.team = team;
        task.updated_at = Some(chrono::Utc::now());

        Ok(task.clone())
    }

    async fn delete_task(&self, id: i64) -> Result<()> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.delete_task += 1;
        drop(counts);

        let mut tasks = self.tasks.lock().await;
        let initial_len = tasks.len();
        tasks.retain(|t| t.id != id);

        if tasks.len() == initial_len {
            return Err(ApiError::NotFound(format!("Task not found: {}", id)).into());
        }

        Ok(())
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_teams += 1;
        drop(counts);

        Ok(self.teams.lock().await.clone())
    }

    async fn create_team(&self, draft: &TeamDraft) -> Result<Team> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.create_team += 1;
        drop(counts);

        let team = Team {
            id: self.allocate_id().await,
            name: draft.name.clone(),
            members: vec![],
            created_at: Some(chrono::Utc::now()),
            updated_at: Some(chrono::Utc::now()),
        };

        self.teams.lock().await.push(team.clone());
        Ok(team)
    }

    async fn list_team_tasks(&self, team_id: i64) -> Result<Vec<Task>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_team_tasks += 1;
        drop(counts);

        let tasks = self.tasks.lock().await;
        Ok(tasks
            .iter()
            .filter(|t| t.team_id() == Some(team_id))
            .cloned()
            .collect())
    }
}

/// Build a task for tests with sensible defaults
pub fn sample_task(id: i64, title: &str) -> Task {
    use super::models::{TaskPriority, TaskStatus};

    Task {
        id,
        title: title.to_string(),
        description: None,
        status: TaskStatus::ToDo,
        priority: TaskPriority::Medium,
        due_date: None,
        team: None,
        created_at: None,
        updated_at: None,
    }
}

/// Build a team for tests with sensible defaults
pub fn sample_team(id: i64, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        members: vec![],
        created_at: None,
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockTrackerClient::new();

        let tasks = mock.list_tasks("").await.unwrap();
        assert!(tasks.is_empty());

        let teams = mock.list_teams().await.unwrap();
        assert!(teams.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_with_tasks() {
        let mock = MockTrackerClient::new()
            .with_tasks(vec![sample_task(1, "Buy milk"), sample_task(2, "Pay rent")])
            .await;

        let tasks = mock.list_tasks("").await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn test_mock_client_with_error_is_one_shot() {
        let mock = MockTrackerClient::new()
            .with_error(ApiError::ServerError("HTTP 500".to_string()))
            .await;

        let result = mock.list_tasks("").await;
        assert!(result.is_err());

        // Error is consumed, next call succeeds
        let result = mock.list_tasks("").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_create_task_resolves_team() {
        let mock = MockTrackerClient::new()
            .with_teams(vec![sample_team(5, "Eng")])
            .await;

        let draft = TaskDraft {
            title: "X".to_string(),
            description: None,
            status: crate::client::models::TaskStatus::ToDo,
            priority: crate::client::models::TaskPriority::Medium,
            due_date: None,
            team_id: 5,
        };

        let task = mock.create_task(&draft).await.unwrap();
        assert_eq!(task.team_id(), Some(5));
        assert_eq!(task.team.as_ref().unwrap().name, "Eng");

        // Subsequent get sees the stored task
        let fetched = mock.get_task(task.id).await.unwrap();
        assert_eq!(fetched.title, "X");
    }

    #[tokio::test]
    async fn test_mock_client_delete_not_found() {
        let mock = MockTrackerClient::new();
        let result = mock.delete_task(99).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_captures_queries_and_counts() {
        let mock = MockTrackerClient::new();

        mock.list_tasks("").await.unwrap();
        mock.list_tasks("?status=T").await.unwrap();
        mock.list_teams().await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_tasks, 2);
        assert_eq!(counts.list_teams, 1);

        let queries = mock.captured_queries().await;
        assert_eq!(queries, vec!["".to_string(), "?status=T".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_client_team_tasks_filter() {
        let mut task_a = sample_task(1, "A");
        task_a.team = Some(sample_team(5, "Eng"));
        let task_b = sample_task(2, "B");

        let mock = MockTrackerClient::new()
            .with_tasks(vec![task_a, task_b])
            .await;

        let tasks = mock.list_team_tasks(5).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);
    }
}
