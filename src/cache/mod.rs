//! Collection caches for tasks and teams
//!
//! One store per resource type, shared process-wide. Each store owns the
//! cached list, drives refreshes through the API trait, and applies the
//! server's authoritative responses to the cache. Mutations follow a
//! last-known-good policy: when the server rejects a change the cache is
//! left exactly as it was.

pub mod collection;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::client::models::{Task, TaskDraft, Team, TeamDraft};
use crate::client::TrackerApi;
use crate::error::{ApiError, Error, Result};
use crate::query::TaskFilter;

pub use collection::Collection;

/// Cache of the caller's teams
pub struct TeamStore {
    api: Arc<dyn TrackerApi>,
    state: RwLock<Collection<Team>>,
}

impl TeamStore {
    pub fn new(api: Arc<dyn TrackerApi>) -> Self {
        Self {
            api,
            state: RwLock::new(Collection::new()),
        }
    }

    /// Refresh the cached team list from the server.
    ///
    /// On failure the cache is reset to an empty list with the error
    /// recorded, and the error is returned to the caller.
    pub async fn fetch(&self) -> Result<Vec<Team>> {
        match self.api.list_teams().await {
            Ok(teams) => {
                let mut state = self.state.write().await;
                state.replace_all(teams.clone());
                Ok(teams)
            }
            Err(e) => {
                let mut state = self.state.write().await;
                state.fail_reset(e.to_string());
                Err(e)
            }
        }
    }

    /// Create a team and prepend the server's copy to the cache
    pub async fn create(&self, draft: &TeamDraft) -> Result<Team> {
        let team = self.api.create_team(draft).await?;
        let mut state = self.state.write().await;
        state.insert_front(team.clone());
        Ok(team)
    }

    /// Fetch the tasks of one team. Pass-through; team tasks are not cached
    /// since the canonical task list lives in the task store.
    pub async fn team_tasks(&self, team_id: i64) -> Result<Vec<Task>> {
        self.api.list_team_tasks(team_id).await
    }

    pub async fn items(&self) -> Vec<Team> {
        self.state.read().await.items().to_vec()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error().map(str::to_string)
    }
}

/// Cache of the task list
pub struct TaskStore {
    api: Arc<dyn TrackerApi>,
    teams: Arc<TeamStore>,
    state: RwLock<Collection<Task>>,
}

impl TaskStore {
    pub fn new(api: Arc<dyn TrackerApi>, teams: Arc<TeamStore>) -> Self {
        Self {
            api,
            teams,
            state: RwLock::new(Collection::new()),
        }
    }

    /// Refresh the cached task list, optionally narrowed by a filter.
    ///
    /// The cache mirrors exactly what the server answered for the given
    /// filter. On failure the cache is reset to empty with the error
    /// recorded, and the error is returned.
    pub async fn fetch(&self, filter: Option<&TaskFilter>) -> Result<Vec<Task>> {
        let query = filter.map(TaskFilter::compose).unwrap_or_default();
        match self.api.list_tasks(&query).await {
            Ok(tasks) => {
                let mut state = self.state.write().await;
                state.replace_all(tasks.clone());
                Ok(tasks)
            }
            Err(e) => {
                let mut state = self.state.write().await;
                state.fail_reset(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetch one task by id and remember it as the current record
    pub async fn get_by_id(&self, id: i64) -> Result<Task> {
        let task = self.api.get_task(id).await?;
        let mut state = self.state.write().await;
        state.set_current(task.clone());
        Ok(task)
    }

    /// Create a task and prepend the server's copy to the cache.
    ///
    /// Every task belongs to a team, so creation requires at least one team
    /// to exist. An empty team cache is refreshed once before giving up.
    pub async fn create(&self, draft: &TaskDraft) -> Result<Task> {
        if self.teams.is_empty().await {
            // The cache may simply be cold; one refresh settles it. A failed
            // refresh is its own error, not proof that no team exists.
            self.teams.fetch().await?;
            if self.teams.is_empty().await {
                return Err(Error::NoTeamAvailable);
            }
        }

        let task = self.api.create_task(draft).await?;
        let mut state = self.state.write().await;
        state.insert_front(task.clone());
        Ok(task)
    }

    /// Replace a task on the server and apply the response in place.
    ///
    /// If the task is not in the cache (stale filter, direct id) the call
    /// still succeeds; there is just nothing to patch locally.
    pub async fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task> {
        let task = self.api.update_task(id, draft).await?;
        let mut state = self.state.write().await;
        state.apply_update(task.clone());
        Ok(task)
    }

    /// Delete a task on the server and drop it from the cache.
    ///
    /// A 404 counts as success: the goal state is "resource absent", and a
    /// repeated delete of an already-gone id reaches it just the same.
    pub async fn remove(&self, id: i64) -> Result<()> {
        match self.api.delete_task(id).await {
            Ok(()) => {}
            Err(Error::Api(ApiError::NotFound(_))) => {}
            Err(e) => return Err(e),
        }
        let mut state = self.state.write().await;
        state.remove(id);
        Ok(())
    }

    pub async fn items(&self) -> Vec<Task> {
        self.state.read().await.items().to_vec()
    }

    pub async fn current(&self) -> Option<Task> {
        self.state.read().await.current().cloned()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.is_empty()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error().map(str::to_string)
    }
}
