//! Command execution context
//!
//! Wires config, credential store, gateway, client, stores, and session
//! manager together once, so command handlers share one set of process-wide
//! caches instead of each building their own.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{TaskStore, TeamStore};
use crate::cli::OutputFormat;
use crate::client::{Gateway, TrackerApi, TrackerClient};
use crate::config::{self, Config};
use crate::error::{Result, SessionError};
use crate::session::{CredentialStore, SessionManager};

/// Context for command execution containing config, stores, and runtime
/// options.
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Path the configuration was loaded from
    pub config_path: PathBuf,
    /// Effective API base URL after override resolution
    pub api_url: String,
    /// Session lifecycle manager
    pub session: SessionManager,
    /// Process-wide task cache
    pub tasks: Arc<TaskStore>,
    /// Process-wide team cache
    pub teams: Arc<TeamStore>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// Loads config from the given path (or the default location), resolves
    /// the API base URL (flag/env beats config beats default), opens the
    /// credential store next to the config file, and builds one client
    /// shared by the session manager and both stores.
    pub async fn new(
        format: Option<OutputFormat>,
        api_url_override: Option<&str>,
        config_path: Option<&str>,
    ) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => PathBuf::from(path),
            None => Config::default_path()?,
        };
        let config = Config::load_from(&config_path)?;

        let format = resolve_format(format, &config);
        let api_url = config.resolve_api_url(api_url_override);
        let store = CredentialStore::open_at(config::session_path_for(&config_path));

        let gateway = Gateway::new(&api_url, store.clone())?;
        let api: Arc<dyn TrackerApi> = Arc::new(TrackerClient::new(gateway));

        let session = SessionManager::new(api.clone(), store);
        session.init().await;

        let teams = Arc::new(TeamStore::new(api.clone()));
        let tasks = Arc::new(TaskStore::new(api, teams.clone()));

        Ok(Self {
            config,
            config_path,
            api_url,
            session,
            tasks,
            teams,
            format,
        })
    }

    /// Fail early when a command needs a session and none is stored.
    ///
    /// This only checks local state; a stale token still passes here and is
    /// caught by the server's 401 on the first data call.
    pub async fn require_authenticated(&self) -> Result<()> {
        if self.session.is_authenticated().await {
            Ok(())
        } else {
            Err(SessionError::NotAuthenticated.into())
        }
    }
}

/// Resolve the output format: flag or env beats the config file's
/// preference beats pretty. An unrecognized preference string is ignored.
fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    use clap::ValueEnum;

    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(|name| OutputFormat::from_str(name, true).ok())
    })
    .unwrap_or_default()
}
