//! Durable credential storage
//!
//! Holds the access/refresh token pair in a YAML file under the user config
//! directory. This is the single source of truth for "is a session active":
//! a token is trusted until the server rejects it, with no expiry tracking.
//!
//! The file is plain text (mode 0600 on Unix). Tokens are not encrypted at
//! rest; treat the config directory accordingly.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// The persisted session: both tokens, or neither
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl Session {
    /// A session is active exactly when an access token is present
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// File-backed store for the token pair.
///
/// Cheap to clone; every read goes to the file so all holders observe the
/// latest write.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Open the store at a specific file path
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current session.
    ///
    /// A missing file means no session. A corrupt file is logged and treated
    /// as no session rather than failing every command.
    pub fn get(&self) -> Session {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Session::default(),
        };

        match serde_yaml::from_str(&contents) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                Session::default()
            }
        }
    }

    /// Persist a new token pair, replacing any previous session
    pub fn set(&self, access_token: &str, refresh_token: &str) -> Result<()> {
        let session = Session {
            access_token: Some(access_token.to_string()),
            refresh_token: Some(refresh_token.to_string()),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(&session).map_err(|e| SessionError::SaveError(e.to_string()))?;
        std::fs::write(&self.path, contents)?;

        // Tokens are secrets: restrict to the owning user on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }

    /// Remove the stored session. Idempotent and infallible: clearing an
    /// absent session is a success, and IO problems are logged, not raised.
    pub fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                log::warn!("Failed to remove session file {}: {}", self.path.display(), e);
            }
        }
    }
}
