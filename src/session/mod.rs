//! Session lifecycle
//!
//! One session per process. The manager owns the login/logout transitions
//! and keeps the credential store as the single durable source of truth;
//! its in-memory state only mirrors what the store last said.

pub mod store;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::client::models::{RegisterRequest, TokenPair};
use crate::client::TrackerApi;
use crate::error::{ApiError, Error, Result};

pub use store::CredentialStore;

/// Where the process currently stands with the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Store not consulted yet
    Unknown,
    /// A token pair is on file
    Authenticated,
    /// No token pair on file
    Anonymous,
}

/// Drives login, registration, and logout against the credential store
pub struct SessionManager {
    api: Arc<dyn TrackerApi>,
    store: CredentialStore,
    state: Mutex<SessionState>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn TrackerApi>, store: CredentialStore) -> Self {
        Self {
            api,
            store,
            state: Mutex::new(SessionState::Unknown),
        }
    }

    /// Read the store once and settle the Unknown state
    pub async fn init(&self) -> SessionState {
        let state = if self.store.get().is_authenticated() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        };
        *self.state.lock().await = state;
        state
    }

    pub async fn state(&self) -> SessionState {
        *self.state.lock().await
    }

    pub async fn is_authenticated(&self) -> bool {
        match *self.state.lock().await {
            SessionState::Authenticated => true,
            SessionState::Anonymous => false,
            SessionState::Unknown => self.store.get().is_authenticated(),
        }
    }

    /// Exchange credentials for a token pair and persist it.
    ///
    /// The token endpoint answers 401 for wrong credentials; that is a
    /// rejected login, not an expired session, so it surfaces as
    /// [`ApiError::InvalidCredentials`]. A failed login leaves any existing
    /// session untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair> {
        let pair = match self.api.issue_token(email, password).await {
            Ok(pair) => pair,
            Err(Error::Api(ApiError::Unauthorized)) => {
                return Err(ApiError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        self.store.set(&pair.access, &pair.refresh)?;
        *self.state.lock().await = SessionState::Authenticated;
        Ok(pair)
    }

    /// Create an account. Does not log the new account in; the caller
    /// follows up with an explicit login.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.api.register(request).await
    }

    /// Drop the stored session. Local-only; the server keeps no session
    /// state worth revoking here.
    pub async fn logout(&self) {
        self.store.clear();
        *self.state.lock().await = SessionState::Anonymous;
    }
}
