//! Error types for the taskops CLI

use thiserror::Error;

/// Result type alias for taskops operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No team available. Create a team first with `taskops team create <NAME>`.")]
    NoTeamAvailable,

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors, categorized by what the caller can do about them
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Session expired or invalid. Run `taskops login` to sign in again.")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error, please try again: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Session and configuration storage errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Not logged in. Run `taskops login <EMAIL>` to sign in.")]
    NotAuthenticated,

    #[error("Could not determine home directory")]
    NoHome,

    #[error("Failed to parse stored session or config: {0}")]
    ParseError(String),

    #[error("Failed to save: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for SessionError {
    fn from(err: serde_yaml::Error) -> Self {
        SessionError::ParseError(err.to_string())
    }
}
