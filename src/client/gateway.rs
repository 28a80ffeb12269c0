//! Authenticated request gateway
//!
//! The single chokepoint for HTTP. Every call reads the current session from
//! the credential store and attaches it as a bearer credential when present;
//! absent a session the request goes out unauthenticated and the server
//! decides. The gateway does not retry and does not refresh tokens; a 401
//! is reported to the caller as [`ApiError::Unauthorized`], nothing more.

use std::time::Duration;

use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::session::store::CredentialStore;

/// Default base URL when neither flag, env, nor config provides one
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// HTTP gateway bound to a base URL and a credential store
#[derive(Debug, Clone)]
pub struct Gateway {
    http: HttpClient,
    base_url: String,
    store: CredentialStore,
}

impl Gateway {
    /// Create a gateway for the given base URL
    pub fn new(base_url: &str, store: CredentialStore) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a resource and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, None::<&()>).await
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// PUT a JSON body and decode the JSON response
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.send(Method::PUT, path, Some(body)).await
    }

    /// DELETE a resource. The server answers 204 with no body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.dispatch(Method::DELETE, path, None::<&()>).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::categorize(status, &response.text().await.unwrap_or_default()).into())
    }

    /// Send a request and decode the JSON response, mapping failures to the
    /// error taxonomy
    pub async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let response = self.dispatch(method, path, body).await?;
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(ApiError::from)?;
            return serde_json::from_str(&text).map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
            });
        }

        let body_text = response.text().await.unwrap_or_default();
        Err(Self::categorize(status, &body_text).into())
    }

    async fn dispatch<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);

        // The current session is read before every call; no caching, so a
        // login or logout between calls takes effect immediately.
        let session = self.store.get();
        if let Some(token) = session.access_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await.map_err(ApiError::from)?)
    }

    /// Map a non-success status and body to an error category
    fn categorize(status: StatusCode, body: &str) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => {
                let msg = extract_server_message(body)
                    .unwrap_or_else(|| "requested resource does not exist".to_string());
                ApiError::NotFound(msg)
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let msg = extract_server_message(body)
                    .unwrap_or_else(|| "Request rejected by server".to_string());
                ApiError::Validation(msg)
            }
            status if status.is_server_error() => {
                ApiError::ServerError(format!("HTTP {}", status.as_u16()))
            }
            status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// The server answers with several shapes: `{"detail": "..."}` (framework
/// default), `{"error": "..."}` (registration view), or a field-error map
/// like `{"email": ["This field is required."]}`. Field messages are passed
/// through verbatim, prefixed with the field name.
fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let map = value.as_object()?;

    for key in ["detail", "error"] {
        if let Some(msg) = map.get(key).and_then(|v| v.as_str()) {
            return Some(msg.to_string());
        }
    }

    // First field-level message wins
    for (field, messages) in map {
        let text = match messages {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items.first()?.as_str()?.to_string(),
            _ => continue,
        };
        if field == "non_field_errors" {
            return Some(text);
        }
        return Some(format!("{}: {}", field, text));
    }

    None
}
