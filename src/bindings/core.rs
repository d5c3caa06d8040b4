use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::error::{ApiError, Result};

// ============================================================================
// Backend Client
// ============================================================================

/// HTTP client bound to one backend origin.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: BackendConfig,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("origin", &self.config.origin())
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Client for the origin selected at build time.
    pub fn from_env() -> Self {
        Self::new(BackendConfig::from_env())
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!("GET {url}");
        self.http.get(url)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!("POST {url}");
        self.http.post(url)
    }
}

// ============================================================================
// Request/Response Helpers
// ============================================================================

/// Attach `Authorization: Bearer <token>`.
pub(crate) fn with_bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
    request.header(AUTHORIZATION, format!("Bearer {token}"))
}

/// Map a non-2xx response to [`ApiError::Http`] carrying `message`.
pub(crate) fn expect_success(response: Response, message: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!("{message}: backend answered {status}");
        Err(ApiError::http(status.as_u16(), message))
    }
}

/// Read the body and decode it as JSON.
///
/// Goes through `serde_json` rather than `Response::json` so malformed
/// bodies surface as [`ApiError::Decode`] instead of a transport error.
pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
