use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::core::{decode, expect_success, ApiClient};
use crate::error::{ApiError, Result};

// ============================================================================
// Credentials
// ============================================================================

/// Email/password pair held only while the auth form is open.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Form body expected by `/auth/login` (OAuth2 password flow field names).
#[derive(Serialize)]
struct LoginForm<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Body returned by `/auth/register`, successful or not.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    /// Either a plain message or a list of `{ loc, msg, type }` entries.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl RegisterResponse {
    /// The issued token, or the backend's reason for refusing.
    pub fn into_token(self) -> Result<String> {
        match self.access_token.filter(|token| !token.is_empty()) {
            Some(token) => Ok(token),
            None => Err(ApiError::Rejected(
                self.detail
                    .as_ref()
                    .and_then(detail_message)
                    .unwrap_or_else(|| "Registration failed".to_string()),
            )),
        }
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

// ============================================================================
// Auth Endpoints
// ============================================================================

impl ApiClient {
    /// `POST /auth/login` with form-encoded credentials; returns the access token.
    pub async fn login(&self, credentials: &Credentials) -> Result<String> {
        let response = self
            .post("/auth/login")
            .form(&LoginForm {
                username: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await?;

        let response = expect_success(response, "Login failed")?;
        let body: TokenResponse = decode(response).await?;

        if body.access_token.is_empty() {
            return Err(ApiError::Rejected("Login failed".to_string()));
        }
        Ok(body.access_token)
    }

    /// `POST /auth/register` with JSON credentials; returns the access token.
    ///
    /// The body is inspected regardless of status: the backend reports
    /// validation problems in `detail`.
    pub async fn register(&self, credentials: &Credentials) -> Result<String> {
        let response = self.post("/auth/register").json(credentials).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let parsed: RegisterResponse = serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::warn!("register response ({status}) was not JSON: {e}");
            RegisterResponse::default()
        });
        parsed.into_token()
    }
}
