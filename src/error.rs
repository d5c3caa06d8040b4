//! Error types for backend calls and session persistence.

/// Result type alias using [`ApiError`].
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur while talking to the voice backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Network/HTTP transport errors.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success status returned by the backend.
    #[error("{message} (HTTP {status})")]
    Http {
        /// HTTP status code.
        status: u16,
        /// What the failed operation was trying to do.
        message: String,
    },

    /// The operation needs a bearer token and the user is logged out.
    #[error("Please login to {0}")]
    AuthRequired(&'static str),

    /// Validation error reported by the backend.
    #[error("{0}")]
    Rejected(String),

    /// JSON deserialization errors.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Durable token storage errors.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Create an HTTP status error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        ApiError::Http {
            status,
            message: message.into(),
        }
    }

    /// Create a storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        ApiError::Storage(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        ApiError::Config(msg.into())
    }

    /// Check if this error means the user has to log in first.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, ApiError::AuthRequired(_) | ApiError::Http { status: 401, .. })
    }

    /// Short heading used when the error is shown as a notification.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "Connection problem",
            ApiError::Http { .. } => "Request failed",
            ApiError::AuthRequired(_) => "Login required",
            ApiError::Rejected(_) => "Request rejected",
            ApiError::Decode(_) => "Unexpected response",
            ApiError::Storage(_) => "Storage unavailable",
            ApiError::Config(_) => "Configuration error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_required_message() {
        let err = ApiError::AuthRequired("preview");
        assert_eq!(err.to_string(), "Please login to preview");
        assert!(err.is_auth_required());
    }

    #[test]
    fn test_http_401_is_auth_error() {
        assert!(ApiError::http(401, "Could not load favorites").is_auth_required());
        assert!(!ApiError::http(500, "Could not load favorites").is_auth_required());
    }

    #[test]
    fn test_http_display() {
        let err = ApiError::http(400, "Login failed");
        assert_eq!(err.to_string(), "Login failed (HTTP 400)");
        assert_eq!(err.title(), "Request failed");
    }

    #[test]
    fn test_rejected_display_is_backend_message() {
        let err = ApiError::Rejected("Email already registered".to_string());
        assert_eq!(err.to_string(), "Email already registered");
    }
}
