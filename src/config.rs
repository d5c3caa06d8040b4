//! Backend configuration.
//!
//! The backend origin is baked in at build time from `TTS_BACKEND_URL`
//! (for example `TTS_BACKEND_URL=https://api.example.com trunk build`).

use url::Url;

use crate::error::{ApiError, Result};

/// Origin used when `TTS_BACKEND_URL` is unset or invalid.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Where the voice backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    origin: String,
}

impl BackendConfig {
    /// Validate and normalize a backend origin.
    ///
    /// Only `http` and `https` are accepted. A trailing slash is dropped so
    /// endpoint paths can be appended directly.
    pub fn new(origin: &str) -> Result<Self> {
        let trimmed = origin.trim();
        let parsed = Url::parse(trimmed)
            .map_err(|e| ApiError::config(format!("invalid backend URL '{trimmed}': {e}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ApiError::config(format!(
                    "unsupported scheme '{other}' in backend URL"
                )))
            }
        }

        Ok(Self {
            origin: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Build the configuration from the compile-time environment.
    pub fn from_env() -> Self {
        match option_env!("TTS_BACKEND_URL") {
            Some(value) if !value.trim().is_empty() => Self::new(value).unwrap_or_else(|e| {
                tracing::warn!("{e}; falling back to {DEFAULT_BACKEND_URL}");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL of a backend endpoint such as `/voices`.
    pub fn endpoint(&self, path: &str) -> String {
        self.resolve(path)
    }

    /// Turn a backend-relative resource path into an absolute URL by
    /// prefixing the origin.
    pub fn resolve(&self, relative: &str) -> String {
        if relative.starts_with('/') {
            format!("{}{}", self.origin, relative)
        } else {
            format!("{}/{}", self.origin, relative)
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_origin() {
        assert_eq!(BackendConfig::default().origin(), "http://localhost:8000");
    }

    #[rstest]
    #[case("http://localhost:8000", "http://localhost:8000")]
    #[case("http://localhost:8000/", "http://localhost:8000")]
    #[case("  https://tts.example.com/api/ ", "https://tts.example.com/api")]
    fn test_origin_normalization(#[case] input: &str, #[case] expected: &str) {
        let config = BackendConfig::new(input).unwrap();
        assert_eq!(config.origin(), expected);
    }

    #[rstest]
    #[case("not a url")]
    #[case("ftp://files.example.com")]
    #[case("")]
    fn test_invalid_origin_rejected(#[case] input: &str) {
        let err = BackendConfig::new(input).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[rstest]
    #[case("/media/x.wav", "http://localhost:8000/media/x.wav")]
    #[case("media/x.wav", "http://localhost:8000/media/x.wav")]
    fn test_resolve_media_path(#[case] relative: &str, #[case] expected: &str) {
        assert_eq!(BackendConfig::default().resolve(relative), expected);
    }

    #[test]
    fn test_endpoint_with_path_prefix() {
        let config = BackendConfig::new("https://tts.example.com/api/").unwrap();
        assert_eq!(config.endpoint("/voices"), "https://tts.example.com/api/voices");
    }
}
