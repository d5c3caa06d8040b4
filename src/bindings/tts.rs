use serde::{Deserialize, Serialize};

use super::core::{decode, expect_success, with_bearer, ApiClient};
use crate::error::Result;

/// Output format requested for every preview.
pub const PREVIEW_FORMAT: &str = "wav";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRequest {
    pub voice_key: String,
    pub text: String,
    pub format: String,
}

impl PreviewRequest {
    pub fn new(voice_key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            voice_key: voice_key.into(),
            text: text.into(),
            format: PREVIEW_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreviewResponse {
    /// Backend-relative path of the synthesized clip, e.g. `/media/abc.wav`.
    pub url: String,
}

impl ApiClient {
    /// `POST /tts/preview`. Every call synthesizes again; nothing is cached.
    pub async fn preview(&self, token: &str, request: &PreviewRequest) -> Result<PreviewResponse> {
        let response = with_bearer(self.post("/tts/preview"), token)
            .json(request)
            .send()
            .await?;
        let response = expect_success(response, "Preview failed")?;
        decode(response).await
    }
}
