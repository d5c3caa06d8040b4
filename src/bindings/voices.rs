use serde::{Deserialize, Deserializer, Serialize};

use super::core::{decode, expect_success, ApiClient};
use crate::error::Result;

/// A synthetic voice offered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    /// Stable identifier used by favorites and previews.
    pub key: String,
    pub name: String,
    pub language: String,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

impl Voice {
    /// `language • accent`, or just the language when no accent is set.
    pub fn subtitle(&self) -> String {
        match self.accent.as_deref() {
            Some(accent) if !accent.is_empty() => format!("{} • {}", self.language, accent),
            _ => self.language.clone(),
        }
    }

    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ApiClient {
    /// `GET /voices`: the full catalog, unauthenticated and unpaginated.
    pub async fn list_voices(&self) -> Result<Vec<Voice>> {
        let response = self.get("/voices").send().await?;
        let response = expect_success(response, "Could not load voices")?;
        decode(response).await
    }
}
