use serde::{Deserialize, Serialize};

use super::core::{decode, expect_success, with_bearer, ApiClient};
use crate::error::Result;

/// Desired membership of one voice in the user's favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteUpdate {
    pub voice_key: String,
    pub favorite: bool,
}

impl FavoriteUpdate {
    pub fn new(voice_key: impl Into<String>, favorite: bool) -> Self {
        Self {
            voice_key: voice_key.into(),
            favorite,
        }
    }
}

impl ApiClient {
    /// `GET /favorites`: voice keys favorited by the token's owner.
    pub async fn list_favorites(&self, token: &str) -> Result<Vec<String>> {
        let response = with_bearer(self.get("/favorites"), token).send().await?;
        let response = expect_success(response, "Could not load favorites")?;
        decode(response).await
    }

    /// `POST /favorites`. The response body carries nothing we use.
    pub async fn update_favorite(&self, token: &str, update: &FavoriteUpdate) -> Result<()> {
        let response = with_bearer(self.post("/favorites"), token)
            .json(update)
            .send()
            .await?;
        expect_success(response, "Could not update favorites")?;
        Ok(())
    }
}
