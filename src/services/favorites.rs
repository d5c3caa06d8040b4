//! Per-user favorite voices.
//!
//! Local state is never merged optimistically: after every write the full
//! set is read back and replaces whatever was shown before.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::{ApiClient, FavoriteUpdate};
use crate::error::{ApiError, Result};
use crate::services::notification_service::NotificationState;
use crate::services::session::{Session, SessionState};

/// Fetch the favorites of `session`'s user.
///
/// Returns `Ok(None)` without touching the network when logged out.
pub async fn fetch_favorites(
    client: &ApiClient,
    session: &Session,
) -> Result<Option<Vec<String>>> {
    match session.token() {
        Some(token) => client.list_favorites(token).await.map(Some),
        None => Ok(None),
    }
}

/// Outcome of a favorite toggle.
#[derive(Debug)]
pub struct FavoritesRefresh {
    /// The server's favorites after the write.
    pub favorites: Vec<String>,
    /// Set when the write itself failed; the re-read still happened.
    pub write_error: Option<ApiError>,
}

/// Set one voice's membership, then re-read the whole set.
///
/// Always exactly one write followed by exactly one read.
pub async fn toggle_favorite(
    client: &ApiClient,
    session: &Session,
    voice_key: &str,
    favorite: bool,
) -> Result<FavoritesRefresh> {
    let token = session
        .token()
        .ok_or(ApiError::AuthRequired("manage favorites"))?;

    let write_error = client
        .update_favorite(token, &FavoriteUpdate::new(voice_key, favorite))
        .await
        .err();
    if let Some(e) = &write_error {
        tracing::warn!("favorite update for {voice_key} failed: {e}");
    }

    let favorites = client.list_favorites(token).await?;
    Ok(FavoritesRefresh {
        favorites,
        write_error,
    })
}

// ============================================================================
// Reactive Favorites State
// ============================================================================

#[derive(Clone, Copy)]
pub struct FavoritesState {
    pub favorites: RwSignal<Vec<String>>,
    session: SessionState,
    notifications: NotificationState,
}

impl FavoritesState {
    pub fn new(session: SessionState, notifications: NotificationState) -> Self {
        Self {
            favorites: RwSignal::new(Vec::new()),
            session,
            notifications,
        }
    }

    pub fn contains(&self, voice_key: &str) -> bool {
        self.favorites.with(|keys| keys.iter().any(|k| k == voice_key))
    }

    /// Reload from the backend for the current session, or empty the set
    /// when logged out.
    pub fn refresh(&self) {
        let state = *self;
        let session = self.session.session.get_untracked();
        if !session.is_authenticated() {
            self.favorites.set(Vec::new());
            return;
        }

        spawn_local(async move {
            let client = state.session.client();
            match fetch_favorites(&client, &session).await {
                Ok(Some(favorites)) => state.apply(&session, favorites),
                Ok(None) => {}
                Err(e) => state.notifications.report(&e),
            }
        });
    }

    pub fn set_favorite(&self, voice_key: String, favorite: bool) {
        let state = *self;
        let session = self.session.session.get_untracked();
        spawn_local(async move {
            let client = state.session.client();
            match toggle_favorite(&client, &session, &voice_key, favorite).await {
                Ok(refresh) => {
                    if let Some(e) = refresh.write_error {
                        state.notifications.report(&e);
                    }
                    state.apply(&session, refresh.favorites);
                }
                Err(e) => state.notifications.report(&e),
            }
        });
    }

    // Responses for a session that has since changed are dropped
    fn apply(&self, requested_for: &Session, favorites: Vec<String>) {
        if self.session.session.get_untracked() == *requested_for {
            self.favorites.set(favorites);
        } else {
            tracing::debug!("discarding favorites for a previous session");
        }
    }
}

/// Provide favorites state and keep it in step with the session.
pub fn provide_favorites_state(
    session: SessionState,
    notifications: NotificationState,
) -> FavoritesState {
    let state = FavoritesState::new(session, notifications);

    Effect::new(move |_| {
        // Track the session; every change re-fetches or clears
        session.session.track();
        state.refresh();
    });

    provide_context(state);
    state
}

pub fn use_favorites_state() -> FavoritesState {
    expect_context::<FavoritesState>()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::storage::MemoryStorage;

    fn favorites_for(storage: MemoryStorage) -> (FavoritesState, SessionState) {
        let notifications = NotificationState::new();
        let session = SessionState::with_storage(
            ApiClient::new(Default::default()),
            Arc::new(storage),
            notifications,
        );
        (FavoritesState::new(session, notifications), session)
    }

    fn keys(items: &[&str]) -> Vec<String> {
        items.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_response_for_previous_token_is_discarded() {
        let (favorites, _) = favorites_for(MemoryStorage::with_token("T2"));
        favorites.favorites.set(keys(&["voice-9"]));

        favorites.apply(&Session::new("T1"), keys(&["voice-1"]));

        assert_eq!(favorites.favorites.get_untracked(), keys(&["voice-9"]));
    }

    #[test]
    fn test_response_for_current_token_is_applied() {
        let (favorites, _) = favorites_for(MemoryStorage::with_token("T2"));

        favorites.apply(&Session::new("T2"), keys(&["voice-1", "voice-2"]));

        assert_eq!(favorites.favorites.get_untracked(), keys(&["voice-1", "voice-2"]));
        assert!(favorites.contains("voice-2"));
        assert!(!favorites.contains("voice-3"));
    }

    #[test]
    fn test_logout_clears_favorites() {
        let (favorites, session) = favorites_for(MemoryStorage::with_token("T1"));
        favorites.favorites.set(keys(&["voice-1"]));

        session.logout();
        favorites.refresh();

        assert!(favorites.favorites.get_untracked().is_empty());
    }

    #[test]
    fn test_response_landing_after_logout_is_discarded() {
        let (favorites, session) = favorites_for(MemoryStorage::with_token("T1"));

        session.logout();
        favorites.refresh();
        favorites.apply(&Session::new("T1"), keys(&["voice-1"]));

        assert!(favorites.favorites.get_untracked().is_empty());
    }
}
