//! Voice previews and the "now playing" slot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::{ApiClient, PreviewRequest, Voice};
use crate::error::{ApiError, Result};
use crate::services::notification_service::NotificationState;
use crate::services::session::{Session, SessionState};

pub const DEFAULT_SNIPPET: &str = "Hello, this is a preview of my voice!";

/// Synthesize `snippet` with `voice` and return the absolute audio URL.
///
/// Fails with [`ApiError::AuthRequired`] before any request when logged out.
pub async fn request_preview(
    client: &ApiClient,
    session: &Session,
    voice: &Voice,
    snippet: &str,
) -> Result<String> {
    let token = session.token().ok_or(ApiError::AuthRequired("preview"))?;
    let response = client
        .preview(token, &PreviewRequest::new(&voice.key, snippet))
        .await?;
    Ok(client.config().resolve(&response.url))
}

#[derive(Clone, Copy)]
pub struct PlaybackState {
    /// Text used for every preview.
    pub snippet: RwSignal<String>,
    /// Absolute URL of the clip in the player. Only replaced by a newer
    /// successful preview.
    pub audio_url: RwSignal<Option<String>>,
    /// Key of the voice currently being synthesized.
    pub pending: RwSignal<Option<String>>,
    session: SessionState,
    notifications: NotificationState,
}

impl PlaybackState {
    pub fn new(session: SessionState, notifications: NotificationState) -> Self {
        Self {
            snippet: RwSignal::new(DEFAULT_SNIPPET.to_string()),
            audio_url: RwSignal::new(None),
            pending: RwSignal::new(None),
            session,
            notifications,
        }
    }

    pub fn preview(&self, voice: Voice) {
        let state = *self;
        let session = self.session.session.get_untracked();
        if !session.is_authenticated() {
            self.notifications.report(&ApiError::AuthRequired("preview"));
            return;
        }

        let snippet = self.snippet.get_untracked();
        self.pending.set(Some(voice.key.clone()));
        spawn_local(async move {
            let client = state.session.client();
            let result = request_preview(&client, &session, &voice, &snippet).await;
            state.complete(&voice.key, result);
        });
    }

    // Only the most recently requested voice may touch the player
    fn complete(&self, voice_key: &str, result: Result<String>) {
        let current = self
            .pending
            .with_untracked(|pending| pending.as_deref() == Some(voice_key));
        if !current {
            tracing::debug!("dropping superseded preview for {voice_key}");
            return;
        }

        match result {
            Ok(url) => {
                tracing::debug!("preview ready for {voice_key}");
                self.audio_url.set(Some(url));
            }
            Err(e) => self.notifications.report(&e),
        }
        self.pending.set(None);
    }
}

pub fn provide_playback_state(
    session: SessionState,
    notifications: NotificationState,
) -> PlaybackState {
    let state = PlaybackState::new(session, notifications);
    provide_context(state);
    state
}

pub fn use_playback_state() -> PlaybackState {
    expect_context::<PlaybackState>()
}
