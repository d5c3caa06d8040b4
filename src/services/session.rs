//! Session store.
//!
//! [`SessionStore`] is the framework-free part: it turns backend auth
//! responses into a [`Session`] and keeps durable storage in step.
//! [`SessionState`] is the reactive handle the components share through
//! context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::{ApiClient, Credentials};
use crate::error::Result;
use crate::services::notification_service::NotificationState;
use crate::services::storage::{
    clear_session, load_session, save_session, BrowserStorage, SharedStorage, TokenStorage,
};

/// Bearer token of the current user. An empty token means logged out.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        if self.token.is_empty() {
            None
        } else {
            Some(&self.token)
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

// ============================================================================
// Session Store
// ============================================================================

/// Login, registration and logout against one durable storage.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: TokenStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Session left behind by a previous page load.
    pub fn restore(&self) -> Session {
        load_session(&self.storage)
    }

    /// Exchange credentials for a token. Storage is only written on success.
    pub async fn login(&self, client: &ApiClient, credentials: &Credentials) -> Result<Session> {
        let token = client.login(credentials).await?;
        self.establish(token)
    }

    /// Create an account. A token in the response logs the user in exactly
    /// like [`SessionStore::login`].
    pub async fn register(&self, client: &ApiClient, credentials: &Credentials) -> Result<Session> {
        let token = client.register(credentials).await?;
        self.establish(token)
    }

    /// Forget the token. Purely local; the backend is not told.
    pub fn logout(&self) -> Session {
        if let Err(e) = clear_session(&self.storage) {
            tracing::warn!("could not clear stored token: {e}");
        }
        Session::anonymous()
    }

    fn establish(&self, token: String) -> Result<Session> {
        let session = Session::new(token);
        save_session(&self.storage, &session)?;
        tracing::info!("session established");
        Ok(session)
    }
}

// ============================================================================
// Reactive Session State
// ============================================================================

#[derive(Clone, Copy)]
pub struct SessionState {
    pub session: RwSignal<Session>,
    /// Set while a login or registration request is in flight.
    pub pending: RwSignal<bool>,
    store: StoredValue<SessionStore<SharedStorage>>,
    client: StoredValue<ApiClient>,
    notifications: NotificationState,
}

impl SessionState {
    /// Session state persisted in `window.localStorage`.
    pub fn new(client: ApiClient, notifications: NotificationState) -> Self {
        Self::with_storage(client, Arc::new(BrowserStorage), notifications)
    }

    /// Session state persisted in `storage`; the initial session is
    /// restored from it.
    pub fn with_storage(
        client: ApiClient,
        storage: SharedStorage,
        notifications: NotificationState,
    ) -> Self {
        let store = SessionStore::new(storage);
        let session = store.restore();
        if session.is_authenticated() {
            tracing::debug!("restored session from storage");
        }

        Self {
            session: RwSignal::new(session),
            pending: RwSignal::new(false),
            store: StoredValue::new(store),
            client: StoredValue::new(client),
            notifications,
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn login(&self, credentials: Credentials) {
        let state = *self;
        spawn_local(async move {
            state.pending.set(true);
            let client = state.client();
            let store = state.store.get_value();
            let result = store.login(&client, &credentials).await;
            state.finish(result, "Logged in");
        });
    }

    pub fn register(&self, credentials: Credentials) {
        let state = *self;
        spawn_local(async move {
            state.pending.set(true);
            let client = state.client();
            let store = state.store.get_value();
            let result = store.register(&client, &credentials).await;
            state.finish(result, "Account created");
        });
    }

    pub fn logout(&self) {
        let session = self.store.with_value(SessionStore::logout);
        self.session.set(session);
    }

    fn finish(&self, result: Result<Session>, success_title: &str) {
        self.pending.set(false);
        match result {
            Ok(session) => {
                self.session.set(session);
                self.notifications.success(success_title, None);
            }
            // Session stays as it was
            Err(e) => self.notifications.report(&e),
        }
    }
}

pub fn provide_session_state(client: ApiClient, notifications: NotificationState) -> SessionState {
    let state = SessionState::new(client, notifications);
    provide_context(state);
    state
}

/// Like [`provide_session_state`], with an explicit storage backend.
pub fn provide_session_state_with(
    client: ApiClient,
    storage: SharedStorage,
    notifications: NotificationState,
) -> SessionState {
    let state = SessionState::with_storage(client, storage, notifications);
    provide_context(state);
    state
}

pub fn use_session_state() -> SessionState {
    expect_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::services::storage::{MemoryStorage, TOKEN_KEY};

    fn session_state(storage: &MemoryStorage) -> (SessionState, NotificationState) {
        let notifications = NotificationState::new();
        let state = SessionState::with_storage(
            ApiClient::new(Default::default()),
            Arc::new(storage.clone()),
            notifications,
        );
        (state, notifications)
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let session = Session::new("");
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_session_debug_hides_token() {
        let debug = format!("{:?}", Session::new("secret-token"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_store_restores_persisted_token() {
        let store = SessionStore::new(MemoryStorage::with_token("T1"));
        assert_eq!(store.restore().token(), Some("T1"));
    }

    #[test]
    fn test_logout_clears_storage() {
        let store = SessionStore::new(MemoryStorage::with_token("T1"));
        let session = store.logout();
        assert!(!session.is_authenticated());
        assert_eq!(store.storage().get_item(TOKEN_KEY), None);
        assert!(!store.restore().is_authenticated());
    }

    #[test]
    fn test_state_restores_from_injected_storage() {
        let (state, _) = session_state(&MemoryStorage::with_token("T1"));
        assert!(state.is_authenticated());
        assert_eq!(state.session.get_untracked().token(), Some("T1"));
    }

    #[test]
    fn test_failed_login_keeps_reactive_session() {
        let storage = MemoryStorage::with_token("T0");
        let (state, notifications) = session_state(&storage);
        state.pending.set(true);

        state.finish(Err(ApiError::http(401, "Login failed")), "Logged in");

        assert_eq!(state.session.get_untracked(), Session::new("T0"));
        assert!(!state.pending.get_untracked());
        assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("T0"));

        let shown = notifications.notifications.get_untracked();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].message.as_deref(), Some("Login failed (HTTP 401)"));
    }

    #[test]
    fn test_failed_registration_keeps_anonymous_session() {
        let (state, _) = session_state(&MemoryStorage::new());

        let rejected = ApiError::Rejected("Email already registered".into());
        state.finish(Err(rejected), "Account created");

        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_successful_finish_sets_session() {
        let (state, notifications) = session_state(&MemoryStorage::new());

        state.finish(Ok(Session::new("T1")), "Logged in");

        assert_eq!(state.session.get_untracked().token(), Some("T1"));
        assert_eq!(notifications.notifications.get_untracked()[0].title, "Logged in");
    }

    #[test]
    fn test_reactive_logout_clears_storage() {
        let storage = MemoryStorage::with_token("T1");
        let (state, _) = session_state(&storage);

        state.logout();

        assert!(!state.is_authenticated());
        assert_eq!(storage.get_item(TOKEN_KEY), None);
    }
}
