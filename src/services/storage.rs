//! Durable token storage.
//!
//! The session survives page reloads by keeping the bearer token under one
//! fixed key. [`TokenStorage`] is the boundary; [`load_session`],
//! [`save_session`] and [`clear_session`] are the only code that touches it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{ApiError, Result};
use crate::services::session::Session;

/// Storage key holding the bearer token as plain text.
pub const TOKEN_KEY: &str = "token";

/// String key/value storage with the semantics of the Web Storage API.
pub trait TokenStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Storage handle shared by the reactive session state.
pub type SharedStorage = Arc<dyn TokenStorage + Send + Sync>;

impl<T: TokenStorage + ?Sized> TokenStorage for Arc<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

// ============================================================================
// Browser localStorage
// ============================================================================

/// `window.localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| ApiError::storage("no window available"))?;
        window
            .local_storage()
            .map_err(|e| ApiError::storage(format!("localStorage denied: {:?}", e)))?
            .ok_or_else(|| ApiError::storage("localStorage not supported"))
    }
}

impl TokenStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| ApiError::storage(format!("could not write '{key}': {:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| ApiError::storage(format!("could not remove '{key}': {:?}", e)))
    }
}

// ============================================================================
// In-memory storage
// ============================================================================

/// Shared in-memory storage. Clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let storage = Self::new();
        storage.lock().insert(TOKEN_KEY.to_string(), token.to_string());
        storage
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}

// ============================================================================
// Session persistence
// ============================================================================

/// Restore the session saved by a previous page load, if any.
pub fn load_session(storage: &impl TokenStorage) -> Session {
    storage
        .get_item(TOKEN_KEY)
        .map(Session::new)
        .unwrap_or_default()
}

/// Persist `session`. An anonymous session removes the stored token.
pub fn save_session(storage: &impl TokenStorage, session: &Session) -> Result<()> {
    match session.token() {
        Some(token) => storage.set_item(TOKEN_KEY, token),
        None => clear_session(storage),
    }
}

pub fn clear_session(storage: &impl TokenStorage) -> Result<()> {
    storage.remove_item(TOKEN_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_session_empty_storage() {
        let storage = MemoryStorage::new();
        assert!(!load_session(&storage).is_authenticated());
    }

    #[test]
    fn test_load_session_restores_token() {
        let storage = MemoryStorage::with_token("T1");
        assert_eq!(load_session(&storage).token(), Some("T1"));
    }

    #[test]
    fn test_load_session_blank_token_is_anonymous() {
        let storage = MemoryStorage::with_token("");
        assert_eq!(load_session(&storage), Session::anonymous());
    }

    #[test]
    fn test_save_then_clear() {
        let storage = MemoryStorage::new();
        save_session(&storage, &Session::new("T2")).unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("T2"));

        clear_session(&storage).unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY), None);
    }

    #[test]
    fn test_save_anonymous_removes_token() {
        let storage = MemoryStorage::with_token("T1");
        save_session(&storage, &Session::anonymous()).unwrap();
        assert_eq!(storage.get_item(TOKEN_KEY), None);
    }

    #[test]
    fn test_shared_storage_delegates() {
        let memory = MemoryStorage::new();
        let shared: SharedStorage = Arc::new(memory.clone());
        save_session(&shared, &Session::new("T3")).unwrap();
        assert_eq!(memory.get_item(TOKEN_KEY).as_deref(), Some("T3"));
        assert_eq!(load_session(&shared).token(), Some("T3"));
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").as_deref(), Some("v"));
    }
}
