//! Browser Storage Tests
//!
//! The token must survive in `window.localStorage` under the fixed key.

#![cfg(target_arch = "wasm32")]

use voice_studio_frontend::services::session::{Session, SessionStore};
use voice_studio_frontend::services::storage::{
    clear_session, load_session, save_session, BrowserStorage, TokenStorage, TOKEN_KEY,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn raw_local_storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

#[wasm_bindgen_test]
fn test_save_writes_plain_token() {
    save_session(&BrowserStorage, &Session::new("T1")).unwrap();
    assert_eq!(raw_local_storage().get_item(TOKEN_KEY).unwrap().as_deref(), Some("T1"));
    clear_session(&BrowserStorage).unwrap();
}

#[wasm_bindgen_test]
fn test_token_written_elsewhere_is_restored() {
    raw_local_storage().set_item("token", "from-previous-visit").unwrap();

    let store = SessionStore::new(BrowserStorage);
    assert_eq!(store.restore().token(), Some("from-previous-visit"));

    store.logout();
}

#[wasm_bindgen_test]
fn test_logout_removes_key() {
    BrowserStorage.set_item(TOKEN_KEY, "T1").unwrap();

    let session = SessionStore::new(BrowserStorage).logout();

    assert!(!session.is_authenticated());
    assert_eq!(raw_local_storage().get_item(TOKEN_KEY).unwrap(), None);
    assert!(!load_session(&BrowserStorage).is_authenticated());
}
