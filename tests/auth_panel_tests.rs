//! Auth Panel Tests
//!
//! The logged-out form must accept any username the backend's form login
//! takes, not only addresses the browser recognizes as email.

#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use leptos::prelude::*;
use voice_studio_frontend::bindings::ApiClient;
use voice_studio_frontend::components::auth_panel::AuthPanel;
use voice_studio_frontend::services::notification_service::provide_notification_state;
use voice_studio_frontend::services::session::provide_session_state_with;
use voice_studio_frontend::services::storage::MemoryStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_login_field_accepts_plain_usernames() {
    leptos::mount::mount_to_body(|| {
        let notifications = provide_notification_state();
        provide_session_state_with(
            ApiClient::new(Default::default()),
            Arc::new(MemoryStorage::new()),
            notifications,
        );
        view! { <AuthPanel /> }
    });

    let field = document()
        .query_selector("input[placeholder='Email']")
        .unwrap()
        .expect("login field is rendered while logged out");
    assert_eq!(field.get_attribute("type").as_deref(), Some("text"));

    let password = document()
        .query_selector("input[placeholder='Password']")
        .unwrap()
        .expect("password field is rendered while logged out");
    assert_eq!(password.get_attribute("type").as_deref(), Some("password"));
}
