//! Notification Service Tests
//!
//! Tests for toast lifecycle, dismissal policy and error reporting.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use voice_studio_frontend::error::ApiError;
use voice_studio_frontend::services::notification_service::{
    NotificationState, ToastType, AUTO_DISMISS_MS,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_new_state_is_empty() {
    let state = NotificationState::new();
    assert!(state.notifications.get().is_empty());
}

#[wasm_bindgen_test]
fn test_add_and_remove() {
    let state = NotificationState::new();
    let id = state.add(ToastType::Info, "Hello".to_string(), None);
    assert_eq!(state.notifications.get().len(), 1);

    state.remove(id);
    assert!(state.notifications.get().is_empty());
}

#[wasm_bindgen_test]
fn test_remove_unknown_id_is_noop() {
    let state = NotificationState::new();
    state.success("Logged in", None);
    state.remove(uuid::Uuid::new_v4());
    assert_eq!(state.notifications.get().len(), 1);
}

#[wasm_bindgen_test]
fn test_success_auto_dismisses() {
    let state = NotificationState::new();
    state.success("Logged in", None);

    let notification = state.notifications.get()[0].clone();
    assert_eq!(notification.toast_type, ToastType::Success);
    assert_eq!(notification.duration_ms, Some(AUTO_DISMISS_MS));
}

#[wasm_bindgen_test]
fn test_errors_stay_until_dismissed() {
    let state = NotificationState::new();
    state.error("Login failed", Some("Check your password"));

    let notification = state.notifications.get()[0].clone();
    assert_eq!(notification.toast_type, ToastType::Error);
    assert_eq!(notification.duration_ms, None);
    assert_eq!(notification.message.as_deref(), Some("Check your password"));
}

#[wasm_bindgen_test]
fn test_report_uses_error_title_and_message() {
    let state = NotificationState::new();
    state.report(&ApiError::AuthRequired("preview"));

    let notification = state.notifications.get()[0].clone();
    assert_eq!(notification.title, "Login required");
    assert_eq!(notification.message.as_deref(), Some("Please login to preview"));
}

#[wasm_bindgen_test]
fn test_notifications_keep_insertion_order() {
    let state = NotificationState::new();
    state.info("first", None);
    state.error("second", None);

    let titles: Vec<String> = state
        .notifications
        .get()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, vec!["first", "second"]);
}
