use leptos::prelude::*;
use uuid::Uuid;

use crate::error::ApiError;

/// Success and info toasts close themselves after this long.
pub const AUTO_DISMISS_MS: u64 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub toast_type: ToastType,
    pub title: String,
    pub message: Option<String>,
    /// `None` keeps the toast until the user closes it.
    pub duration_ms: Option<u64>,
}

#[derive(Clone, Copy)]
pub struct NotificationState {
    pub notifications: RwSignal<Vec<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn add(&self, toast_type: ToastType, title: String, message: Option<String>) -> Uuid {
        let id = Uuid::new_v4();
        let duration_ms = match toast_type {
            ToastType::Error => None,
            ToastType::Success | ToastType::Info => Some(AUTO_DISMISS_MS),
        };
        let notification = Notification {
            id,
            toast_type,
            title,
            message,
            duration_ms,
        };

        self.notifications.update(|list| list.push(notification));
        id
    }

    pub fn remove(&self, id: Uuid) {
        self.notifications.update(|list| {
            if let Some(pos) = list.iter().position(|n| n.id == id) {
                list.remove(pos);
            }
        });
    }

    pub fn success(&self, title: &str, message: Option<&str>) {
        self.add(ToastType::Success, title.to_string(), message.map(String::from));
    }

    pub fn info(&self, title: &str, message: Option<&str>) {
        self.add(ToastType::Info, title.to_string(), message.map(String::from));
    }

    pub fn error(&self, title: &str, message: Option<&str>) {
        self.add(ToastType::Error, title.to_string(), message.map(String::from));
    }

    /// Log `err` and show it to the user. Errors stay until dismissed.
    pub fn report(&self, err: &ApiError) {
        if err.is_auth_required() {
            tracing::info!("{err}");
        } else {
            tracing::error!("{err}");
        }
        self.add(ToastType::Error, err.title().to_string(), Some(err.to_string()));
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

// Global accessor helpers
pub fn provide_notification_state() -> NotificationState {
    let state = NotificationState::new();
    provide_context(state);
    state
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}
