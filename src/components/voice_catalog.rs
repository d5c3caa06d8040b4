//! Voice grid, loaded once on first render.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::Voice;
use crate::components::design_system::LoadingSpinner;
use crate::components::voice_card::VoiceCard;
use crate::services::notification_service::use_notification_state;
use crate::services::session::use_session_state;

#[component]
pub fn VoiceCatalog() -> impl IntoView {
    let session = use_session_state();
    let notifications = use_notification_state();

    let voices = RwSignal::new(Vec::<Voice>::new());
    let is_loading = RwSignal::new(true);

    // No tracked reads, so this runs exactly once
    Effect::new(move |_| {
        let client = session.client();
        spawn_local(async move {
            match client.list_voices().await {
                Ok(list) => {
                    tracing::debug!("loaded {} voices", list.len());
                    voices.set(list);
                }
                Err(e) => notifications.report(&e),
            }
            is_loading.set(false);
        });
    });

    view! {
        <Show
            when=move || !is_loading.get()
            fallback=|| view! {
                <div class="flex items-center justify-center h-32">
                    <LoadingSpinner size="lg" />
                </div>
            }
        >
            <div class="grid sm:grid-cols-2 md:grid-cols-3 gap-4">
                <For
                    each=move || voices.get()
                    key=|voice| voice.key.clone()
                    children=|voice| view! { <VoiceCard voice=voice /> }
                />
            </div>
        </Show>
    }
}
