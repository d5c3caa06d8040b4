use leptos::prelude::*;

use crate::bindings::ApiClient;
use crate::components::design_system::ToastContainer;
use crate::components::developer_guide::DeveloperGuide;
use crate::components::hero::Hero;
use crate::components::now_playing::NowPlaying;
use crate::components::snippet_editor::SnippetEditor;
use crate::components::voice_catalog::VoiceCatalog;
use crate::services::favorites::provide_favorites_state;
use crate::services::notification_service::provide_notification_state;
use crate::services::playback::provide_playback_state;
use crate::services::session::provide_session_state;

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    let notifications = provide_notification_state();
    let session = provide_session_state(ApiClient::from_env(), notifications);
    provide_favorites_state(session, notifications);
    provide_playback_state(session, notifications);

    view! {
        <div class="min-h-screen bg-gradient-to-br from-[#0f1020] to-[#0b1226] text-white">
            <Hero />

            <main class="max-w-6xl mx-auto px-6 py-10 grid md:grid-cols-3 gap-6">
                <div class="md:col-span-2 flex flex-col gap-4">
                    <SnippetEditor />
                    <VoiceCatalog />
                </div>
                <aside class="flex flex-col gap-4">
                    <NowPlaying />
                    <DeveloperGuide />
                </aside>
            </main>

            <ToastContainer />
        </div>
    }
}
