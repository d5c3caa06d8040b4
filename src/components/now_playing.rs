use leptos::prelude::*;

use crate::components::design_system::Panel;
use crate::services::playback::use_playback_state;

/// Player for the most recent preview.
#[component]
pub fn NowPlaying() -> impl IntoView {
    let playback = use_playback_state();

    view! {
        <Panel title="Now Playing">
            {move || match playback.audio_url.get() {
                Some(url) => view! {
                    <audio src=url controls=true autoplay=true class="w-full"></audio>
                }.into_any(),
                None => view! {
                    <div class="text-sm text-slate-400">
                        "Hit Preview on any voice to listen instantly."
                    </div>
                }.into_any(),
            }}
        </Panel>
    }
}
