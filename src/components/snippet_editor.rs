use leptos::prelude::*;

use crate::components::design_system::{Panel, TextArea};
use crate::services::playback::use_playback_state;

#[component]
pub fn SnippetEditor() -> impl IntoView {
    let playback = use_playback_state();

    view! {
        <Panel>
            <div class="text-sm text-slate-300 mb-1">"Preview text"</div>
            <TextArea value=playback.snippet rows=3 />
        </Panel>
    }
}
