use leptos::prelude::*;

use crate::components::design_system::Panel;

/// Backend endpoints worth knowing when integrating directly.
const ENDPOINTS: &[(&str, &str)] = &[
    ("Fetch voices", "GET /voices"),
    ("Preview audio", "POST /tts/preview"),
    ("Full synth", "POST /tts/synthesize"),
    ("Clone voice", "POST /voices/clone"),
];

#[component]
pub fn DeveloperGuide() -> impl IntoView {
    view! {
        <Panel class="text-sm text-slate-300">
            <div class="font-semibold text-white mb-1">"Developer guide"</div>
            <ul class="list-disc pl-5 space-y-1">
                {ENDPOINTS
                    .iter()
                    .map(|(label, route)| view! { <li>{format!("{label}: {route}")}</li> })
                    .collect_view()}
            </ul>
        </Panel>
    }
}
