use leptos::prelude::*;
use phosphor_leptos::{Icon, IconWeight, PLAY, STAR};

use crate::bindings::Voice;
use crate::components::design_system::{Button, ButtonVariant};
use crate::services::favorites::use_favorites_state;
use crate::services::playback::use_playback_state;

/// Display a single voice with its favorite toggle and preview button
#[component]
pub fn VoiceCard(voice: Voice) -> impl IntoView {
    let favorites = use_favorites_state();
    let playback = use_playback_state();

    let key = voice.key.clone();
    let is_favorite = Signal::derive({
        let key = key.clone();
        move || favorites.contains(&key)
    });
    let is_previewing = Signal::derive({
        let key = key.clone();
        move || playback.pending.with(|pending| pending.as_deref() == Some(key.as_str()))
    });

    let handle_favorite = move |_| {
        favorites.set_favorite(key.clone(), !is_favorite.get_untracked());
    };

    let handle_preview = {
        let voice = voice.clone();
        move |_| playback.preview(voice.clone())
    };

    let favorite_variant = Signal::derive(move || {
        if is_favorite.get() {
            ButtonVariant::Active
        } else {
            ButtonVariant::Ghost
        }
    });

    view! {
        <div class="p-4 rounded-xl border border-white/10 bg-white/70 backdrop-blur shadow-sm flex flex-col gap-2">
            <div class="flex items-center justify-between gap-2">
                <div>
                    <div class="font-semibold text-slate-800">{voice.name.clone()}</div>
                    <div class="text-xs text-slate-500">{voice.subtitle()}</div>
                </div>
                <Button variant=favorite_variant on_click=handle_favorite class="rounded-full">
                    {move || if is_favorite.get() {
                        view! { <Icon icon=STAR size="14px" weight=IconWeight::Fill /> }.into_any()
                    } else {
                        view! { <Icon icon=STAR size="14px" /> }.into_any()
                    }}
                    "Favorite"
                </Button>
            </div>
            <div class="text-xs text-slate-500">{voice.tag_line()}</div>
            <div class="flex gap-2">
                <Button on_click=handle_preview loading=is_previewing>
                    <Icon icon=PLAY size="14px" weight=IconWeight::Fill />
                    "Preview"
                </Button>
            </div>
        </div>
    }
}
