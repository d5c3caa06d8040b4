use leptos::prelude::*;

use crate::components::auth_panel::AuthPanel;

/// Published 3D scene shown behind the headline.
pub const SCENE_URL: &str = "https://prod.spline.design/4cHQr84zOGAHOehh/scene.splinecode";

/// Landing header: decorative scene, headline and the auth controls.
///
/// The scene is rendered by the `<spline-viewer>` web component loaded in
/// `index.html`; nothing here reads from it.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="relative h-[55vh] w-full">
            <spline-viewer url=SCENE_URL class="block w-full h-full"></spline-viewer>
            <div class="absolute inset-0 pointer-events-none bg-gradient-to-b from-transparent via-[#0f1020]/30 to-[#0f1020]"></div>
            <div class="absolute inset-x-0 bottom-10 flex flex-col items-center gap-3 px-6">
                <h1 class="text-3xl md:text-5xl font-semibold tracking-tight text-center">
                    "Studio-grade Text-to-Speech"
                </h1>
                <p class="text-slate-300 text-center max-w-2xl">
                    "Preview pristine voices, synthesize longform audio with SSML, and manage projects, all in one secure workspace."
                </p>
                <AuthPanel />
            </div>
        </header>
    }
}
