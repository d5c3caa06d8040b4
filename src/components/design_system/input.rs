use leptos::ev;
use leptos::prelude::*;

/// A styled text input bound to a signal
#[component]
pub fn Input(
    /// The current value (two-way binding signal)
    value: RwSignal<String>,
    #[prop(into, optional)]
    placeholder: String,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    r#type: &'static str,
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let base_class = "flex-1 px-3 py-2 rounded-md bg-white/10 border border-white/20 outline-none focus:border-indigo-400 placeholder-slate-400 disabled:opacity-50";
    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        value.set(event_target_value(&evt));
    };

    view! {
        <input
            class=full_class
            type=r#type
            prop:value=move || value.get()
            placeholder=placeholder
            disabled=move || disabled.get()
            on:input=handle_input
        />
    }
}

/// Multi-line variant of [`Input`]
#[component]
pub fn TextArea(
    value: RwSignal<String>,
    #[prop(default = 3)]
    rows: u32,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let full_class = format!("w-full px-3 py-2 rounded-md bg-black/20 border border-white/10 outline-none focus:border-indigo-400 {class}");

    view! {
        <textarea
            class=full_class
            rows=rows.to_string()
            prop:value=move || value.get()
            on:input=move |evt| value.set(event_target_value(&evt))
        ></textarea>
    }
}
