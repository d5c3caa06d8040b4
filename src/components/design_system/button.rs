use leptos::ev;
use leptos::prelude::*;

use super::loading::LoadingSpinner;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    /// Highlighted toggle, e.g. a set favorite
    Active,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-500 text-white border border-transparent",
            ButtonVariant::Secondary => "bg-slate-600 hover:bg-slate-500 text-white border border-transparent",
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/10 text-slate-300 hover:text-white border border-white/20"
            }
            ButtonVariant::Active => "bg-yellow-500 hover:bg-yellow-400 text-white border border-transparent",
        }
    }
}

/// A styled button with variants and an optional loading spinner
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(into, default = Signal::derive(|| ButtonVariant::Primary))]
    variant: Signal<ButtonVariant>,
    /// Click handler
    on_click: F,
    /// `button` or `submit`
    #[prop(default = "button")]
    r#type: &'static str,
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Shows a spinner and blocks clicks
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "px-3 py-1.5 rounded-md text-sm transition-colors flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-indigo-400";

    let is_disabled = move || disabled.get() || loading.get();

    let full_class = move || {
        let state_class = if is_disabled() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer"
        };
        format!("{base_class} {} {state_class} {class}", variant.get().class())
    };

    let handle_click = move |evt: ev::MouseEvent| {
        if !is_disabled() {
            on_click(evt);
        }
    };

    view! {
        <button
            type=r#type
            class=full_class
            on:click=handle_click
            disabled=is_disabled
        >
            {move || loading.get().then(|| view! { <LoadingSpinner size="sm" /> })}
            {children()}
        </button>
    }
}
