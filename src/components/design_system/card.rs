use leptos::prelude::*;

/// Translucent panel used for every sidebar and editor block
#[component]
pub fn Panel(
    /// Optional heading shown above the content
    #[prop(into, optional)]
    title: Option<String>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("p-4 rounded-xl bg-white/5 border border-white/10 {class}");

    view! {
        <section class=full_class>
            {title.map(|t| view! { <div class="font-medium mb-2">{t}</div> })}
            {children()}
        </section>
    }
}
