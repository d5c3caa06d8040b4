//! Login / sign-up form, or the logout button once authenticated.

use leptos::ev;
use leptos::prelude::*;

use crate::bindings::Credentials;
use crate::components::design_system::{Button, ButtonVariant, Input};
use crate::services::session::use_session_state;

#[component]
pub fn AuthPanel() -> impl IntoView {
    let session = use_session_state();

    // Credentials live only as long as the form is shown
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let pending = Signal::derive(move || session.pending.get());
    let credentials = move || Credentials::new(email.get_untracked(), password.get_untracked());

    let handle_login = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        session.login(credentials());
    };

    let handle_register = move |_: ev::MouseEvent| {
        session.register(credentials());
    };

    Effect::new(move |_| {
        if session.is_authenticated() {
            email.set(String::new());
            password.set(String::new());
        }
    });

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || view! {
                <form
                    on:submit=handle_login
                    class="flex flex-col sm:flex-row gap-2 w-full max-w-xl mt-2"
                >
                    <Input value=email placeholder="Email" r#type="text" disabled=pending />
                    <Input value=password placeholder="Password" r#type="password" disabled=pending />
                    <Button r#type="submit" on_click=|_| {} loading=pending>
                        "Login"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=handle_register
                        disabled=pending
                    >
                        "Sign up"
                    </Button>
                </form>
            }
        >
            <div class="flex items-center gap-3 mt-2">
                <Button variant=ButtonVariant::Ghost on_click=move |_| session.logout()>
                    "Logout"
                </Button>
            </div>
        </Show>
    }
}
