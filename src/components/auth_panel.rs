//! Auth Panel Component
//!
//! Login/signup form shared by the auth screen and the list screen's inline
//! fallback. What happens after success is up to the caller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::ErrorMessage;
use crate::context::use_app_context;
use crate::models::User;
use crate::state::AuthForm;
use crate::workflow;

/// Credentials form with a login/signup switch
///
/// # Arguments
/// * `on_authenticated` - Runs after the session is signed in
/// * `standalone` - Full-page layout with a top-level heading
#[component]
pub fn AuthPanel(
    #[prop(into)] on_authenticated: Callback<User>,
    #[prop(optional)] standalone: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(AuthForm::default());
    let mode = move || form.with(|f| f.mode);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let api = ctx.api();
            if let Some(user) = workflow::submit_auth(&api, &form, &ctx.session).await {
                on_authenticated.run(user);
            }
        });
    };

    view! {
        <form
            class=if standalone { "auth-form standalone" } else { "auth-form" }
            on:submit=submit
        >
            {move || if standalone {
                view! { <h1>{mode().label()}</h1> }.into_any()
            } else {
                view! { <h2>{mode().label()}</h2> }.into_any()
            }}

            <input
                type="text"
                placeholder="Username"
                autocomplete="username"
                prop:value=move || form.with(|f| f.username.clone())
                on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
            />
            <input
                type="password"
                placeholder="Password"
                autocomplete="current-password"
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
            />

            <button type="submit" disabled=move || form.with(AuthForm::is_pending)>
                {move || mode().label()}
            </button>
            <button type="button" class="switch-mode-btn" on:click=move |_| form.update(AuthForm::toggle_mode)>
                {move || mode().switch_label()}
            </button>

            <ErrorMessage message=Signal::derive(move || form.with(|f| f.error().map(str::to_string))) />
        </form>
    }
}
