//! Auth Screen
//!
//! Standalone `/auth` page; returns to the list once signed in.

use leptos::prelude::*;

use super::AuthPanel;
use crate::context::use_app_context;
use crate::models::User;
use crate::route::Route;

#[component]
pub fn AuthScreen() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="auth-screen" style="max-width: 400px; margin: 80px auto 0;">
            <AuthPanel
                standalone=true
                on_authenticated=move |_: User| ctx.navigate(Route::Index)
            />
        </div>
    }
}
