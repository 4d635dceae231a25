//! Todo App
//!
//! Root component: provides context and switches between the two screens.

use leptos::ev;
use leptos::prelude::*;

use crate::api::GraphQlClient;
use crate::components::{AuthScreen, TodoScreen};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::route::{self, Route};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    log::info!("using API endpoint {}", config.endpoint);

    // Provide context to all children
    let ctx = AppContext::new(GraphQlClient::new(&config), route::current());
    provide_context(ctx);

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| ctx.route.set(route::current()));

    view! {
        <main class="app">
            {move || match ctx.route.get() {
                Route::Index => view! { <TodoScreen /> }.into_any(),
                Route::Auth => view! { <AuthScreen /> }.into_any(),
            }}
        </main>
    }
}
