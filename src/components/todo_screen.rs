//! Todo Screen
//!
//! Index page: the list, or the auth panel while this page load has not
//! authenticated.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{AddItemForm, AuthPanel, ErrorMessage, TodoRow};
use crate::context::use_app_context;
use crate::models::User;
use crate::state::{ListScreen, TodoList};
use crate::workflow;

#[component]
pub fn TodoScreen() -> impl IntoView {
    let ctx = use_app_context();
    let list = RwSignal::new(TodoList::default());

    let reload = move || {
        spawn_local(async move {
            workflow::refresh(&ctx.api(), &list, &ctx.session).await;
        });
    };

    // Load items on mount
    Effect::new(move |_| reload());

    // Only changes of what is drawn re-render; typing in the draft does not
    let screen = Memo::new(move |_| {
        let session = ctx.session.get();
        list.with(|l| l.screen(&session))
    });

    let on_inline_auth = move |_: User| {
        list.update(TodoList::invalidate);
        reload();
    };

    view! {
        <div class="todo-screen" style="max-width: 400px; margin: 0 auto;">
            {move || match screen.get() {
                ListScreen::Auth => view! {
                    <AuthPanel on_authenticated=on_inline_auth />
                }.into_any(),
                ListScreen::Loading => view! {
                    <div class="loading">"Loading..."</div>
                }.into_any(),
                ListScreen::Failed(message) => {
                    let text = format!("Error: {}", message);
                    view! { <ErrorMessage message=Signal::derive(move || Some(text.clone())) /> }.into_any()
                }
                ListScreen::Items(items) => view! {
                    <h1>"Todos"</h1>
                    {move || ctx.session.with(|s| s.user().map(|user| {
                        let name = user.username.clone();
                        view! { <p class="signed-in">"Signed in as " {name}</p> }
                    }))}
                    <Show when=move || list.with(TodoList::is_fetching)>
                        <span class="refreshing">"Refreshing..."</span>
                    </Show>
                    <ErrorMessage
                        message=Signal::derive(move || list.with(|l| l.mutation_error().map(str::to_string)))
                        on_dismiss=Callback::new(move |_| list.update(TodoList::dismiss_error))
                    />
                    <AddItemForm list=list />
                    <ul class="todo-list">
                        {items
                            .into_iter()
                            .map(|item| view! { <TodoRow item=item list=list /> })
                            .collect_view()}
                    </ul>
                }.into_any(),
            }}
        </div>
    }
}
