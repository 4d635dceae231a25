//! Add Item Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::state::{Mutation, TodoList};
use crate::workflow;

/// Title input plus "Add"; blank titles are ignored
#[component]
pub fn AddItemForm(list: RwSignal<TodoList>) -> impl IntoView {
    let ctx = use_app_context();

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            workflow::add_item(&ctx.api(), &list, &ctx.session).await;
        });
    };

    view! {
        <form class="new-item-form" on:submit=add style="margin-bottom: 16px;">
            <input
                type="text"
                placeholder="New todo"
                prop:value=move || list.with(|l| l.draft().to_string())
                on:input=move |ev| list.update(|l| l.set_draft(event_target_value(&ev)))
                style="margin-right: 8px;"
            />
            <button type="submit" disabled=move || list.with(|l| l.is_busy(Mutation::Add))>
                "Add"
            </button>
        </form>
    }
}
