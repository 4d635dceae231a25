//! Todo Row Component
//!
//! One item in the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Item;
use crate::state::{Mutation, TodoList};
use crate::workflow;

/// A single item row: checkbox, title, delete
#[component]
pub fn TodoRow(item: Item, list: RwSignal<TodoList>) -> impl IntoView {
    let ctx = use_app_context();

    let Item { id, title, completed } = item;
    let toggle_id = id.clone();
    let delete_id = id;

    let toggle = move |_| {
        let id = toggle_id.clone();
        spawn_local(async move {
            workflow::toggle_item(&ctx.api(), &list, &ctx.session, &id).await;
        });
    };

    let delete = move |_| {
        let id = delete_id.clone();
        spawn_local(async move {
            workflow::delete_item(&ctx.api(), &list, &ctx.session, &id).await;
        });
    };

    view! {
        <li
            class=if completed { "todo-row completed" } else { "todo-row" }
            style="display: flex; align-items: center; margin-bottom: 8px;"
        >
            // Snapshot value, re-applied whenever the list changes so a
            // failed toggle does not leave the box flipped
            <input
                type="checkbox"
                prop:checked=move || {
                    list.track();
                    completed
                }
                disabled=move || list.with(|l| l.is_busy(Mutation::Toggle))
                on:change=toggle
                style="margin-right: 8px;"
            />
            <span
                class="todo-title"
                style=if completed {
                    "text-decoration: line-through; flex: 1;"
                } else {
                    "text-decoration: none; flex: 1;"
                }
            >
                {title}
            </span>
            <button
                class="delete-btn"
                disabled=move || list.with(|l| l.is_busy(Mutation::Delete))
                on:click=delete
                style="margin-left: 8px;"
            >
                "Delete"
            </button>
        </li>
    }
}
