//! Request Workflows
//!
//! Each user action is one async function: guard, call, record the outcome,
//! then refetch. State is touched only between awaits.

use crate::api::TodoApi;
use crate::error::ApiResult;
use crate::models::{Item, User};
use crate::session::Session;
use crate::state::{AuthForm, FetchTicket, Mutation, StateCell, TodoList};

/// Fetch the whole collection and apply it if it is still the newest
pub async fn refresh<A, L, S>(api: &A, list: &L, session: &S)
where
    A: TodoApi + ?Sized,
    L: StateCell<TodoList>,
    S: StateCell<Session>,
{
    let Some(ticket) = list.update_with(TodoList::begin_fetch) else {
        return;
    };
    let result = api.list_items().await;
    match &result {
        Ok(items) => log::debug!("todos query returned {} items", items.len()),
        Err(err) => log::warn!("todos query failed: {}", err),
    }
    apply_listing(list, session, ticket, result);
}

/// Apply a listing; only a response that is actually shown counts as
/// evidence of a server session.
fn apply_listing<L, S>(list: &L, session: &S, ticket: FetchTicket, result: ApiResult<Vec<Item>>)
where
    L: StateCell<TodoList>,
    S: StateCell<Session>,
{
    let listed = result.as_ref().ok().cloned();
    if list.update_with(|l| l.finish_fetch(ticket, result)) != Some(true) {
        return;
    }
    if let Some(items) = listed {
        session.update_with(|s| s.observe_items(&items));
    }
}

/// Add the drafted title. Returns false when nothing was sent.
pub async fn add_item<A, L, S>(api: &A, list: &L, session: &S) -> bool
where
    A: TodoApi + ?Sized,
    L: StateCell<TodoList>,
    S: StateCell<Session>,
{
    let Some(title) = list.update_with(TodoList::begin_add).flatten() else {
        return false;
    };
    let result = api.add_item(&title).await.map(|item| {
        log::debug!("added todo {}", item.id);
    });
    report(Mutation::Add, &result);
    list.update_with(|l| l.finish_add(&title, result));
    refresh(api, list, session).await;
    true
}

/// Flip completion of `id`. Returns false while another toggle is in flight.
pub async fn toggle_item<A, L, S>(api: &A, list: &L, session: &S, id: &str) -> bool
where
    A: TodoApi + ?Sized,
    L: StateCell<TodoList>,
    S: StateCell<Session>,
{
    if list.update_with(|l| l.begin_mutation(Mutation::Toggle)) != Some(true) {
        return false;
    }
    let result = api.toggle_item(id).await.map(|toggled| {
        log::debug!("todo {} completed={}", toggled.id, toggled.completed);
    });
    report(Mutation::Toggle, &result);
    list.update_with(|l| l.finish_mutation(Mutation::Toggle, result));
    refresh(api, list, session).await;
    true
}

/// Remove `id`. Returns false while another delete is in flight.
pub async fn delete_item<A, L, S>(api: &A, list: &L, session: &S, id: &str) -> bool
where
    A: TodoApi + ?Sized,
    L: StateCell<TodoList>,
    S: StateCell<Session>,
{
    if list.update_with(|l| l.begin_mutation(Mutation::Delete)) != Some(true) {
        return false;
    }
    let result = api.delete_item(id).await.map(|deleted| {
        if !deleted {
            log::debug!("delete of {} matched nothing", id);
        }
    });
    report(Mutation::Delete, &result);
    list.update_with(|l| l.finish_mutation(Mutation::Delete, result));
    refresh(api, list, session).await;
    true
}

/// Submit the auth form in its current mode. On success the session is
/// signed in and the user returned for the caller's continuation.
pub async fn submit_auth<A, F, S>(api: &A, form: &F, session: &S) -> Option<User>
where
    A: TodoApi + ?Sized,
    F: StateCell<AuthForm>,
    S: StateCell<Session>,
{
    let request = form.update_with(AuthForm::begin_submit).flatten()?;
    let result = api.authenticate(request.mode, &request.credentials).await;
    match &result {
        Ok(user) => {
            log::info!("{} succeeded for {}", request.mode.label(), user.username);
            session.update_with(|s| s.sign_in(user.clone()));
        }
        Err(err) => log::warn!("{} failed: {}", request.mode.label(), err),
    }
    form.update_with(|f| f.finish_submit(&result));
    result.ok()
}

fn report(kind: Mutation, result: &ApiResult<()>) {
    if let Err(err) = result {
        log::warn!("{} failed: {}", kind.verb(), err);
    }
}
