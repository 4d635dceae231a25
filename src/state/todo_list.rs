//! Todo List State
//!
//! Snapshot of the server's collection plus everything the list screen needs
//! to decide what to draw. All changes go request-then-refetch; nothing here
//! edits the snapshot locally.

use super::{InFlight, Mutation};
use crate::error::ApiResult;
use crate::models::Item;
use crate::session::Session;

/// Issued per fetch; responses apply only if newer than the last applied one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// What the list screen renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScreen {
    /// Inline auth panel instead of the list
    Auth,
    Loading,
    Failed(String),
    Items(Vec<Item>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Option<Vec<Item>>,
    fetch_error: Option<String>,
    issued: u64,
    applied: u64,
    draft: String,
    in_flight: InFlight,
    mutation_error: Option<String>,
}

impl TodoList {
    #[cfg(test)]
    pub fn items(&self) -> Option<&[Item]> {
        self.items.as_deref()
    }

    pub fn screen(&self, session: &Session) -> ListScreen {
        if !session.is_authenticated() {
            return ListScreen::Auth;
        }
        if let Some(err) = &self.fetch_error {
            return ListScreen::Failed(err.clone());
        }
        match &self.items {
            None => ListScreen::Loading,
            Some(items) => ListScreen::Items(items.clone()),
        }
    }

    // ========================
    // Fetch
    // ========================

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// True while any issued fetch is newer than the applied snapshot
    pub fn is_fetching(&self) -> bool {
        self.issued > self.applied
    }

    /// Apply a fetch result unless a newer one already landed.
    /// Returns whether it was applied.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: ApiResult<Vec<Item>>) -> bool {
        if ticket.0 <= self.applied {
            log::debug!("dropping stale todos response #{} (have #{})", ticket.0, self.applied);
            return false;
        }
        self.applied = ticket.0;
        match result {
            Ok(items) => {
                self.items = Some(items);
                self.fetch_error = None;
            }
            Err(err) => self.fetch_error = Some(err.to_string()),
        }
        true
    }

    /// Forget the snapshot, e.g. after sign-in when the previous listing
    /// belonged to an anonymous request
    pub fn invalidate(&mut self) {
        self.items = None;
        self.fetch_error = None;
        self.applied = self.issued;
    }

    // ========================
    // Draft
    // ========================

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, value: String) {
        self.draft = value;
    }

    /// Start an add with the current draft. `None` for blank drafts or while
    /// another add is in flight. The title goes out as typed.
    pub fn begin_add(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        if !self.in_flight.acquire(Mutation::Add) {
            return None;
        }
        Some(self.draft.clone())
    }

    /// Settle an add. The input is cleared only if it still holds the
    /// submitted title, so text typed meanwhile survives.
    pub fn finish_add(&mut self, title: &str, result: ApiResult<()>) {
        if result.is_ok() && self.draft == title {
            self.draft.clear();
        }
        self.finish_mutation(Mutation::Add, result);
    }

    // ========================
    // Mutations
    // ========================

    pub fn begin_mutation(&mut self, kind: Mutation) -> bool {
        self.in_flight.acquire(kind)
    }

    pub fn finish_mutation(&mut self, kind: Mutation, result: ApiResult<()>) {
        self.in_flight.release(kind);
        match result {
            Ok(()) => self.mutation_error = None,
            Err(err) => self.mutation_error = Some(format!("Could not {} item: {}", kind.verb(), err)),
        }
    }

    pub fn is_busy(&self, kind: Mutation) -> bool {
        self.in_flight.contains(kind)
    }

    pub fn mutation_error(&self) -> Option<&str> {
        self.mutation_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.mutation_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::User;

    fn item(id: &str, title: &str, completed: bool) -> Item {
        Item {
            id: id.to_string(),
            title: title.to_string(),
            completed,
        }
    }

    fn signed_in() -> Session {
        Session::SignedIn(User {
            id: "1".to_string(),
            username: "alice".to_string(),
        })
    }

    #[test]
    fn test_anonymous_with_empty_list_shows_auth() {
        let mut list = TodoList::default();
        assert_eq!(list.screen(&Session::Anonymous), ListScreen::Auth);

        let ticket = list.begin_fetch();
        list.finish_fetch(ticket, Ok(vec![]));
        assert_eq!(list.screen(&Session::Anonymous), ListScreen::Auth);
    }

    #[test]
    fn test_signed_in_with_empty_list_shows_items() {
        let mut list = TodoList::default();
        assert_eq!(list.screen(&signed_in()), ListScreen::Loading);

        let ticket = list.begin_fetch();
        list.finish_fetch(ticket, Ok(vec![]));
        assert_eq!(list.screen(&signed_in()), ListScreen::Items(vec![]));
    }

    #[test]
    fn test_fetch_failure_shows_only_error() {
        let mut list = TodoList::default();
        let ticket = list.begin_fetch();
        list.finish_fetch(ticket, Ok(vec![item("1", "a", false)]));

        let ticket = list.begin_fetch();
        list.finish_fetch(ticket, Err(ApiError::Network("offline".to_string())));
        assert_eq!(
            list.screen(&signed_in()),
            ListScreen::Failed("Network error: offline".to_string())
        );

        let ticket = list.begin_fetch();
        list.finish_fetch(ticket, Ok(vec![]));
        assert_eq!(list.screen(&signed_in()), ListScreen::Items(vec![]));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut list = TodoList::default();
        let older = list.begin_fetch();
        let newer = list.begin_fetch();
        assert!(list.is_fetching());

        assert!(list.finish_fetch(newer, Ok(vec![item("1", "fresh", false)])));
        assert!(!list.finish_fetch(older, Ok(vec![])));
        assert!(!list.is_fetching());
        assert_eq!(list.items().unwrap()[0].title, "fresh");
    }

    #[test]
    fn test_invalidate_after_sign_in_shows_loading() {
        let mut list = TodoList::default();
        let ticket = list.begin_fetch();
        list.finish_fetch(ticket, Err(ApiError::GraphQl("Not authenticated".to_string())));

        let pending = list.begin_fetch();
        list.invalidate();
        assert_eq!(list.screen(&signed_in()), ListScreen::Loading);

        // Responses issued before the reset are ignored
        assert!(!list.finish_fetch(pending, Ok(vec![item("1", "old", false)])));
        let ticket = list.begin_fetch();
        assert!(list.finish_fetch(ticket, Ok(vec![])));
        assert_eq!(list.screen(&signed_in()), ListScreen::Items(vec![]));
    }

    #[test]
    fn test_blank_draft_is_refused() {
        let mut list = TodoList::default();
        assert!(list.begin_add().is_none());
        list.set_draft("   \t".to_string());
        assert!(list.begin_add().is_none());
        assert!(!list.is_busy(Mutation::Add));
    }

    #[test]
    fn test_draft_sent_as_typed() {
        let mut list = TodoList::default();
        list.set_draft(" Buy milk ".to_string());
        assert_eq!(list.begin_add().as_deref(), Some(" Buy milk "));
        assert!(list.is_busy(Mutation::Add));
        assert!(list.begin_add().is_none());
    }

    #[test]
    fn test_add_success_clears_draft() {
        let mut list = TodoList::default();
        list.set_draft("Buy milk".to_string());
        let title = list.begin_add().unwrap();
        list.finish_add(&title, Ok(()));
        assert_eq!(list.draft(), "");
        assert!(!list.is_busy(Mutation::Add));
    }

    #[test]
    fn test_add_keeps_text_typed_meanwhile() {
        let mut list = TodoList::default();
        list.set_draft("Buy milk".to_string());
        let title = list.begin_add().unwrap();
        list.set_draft("Walk dog".to_string());
        list.finish_add(&title, Ok(()));
        assert_eq!(list.draft(), "Walk dog");
    }

    #[test]
    fn test_add_failure_keeps_draft_and_reports() {
        let mut list = TodoList::default();
        list.set_draft("Buy milk".to_string());
        let title = list.begin_add().unwrap();
        list.finish_add(&title, Err(ApiError::GraphQl("Not authenticated".to_string())));
        assert_eq!(list.draft(), "Buy milk");
        assert_eq!(list.mutation_error(), Some("Could not add item: Not authenticated"));

        list.dismiss_error();
        assert!(list.mutation_error().is_none());
    }

    #[test]
    fn test_mutation_guard_and_error() {
        let mut list = TodoList::default();
        assert!(list.begin_mutation(Mutation::Toggle));
        assert!(!list.begin_mutation(Mutation::Toggle));
        assert!(list.begin_mutation(Mutation::Delete));

        list.finish_mutation(Mutation::Toggle, Err(ApiError::Http { status: 500 }));
        assert!(!list.is_busy(Mutation::Toggle));
        assert_eq!(
            list.mutation_error(),
            Some("Could not update item: Server responded with status 500")
        );

        list.finish_mutation(Mutation::Delete, Ok(()));
        assert!(list.mutation_error().is_none());
    }
}
