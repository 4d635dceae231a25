//! Session State
//!
//! Tracks whether this page load is authenticated. This only decides which
//! screen is shown; the server stays the judge of the real session.

use crate::models::{Item, User};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// Nothing seen yet that proves a server session
    #[default]
    Anonymous,
    /// The server returned items before any sign-in on this page load
    Restored,
    /// Login or signup succeeded on this page load
    SignedIn(User),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Session::Anonymous)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::SignedIn(user) => Some(user),
            _ => None,
        }
    }

    /// Record a successful login or signup. Never downgraded afterwards.
    pub fn sign_in(&mut self, user: User) {
        *self = Session::SignedIn(user);
    }

    /// A non-empty listing means the server already knows us.
    /// An empty one proves nothing.
    pub fn observe_items(&mut self, items: &[Item]) {
        if *self == Session::Anonymous && !items.is_empty() {
            *self = Session::Restored;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: "1".to_string(),
            username: "alice".to_string(),
        }
    }

    fn item() -> Item {
        Item {
            id: "9".to_string(),
            title: "Buy milk".to_string(),
            completed: false,
        }
    }

    #[test]
    fn test_starts_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_empty_listing_is_not_evidence() {
        let mut session = Session::default();
        session.observe_items(&[]);
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn test_non_empty_listing_restores() {
        let mut session = Session::default();
        session.observe_items(&[item()]);
        assert_eq!(session, Session::Restored);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_signed_in_survives_empty_listing() {
        let mut session = Session::default();
        session.sign_in(alice());
        session.observe_items(&[]);
        session.observe_items(&[item()]);
        assert_eq!(session.user(), Some(&alice()));
    }
}
