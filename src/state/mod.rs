//! UI State
//!
//! Plain state machines behind the screens. Components keep them in
//! signals; tests keep them in `Rc<RefCell<_>>`.

mod auth_form;
mod todo_list;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

pub use auth_form::AuthForm;
pub use todo_list::{FetchTicket, ListScreen, TodoList};

/// Shared mutable slot that async workflows read and write between awaits.
///
/// Returns `None` when the slot is gone (e.g. the owning component
/// was unmounted while a request was in flight).
pub trait StateCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// List mutations guarded against overlapping dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add,
    Toggle,
    Delete,
}

impl Mutation {
    fn bit(self) -> u8 {
        match self {
            Mutation::Add => 0b001,
            Mutation::Toggle => 0b010,
            Mutation::Delete => 0b100,
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Mutation::Add => "add",
            Mutation::Toggle => "update",
            Mutation::Delete => "delete",
        }
    }
}

/// Set of mutation kinds currently awaiting a response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight(u8);

impl InFlight {
    /// Mark `kind` as in flight; false if it already was
    pub fn acquire(&mut self, kind: Mutation) -> bool {
        if self.contains(kind) {
            return false;
        }
        self.0 |= kind.bit();
        true
    }

    pub fn release(&mut self, kind: Mutation) {
        self.0 &= !kind.bit();
    }

    pub fn contains(&self, kind: Mutation) -> bool {
        self.0 & kind.bit() != 0
    }
}
