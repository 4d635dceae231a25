//! In-memory API used by tests.
//!
//! Behaves like the server: per-user items, a cookie-like current user, and
//! errors for bad credentials or missing sessions.

use std::cell::RefCell;

use async_trait::async_trait;

use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, Item, ToggledItem, User};

/// Operation names, for call logs and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Login,
    Signup,
    List,
    Add,
    Toggle,
    Delete,
}

#[derive(Default)]
struct Inner {
    accounts: Vec<(User, String)>,
    items: Vec<(String, Item)>,
    current: Option<User>,
    next_id: u32,
    calls: Vec<Call>,
    failures: Vec<(Call, ApiError)>,
}

#[derive(Default)]
pub struct MemoryApi {
    inner: RefCell<Inner>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call of `call` fail with `error`
    pub fn fail_next(&self, call: Call, error: ApiError) {
        self.inner.borrow_mut().failures.push((call, error));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.inner.borrow().calls.iter().filter(|c| **c == call).count()
    }

    fn enter(&self, call: Call) -> ApiResult<()> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(call);
        match inner.failures.iter().position(|(c, _)| *c == call) {
            Some(pos) => Err(inner.failures.remove(pos).1),
            None => Ok(()),
        }
    }

    fn current_user(&self) -> ApiResult<User> {
        self.inner
            .borrow()
            .current
            .clone()
            .ok_or_else(|| ApiError::GraphQl("Not authenticated".to_string()))
    }

    fn next_id(&self) -> String {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        inner.next_id.to_string()
    }
}

#[async_trait(?Send)]
impl TodoApi for MemoryApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        self.enter(Call::Login)?;
        let mut inner = self.inner.borrow_mut();
        let user = inner
            .accounts
            .iter()
            .find(|(u, pw)| u.username == credentials.username && *pw == credentials.password)
            .map(|(u, _)| u.clone())
            .ok_or_else(|| ApiError::GraphQl("Invalid credentials".to_string()))?;
        inner.current = Some(user.clone());
        Ok(user)
    }

    async fn signup(&self, credentials: &Credentials) -> ApiResult<User> {
        self.enter(Call::Signup)?;
        if self
            .inner
            .borrow()
            .accounts
            .iter()
            .any(|(u, _)| u.username == credentials.username)
        {
            return Err(ApiError::GraphQl("Username already taken".to_string()));
        }
        let user = User {
            id: self.next_id(),
            username: credentials.username.clone(),
        };
        let mut inner = self.inner.borrow_mut();
        inner.accounts.push((user.clone(), credentials.password.clone()));
        inner.current = Some(user.clone());
        Ok(user)
    }

    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        self.enter(Call::List)?;
        let user = self.current_user()?;
        Ok(self
            .inner
            .borrow()
            .items
            .iter()
            .filter(|(owner, _)| *owner == user.id)
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn add_item(&self, title: &str) -> ApiResult<Item> {
        self.enter(Call::Add)?;
        let user = self.current_user()?;
        let item = Item {
            id: self.next_id(),
            title: title.to_string(),
            completed: false,
        };
        self.inner.borrow_mut().items.push((user.id, item.clone()));
        Ok(item)
    }

    async fn toggle_item(&self, id: &str) -> ApiResult<ToggledItem> {
        self.enter(Call::Toggle)?;
        let user = self.current_user()?;
        let mut inner = self.inner.borrow_mut();
        let item = inner
            .items
            .iter_mut()
            .find(|(owner, item)| *owner == user.id && item.id == id)
            .map(|(_, item)| item)
            .ok_or_else(|| ApiError::GraphQl(format!("Todo {} not found", id)))?;
        item.completed = !item.completed;
        Ok(ToggledItem {
            id: item.id.clone(),
            completed: item.completed,
        })
    }

    async fn delete_item(&self, id: &str) -> ApiResult<bool> {
        self.enter(Call::Delete)?;
        let user = self.current_user()?;
        let mut inner = self.inner.borrow_mut();
        let before = inner.items.len();
        inner.items.retain(|(owner, item)| !(*owner == user.id && item.id == id));
        Ok(inner.items.len() != before)
    }
}
