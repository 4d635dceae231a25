//! Remote Operation Client
//!
//! Frontend bindings to the GraphQL API, organized by domain.

mod auth;
mod graphql;
mod todo;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{AuthMode, Credentials, Item, ToggledItem, User};

pub use graphql::GraphQlClient;

/// The six operations the UI issues.
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait TodoApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<User>;

    async fn signup(&self, credentials: &Credentials) -> ApiResult<User>;

    async fn list_items(&self) -> ApiResult<Vec<Item>>;

    async fn add_item(&self, title: &str) -> ApiResult<Item>;

    async fn toggle_item(&self, id: &str) -> ApiResult<ToggledItem>;

    async fn delete_item(&self, id: &str) -> ApiResult<bool>;

    /// Login or signup depending on the form mode
    async fn authenticate(&self, mode: AuthMode, credentials: &Credentials) -> ApiResult<User> {
        match mode {
            AuthMode::Login => self.login(credentials).await,
            AuthMode::Signup => self.signup(credentials).await,
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for GraphQlClient {
    async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        auth::login(self, credentials).await
    }

    async fn signup(&self, credentials: &Credentials) -> ApiResult<User> {
        auth::signup(self, credentials).await
    }

    async fn list_items(&self) -> ApiResult<Vec<Item>> {
        todo::list_items(self).await
    }

    async fn add_item(&self, title: &str) -> ApiResult<Item> {
        todo::add_item(self, title).await
    }

    async fn toggle_item(&self, id: &str) -> ApiResult<ToggledItem> {
        todo::toggle_item(self, id).await
    }

    async fn delete_item(&self, id: &str) -> ApiResult<bool> {
        todo::delete_item(self, id).await
    }
}
