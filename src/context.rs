//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::GraphQlClient;
use crate::route::{self, Route};
use crate::session::Session;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether this page load has authenticated
    pub session: RwSignal<Session>,
    /// Screen currently shown
    pub route: RwSignal<Route>,
    api: StoredValue<GraphQlClient, LocalStorage>,
}

impl AppContext {
    pub fn new(api: GraphQlClient, route: Route) -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            route: RwSignal::new(route),
            api: StoredValue::new_local(api),
        }
    }

    /// Client handle for a request
    pub fn api(&self) -> GraphQlClient {
        self.api.get_value()
    }

    /// Switch screens and record a history entry
    pub fn navigate(&self, to: Route) {
        if self.route.get_untracked() == to {
            return;
        }
        log::info!("navigate to {}", to.path());
        route::push(to);
        self.route.set(to);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
