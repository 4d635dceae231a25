//! Screen Routing
//!
//! Two paths, kept in sync with browser history.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// List screen with inline auth fallback
    #[default]
    Index,
    /// Standalone login/signup screen
    Auth,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/auth" => Route::Auth,
            _ => Route::Index,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Index => "/",
            Route::Auth => "/auth",
        }
    }
}

/// Route for the current `location.pathname`
pub fn current() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}

/// Push a history entry for `route`
pub fn push(route: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
        log::warn!("pushState to {} failed: {:?}", route.path(), err);
    }
}
