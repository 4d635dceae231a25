//! Frontend Models
//!
//! Data structures matching the API schema.

use serde::{Deserialize, Serialize};

/// To-do item (matches the `todos` query selection)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Result of `toggleTodo`: only the changed fields are selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggledItem {
    pub id: String,
    pub completed: bool,
}

/// Account returned by `login` / `signup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// Transient form credentials, never persisted
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Which credential operation the auth form submits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    /// Heading and submit button text
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    /// Text of the button that switches to the other mode
    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Switch to Sign Up",
            AuthMode::Signup => "Switch to Login",
        }
    }
}
