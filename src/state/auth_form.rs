//! Auth Form State
//!
//! Credentials, mode, and the in-flight guard for login/signup.

use crate::error::ApiResult;
use crate::models::{AuthMode, Credentials, User};

/// What a submit sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub mode: AuthMode,
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    pending: bool,
    error: Option<String>,
}

impl AuthForm {
    pub fn set_username(&mut self, value: String) {
        self.username = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Flip login/signup; field contents stay as typed
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a submit. `None` while another one is in flight.
    pub fn begin_submit(&mut self) -> Option<AuthRequest> {
        if self.pending {
            return None;
        }
        self.pending = true;
        self.error = None;
        Some(AuthRequest {
            mode: self.mode,
            credentials: Credentials {
                username: self.username.clone(),
                password: self.password.clone(),
            },
        })
    }

    /// Settle a submit. Fields are wiped only on success (a failed login
    /// keeps what was typed), so a typo does not force retyping the form.
    pub fn finish_submit(&mut self, result: &ApiResult<User>) {
        self.pending = false;
        match result {
            Ok(_) => {
                self.username.clear();
                self.password.clear();
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }
}
