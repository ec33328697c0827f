//! Login form state and post-login routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login persists the session via `util::session` and sends
//! admins to the console and everyone else to the dashboard. The role comes
//! from the login response only.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResult};

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub loading: bool,
    pub error: String,
}

impl LoginForm {
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.loading {
            return None;
        }
        self.error.clear();
        if self.email.is_empty() || self.password.is_empty() {
            self.error = "Please fill in all fields".to_owned();
            return None;
        }
        self.loading = true;
        Some(LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() })
    }

    /// Returns where to navigate on success.
    pub fn finish_submit(&mut self, result: Result<&LoginResult, ApiError>) -> Option<&'static str> {
        self.loading = false;
        match result {
            Ok(login) => Some(landing_for(login)),
            Err(err) => {
                self.error = err.message_or("Login failed");
                None
            }
        }
    }
}

pub fn landing_for(login: &LoginResult) -> &'static str {
    if login.is_admin() { "/admin" } else { "/dashboard" }
}
