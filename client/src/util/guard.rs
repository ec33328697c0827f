//! Client-side route guards for session- and admin-only pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server guard only covers `/dashboard*`. Every other protected page
//! checks the stored session after hydration and navigates away when the
//! session is missing or lacks the admin role.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::util::session;

/// Outcome of checking the stored session against a page's requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    NeedsLogin,
    NeedsAdmin,
}

impl Access {
    /// Where to send the visitor instead, if anywhere.
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::Granted => None,
            Self::NeedsLogin => Some("/login"),
            Self::NeedsAdmin => Some("/dashboard"),
        }
    }
}

/// No token sends to login; a non-admin on an admin page goes to the dashboard.
pub fn evaluate(token: Option<&str>, role: Option<&str>, admin_only: bool) -> Access {
    if token.is_none_or(|t| t.trim().is_empty()) {
        return Access::NeedsLogin;
    }
    if admin_only && !role.is_some_and(|r| r.eq_ignore_ascii_case(session::ADMIN_ROLE)) {
        return Access::NeedsAdmin;
    }
    Access::Granted
}

/// Check the stored session once mounted; returns a flag that turns true when
/// access is granted.
/// Redirect options that replace the current history entry, so Back does
/// not return to a page the visitor was bounced from.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

pub fn install_session_guard<F>(admin_only: bool, navigate: F) -> RwSignal<bool>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let granted = RwSignal::new(false);
    Effect::new(move || {
        let token = session::token_from_cookie_or_storage();
        let role = session::role();
        match evaluate(token.as_deref(), role.as_deref(), admin_only).redirect() {
            None => granted.set(true),
            Some(target) => navigate(target, replace_history()),
        }
    });
    granted
}
