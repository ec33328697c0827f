//! Session guard for dashboard routes.
//!
//! Requests under `/dashboard` must carry a session token, either in the
//! `token` cookie set at login or in one of the accepted auth headers.
//! Anything else is sent to `/login` before the page renders.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

const COOKIE_NAME: &str = "token";
const LOGIN_PATH: &str = "/login";
const PROTECTED_PREFIX: &str = "/dashboard";

/// Header fallbacks, checked in order after the cookie.
const TOKEN_HEADERS: [&str; 3] = ["authorization", "x-auth-token", "x-access-token"];

/// `/dashboard` itself and anything beneath it.
pub fn requires_session(path: &str) -> bool {
    path.strip_prefix(PROTECTED_PREFIX).is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Session token from the `token` cookie, else the first auth header present.
/// A `Bearer ` prefix is dropped; blank values count as absent.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_owned());
        }
    }

    let raw = TOKEN_HEADERS
        .iter()
        .find_map(|name| headers.get(*name).and_then(|v| v.to_str().ok()).filter(|v| !v.is_empty()))?;
    let token = match raw.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => &raw[7..],
        _ => raw,
    }
    .trim();
    (!token.is_empty()).then(|| token.to_owned())
}

pub async fn require_session(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if requires_session(path) && extract_token(request.headers()).is_none() {
        tracing::debug!(%path, "no session token; redirecting to login");
        return Redirect::temporary(LOGIN_PATH).into_response();
    }
    next.run(request).await
}
