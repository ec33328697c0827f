//! Browser session persistence: bearer token, role, and cached user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in `localStorage["token"]` and in a `token` cookie so the
//! server-side route guard can see it. Reads always go to storage so a login
//! or logout in another view is picked up by the next request.
//!
//! TRADE-OFFS
//! ==========
//! Storage is browser-only; SSR and native tests see an empty session and
//! every write is a no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{LoginResult, User};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const USER_KEY: &str = "user";
pub const EMAIL_KEY: &str = "email";
pub const ADMIN_ROLE: &str = "admin";

// =============================================================================
// PURE HELPERS
// =============================================================================

/// `document.cookie` assignment that stores the session token site-wide.
#[must_use]
pub fn session_cookie(token: &str) -> String {
    format!("{TOKEN_KEY}={token}; path=/")
}

/// `document.cookie` assignment that expires the session token.
#[must_use]
pub fn expired_session_cookie() -> String {
    format!("{TOKEN_KEY}=; Max-Age=0; path=/")
}

/// Look up `name` in a `document.cookie` style string.
#[must_use]
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_owned())
    })
}

/// Overlay the populated fields of `update` onto `base`.
#[must_use]
pub fn merge_user(base: Option<User>, update: &User) -> User {
    let mut merged = base.unwrap_or_default();
    let pick = |slot: &mut Option<String>, incoming: &Option<String>| {
        if incoming.is_some() {
            slot.clone_from(incoming);
        }
    };
    if !update.id.is_empty() {
        merged.id.clone_from(&update.id);
    }
    pick(&mut merged.email, &update.email);
    pick(&mut merged.first_name, &update.first_name);
    pick(&mut merged.last_name, &update.last_name);
    pick(&mut merged.full_name, &update.full_name);
    pick(&mut merged.mobile_number, &update.mobile_number);
    pick(&mut merged.gender, &update.gender);
    pick(&mut merged.address, &update.address);
    pick(&mut merged.avatar_url, &update.avatar_url);
    pick(&mut merged.role, &update.role);
    pick(&mut merged.created_at, &update.created_at);
    merged
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// STORAGE ACCESS
// =============================================================================

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        non_blank(storage()?.get_item(key).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        non_blank(None)
    }
}

fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

fn write_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        let doc = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
        if let Some(doc) = doc {
            let _ = doc.set_cookie(assignment);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}

fn read_cookies() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

// =============================================================================
// SESSION API
// =============================================================================

/// Bearer token from local storage, read fresh on every call.
pub fn token() -> Option<String> {
    get_item(TOKEN_KEY)
}

/// Token from the cookie, falling back to local storage.
pub fn token_from_cookie_or_storage() -> Option<String> {
    read_cookies()
        .and_then(|raw| cookie_value(&raw, TOKEN_KEY))
        .or_else(token)
}

pub fn role() -> Option<String> {
    get_item(ROLE_KEY)
}

/// Email remembered for an admin login, shown in the console header.
pub fn admin_email() -> Option<String> {
    get_item(EMAIL_KEY)
}

pub fn is_admin() -> bool {
    role().is_some_and(|r| r == ADMIN_ROLE)
}

/// Cached copy of the signed-in user, if any and if it still parses.
pub fn cached_user() -> Option<User> {
    let raw = get_item(USER_KEY)?;
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(value) => Some(User::from_value(&value)),
        Err(_) => {
            remove_item(USER_KEY);
            None
        }
    }
}

/// Merge `update` into the cached user and persist the result.
pub fn persist_user(update: &User) -> User {
    let merged = merge_user(cached_user(), update);
    write_user(&merged);
    merged
}

/// Drop the avatar from the cached user after it was deleted server-side.
pub fn clear_cached_avatar() {
    if let Some(mut user) = cached_user() {
        user.avatar_url = None;
        write_user(&user);
    }
}

fn write_user(user: &User) {
    if let Ok(raw) = serde_json::to_string(user) {
        set_item(USER_KEY, &raw);
    }
}

/// Persist everything a successful login returned.
pub fn store_login(result: &LoginResult, email: &str) {
    if let Some(token) = &result.token {
        set_item(TOKEN_KEY, token);
        write_cookie(&session_cookie(token));
    }
    if result.is_admin() {
        set_item(ROLE_KEY, ADMIN_ROLE);
        set_item(EMAIL_KEY, email);
    } else {
        remove_item(ROLE_KEY);
    }
    if let Some(user) = &result.user {
        persist_user(user);
    }
}

/// Forget the session everywhere it is kept.
pub fn clear() {
    for key in [TOKEN_KEY, ROLE_KEY, USER_KEY, EMAIL_KEY] {
        remove_item(key);
    }
    write_cookie(&expired_session_cookie());
}
