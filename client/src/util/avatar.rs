//! Avatar URL and initials helpers.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use crate::config::{api_base_url, join_url};
use crate::net::types::User;

const FALLBACK_INITIAL: &str = "U";
const GENERATED_AVATAR_BASE: &str = "https://ui-avatars.com/api/";

/// Absolute URLs pass through; backend-relative paths are joined onto `base`.
pub fn resolve_avatar_url_with(base: &str, url: Option<&str>) -> Option<String> {
    let url = url.map(str::trim).filter(|u| !u.is_empty())?;
    if url.starts_with("http") || url.starts_with("blob:") || url.starts_with("data:") {
        return Some(url.to_owned());
    }
    Some(join_url(base, url))
}

/// [`resolve_avatar_url_with`] against the configured backend.
pub fn resolve_avatar_url(url: Option<&str>) -> Option<String> {
    resolve_avatar_url_with(api_base_url(), url)
}

/// Up to two uppercase initials from whitespace-separated name parts.
pub fn name_initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Initials for a user: first/last name, else the email's first letter, else `U`.
pub fn user_initials(user: &User) -> String {
    let name = format!(
        "{} {}",
        user.first_name.as_deref().unwrap_or_default(),
        user.last_name.as_deref().unwrap_or_default()
    );
    let initials = name_initials(&name);
    if !initials.is_empty() {
        return initials;
    }
    user.email
        .as_deref()
        .and_then(|e| e.chars().next())
        .map_or_else(|| FALLBACK_INITIAL.to_owned(), |c| c.to_uppercase().collect())
}

/// Generated placeholder avatar for users without an uploaded image.
pub fn generate_avatar_url(name: &str, size: u32) -> String {
    format!(
        "{GENERATED_AVATAR_BASE}?name={}&size={size}&background=0ea5b7&color=ffffff",
        encode_component(name)
    )
}

/// Percent-encode everything outside the URI unreserved set.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}
