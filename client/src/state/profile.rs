//! Profile editor state: personal fields, phone prefix handling, avatar.
//!
//! DESIGN
//! ======
//! The backend stores the phone as `"<prefix> <number>"`. The editor splits
//! it into a country select value and the local number, and joins them back
//! on save. Nepal's option value is `NP` in the select and `+977` on the wire.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::error::ApiError;
use crate::net::types::{ProfileUpdate, User};
use crate::util::avatar;

static PREFIXED_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+[0-9]+)\s+(.*)$").expect("static regex"));

pub const DEFAULT_COUNTRY: &str = "+1";
const NEPAL_OPTION: &str = "NP";
const NEPAL_PREFIX: &str = "+977";

/// Country select options as `(value, label)`.
pub const COUNTRY_OPTIONS: [(&str, &str); 5] = [
    ("+1", "🇺🇸 +1"),
    ("+44", "🇬🇧 +44"),
    ("+91", "🇮🇳 +91"),
    ("+61", "🇦🇺 +61"),
    (NEPAL_OPTION, "🇳🇵 +977"),
];

pub fn country_to_prefix(value: &str) -> &str {
    if value == NEPAL_OPTION { NEPAL_PREFIX } else { value }
}

pub fn prefix_to_country(value: &str) -> &str {
    if value == NEPAL_PREFIX { NEPAL_OPTION } else { value }
}

/// Split a stored phone into `(country option, local number)`. Numbers
/// without a recognisable prefix keep `current_country`.
pub fn split_phone(stored: &str, current_country: &str) -> (String, String) {
    let trimmed = stored.trim();
    match PREFIXED_PHONE_RE.captures(trimmed) {
        Some(caps) => (prefix_to_country(&caps[1]).to_owned(), caps[2].to_owned()),
        None => (current_country.to_owned(), stored.to_owned()),
    }
}

/// Join for the wire: empty stays empty, `+`-prefixed input is kept as is.
pub fn join_phone(country: &str, number: &str) -> String {
    let trimmed = number.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('+') {
        return trimmed.to_owned();
    }
    format!("{} {trimmed}", country_to_prefix(country))
}

/// Initials for the avatar fallback: first letters of first and last name.
pub fn profile_initials(first_name: &str, last_name: &str) -> String {
    let initials: String = [first_name, last_name]
        .iter()
        .filter_map(|n| n.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() { "U".to_owned() } else { initials }
}

#[derive(Clone, Debug)]
pub struct ProfileEditor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub mobile_number: String,
    pub gender: String,
    pub address: String,
    pub avatar_url: Option<String>,
    /// Local object URL or resolved server URL shown ahead of `avatar_url`.
    pub avatar_preview: Option<String>,
    pub saving: bool,
    pub uploading: bool,
    pub success: String,
    pub error: String,
    /// Replaced `blob:` previews waiting to be revoked.
    released: Vec<String>,
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            country: DEFAULT_COUNTRY.to_owned(),
            mobile_number: String::new(),
            gender: String::new(),
            address: String::new(),
            avatar_url: None,
            avatar_preview: None,
            saving: false,
            uploading: false,
            success: String::new(),
            error: String::new(),
            released: Vec::new(),
        }
    }
}

impl ProfileEditor {
    pub fn fill_from(&mut self, user: &User) {
        self.first_name = user.first_name.clone().unwrap_or_default();
        self.last_name = user.last_name.clone().unwrap_or_default();
        self.email = user.email.clone().unwrap_or_default();
        self.gender = user.gender.clone().unwrap_or_default();
        self.address = user.address.clone().unwrap_or_default();
        self.avatar_url.clone_from(&user.avatar_url);
        match user.mobile_number.as_deref().filter(|p| !p.is_empty()) {
            Some(phone) => {
                let (country, number) = split_phone(phone, &self.country);
                self.country = country;
                self.mobile_number = number;
            }
            None => self.mobile_number.clear(),
        }
    }

    pub fn initials(&self) -> String {
        profile_initials(&self.first_name, &self.last_name)
    }

    /// Preview first, then the stored avatar resolved against the backend.
    pub fn display_avatar(&self) -> Option<String> {
        self.avatar_preview
            .clone()
            .or_else(|| avatar::resolve_avatar_url(self.avatar_url.as_deref()))
    }

    fn clear_messages(&mut self) {
        self.success.clear();
        self.error.clear();
    }

    // ===== SAVE =====

    pub fn begin_save(&mut self) -> Option<ProfileUpdate> {
        if self.saving {
            return None;
        }
        self.clear_messages();
        self.saving = true;
        Some(self.update_body())
    }

    pub fn update_body(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            mobile_number: join_phone(&self.country, &self.mobile_number),
            gender: self.gender.clone(),
            address: self.address.trim().to_owned(),
        }
    }

    /// On success returns the user record to persist: the server echo when it
    /// carried one, else what was sent.
    pub fn finish_save(&mut self, sent: &ProfileUpdate, result: Result<User, ApiError>) -> Option<User> {
        self.saving = false;
        match result {
            Ok(echo) => {
                let user = if echo == User::default() {
                    User {
                        first_name: Some(sent.first_name.clone()),
                        last_name: Some(sent.last_name.clone()),
                        mobile_number: Some(sent.mobile_number.clone()),
                        gender: Some(sent.gender.clone()),
                        address: Some(sent.address.clone()),
                        ..User::default()
                    }
                } else {
                    self.fill_from(&echo);
                    echo
                };
                self.success = "Profile updated successfully".to_owned();
                Some(user)
            }
            Err(err) => {
                self.error = err.message_or("Unable to update profile.");
                None
            }
        }
    }

    // ===== AVATAR =====

    fn set_preview(&mut self, next: Option<String>) {
        if let Some(old) = self.avatar_preview.take() {
            if old.starts_with("blob:") && next.as_deref() != Some(old.as_str()) {
                self.released.push(old);
            }
        }
        self.avatar_preview = next;
    }

    /// Object URLs no longer shown; the caller revokes them.
    pub fn take_released(&mut self) -> Vec<String> {
        std::mem::take(&mut self.released)
    }

    /// Everything to revoke when the page goes away, current preview included.
    pub fn release_all(&mut self) -> Vec<String> {
        self.set_preview(None);
        self.take_released()
    }

    /// Show the chosen file immediately; the upload result replaces it.
    /// Refused while another avatar request is running.
    pub fn begin_upload(&mut self, preview_url: String) -> bool {
        if self.uploading {
            return false;
        }
        self.clear_messages();
        self.set_preview(Some(preview_url));
        self.uploading = true;
        true
    }

    pub fn finish_upload(&mut self, result: Result<Option<User>, ApiError>) -> Option<User> {
        self.uploading = false;
        match result {
            Ok(user) => {
                let url = user.as_ref().and_then(|u| u.avatar_url.clone());
                self.set_preview(avatar::resolve_avatar_url(url.as_deref()));
                self.avatar_url = url.clone();
                self.success = "Avatar updated successfully".to_owned();
                user.or_else(|| url.map(|u| User { avatar_url: Some(u), ..User::default() }))
            }
            Err(err) => {
                self.error = err.message_or("Unable to upload avatar.");
                None
            }
        }
    }

    pub fn begin_delete_avatar(&mut self) -> bool {
        if self.uploading {
            return false;
        }
        self.clear_messages();
        self.uploading = true;
        true
    }

    pub fn finish_delete_avatar(&mut self, result: Result<Option<User>, ApiError>) -> bool {
        self.uploading = false;
        match result {
            Ok(user) => {
                self.set_preview(None);
                self.avatar_url = user.and_then(|u| u.avatar_url);
                self.success = "Avatar deleted successfully".to_owned();
                true
            }
            Err(err) => {
                self.error = err.message_or("Unable to delete avatar.");
                false
            }
        }
    }

    /// Missing session when an avatar action starts.
    pub fn avatar_session_missing(&mut self, deleting: bool) {
        self.uploading = false;
        self.error = if deleting { "Unable to delete avatar." } else { "Unable to upload avatar." }.to_owned();
    }
}
