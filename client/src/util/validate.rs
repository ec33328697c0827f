//! Form field validators and input normalizers.
//!
//! Every validator returns the user-facing message, or an empty string when
//! the value is acceptable. Forms store the result per field and block submit
//! while any message is non-empty.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"));
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("static regex"));
static BOOKING_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+977)?[0-9]{10}$").expect("static regex"));

pub const OTP_LEN: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 8;
const MOBILE_MAX_DIGITS: usize = 10;

// =============================================================================
// REGISTRATION FIELDS
// =============================================================================

pub fn validate_full_name(value: &str) -> String {
    if value.trim().chars().count() < 2 {
        return "Full name must be at least 2 characters long".to_owned();
    }
    String::new()
}

/// Empty is allowed; otherwise whitespace is ignored and the digits must form
/// an optionally `+`-prefixed number of at most 16 digits not starting with 0.
pub fn validate_mobile(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if MOBILE_RE.is_match(&compact) {
        String::new()
    } else {
        "Please enter a valid mobile number".to_owned()
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_email(value: &str) -> String {
    if is_valid_email(value) {
        String::new()
    } else {
        "Please enter a valid email address".to_owned()
    }
}

/// Length first, then character classes.
pub fn validate_password(value: &str) -> String {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return "Password must be at least 8 characters long".to_owned();
    }
    let lower = value.chars().any(|c| c.is_ascii_lowercase());
    let upper = value.chars().any(|c| c.is_ascii_uppercase());
    let digit = value.chars().any(|c| c.is_ascii_digit());
    if lower && upper && digit {
        String::new()
    } else {
        "Password must contain uppercase, lowercase, and number".to_owned()
    }
}

/// Group digits `3 3 4`, dropping everything else and anything past ten digits.
pub fn format_mobile(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(MOBILE_MAX_DIGITS).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("{} {}", &digits[..3], &digits[3..]),
        _ => format!("{} {} {}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

// =============================================================================
// PASSWORD RESET FIELDS
// =============================================================================

pub fn validate_otp(value: &str) -> String {
    if value.len() == OTP_LEN && value.bytes().all(|b| b.is_ascii_digit()) {
        String::new()
    } else {
        "OTP must be 6 digits".to_owned()
    }
}

/// OTP field as typed: digits only, at most six.
pub fn normalize_otp_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect()
}

pub fn validate_reset_email(value: &str) -> String {
    if value.trim().is_empty() {
        return "Please enter your email address".to_owned();
    }
    validate_email(value)
}

pub fn validate_reset_otp(value: &str) -> String {
    if value.trim().is_empty() {
        return "Please enter the OTP".to_owned();
    }
    validate_otp(value)
}

/// Which reset-password field a failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetField {
    NewPassword,
    ConfirmPassword,
}

/// First failing rule across the new/confirm pair, if any.
pub fn validate_reset_passwords(new_password: &str, confirm: &str) -> Option<(ResetField, &'static str)> {
    if new_password.trim().is_empty() {
        return Some((ResetField::NewPassword, "Please enter a new password"));
    }
    if new_password.chars().count() < MIN_PASSWORD_LEN {
        return Some((ResetField::NewPassword, "Password must be at least 8 characters"));
    }
    if confirm.trim().is_empty() {
        return Some((ResetField::ConfirmPassword, "Please confirm your password"));
    }
    if new_password != confirm {
        return Some((ResetField::ConfirmPassword, "Passwords do not match"));
    }
    None
}

// =============================================================================
// BOOKING FIELDS
// =============================================================================

/// Local number of ten digits, optionally prefixed with `+977`.
pub fn is_valid_booking_phone(value: &str) -> bool {
    BOOKING_PHONE_RE.is_match(value.trim())
}
