//! Sign-up form state.
//!
//! Fields validate on blur and all together on submit; the request is only
//! built when every message is empty.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use crate::net::error::ApiError;
use crate::net::types::RegisterRequest;
use crate::util::validate;

pub const SIGNUP_SUCCESS: &str = "Signup successful ✅ Please login.";
/// Delay before the success message gives way to `/login`.
pub const SIGNUP_REDIRECT_MS: u64 = 1200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterField {
    FullName,
    Mobile,
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
}

impl RegisterErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.mobile.is_empty() && self.email.is_empty() && self.password.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub errors: RegisterErrors,
    pub loading: bool,
    pub success: String,
    pub error: String,
}

impl RegisterForm {
    /// Mobile input is reformatted as typed.
    pub fn set_mobile(&mut self, raw: &str) {
        self.mobile = validate::format_mobile(raw);
    }

    fn message_for(&self, field: RegisterField) -> String {
        match field {
            RegisterField::FullName => validate::validate_full_name(&self.full_name),
            RegisterField::Mobile => validate::validate_mobile(&self.mobile),
            RegisterField::Email => validate::validate_email(&self.email),
            RegisterField::Password => validate::validate_password(&self.password),
        }
    }

    pub fn blur(&mut self, field: RegisterField) {
        let message = self.message_for(field);
        match field {
            RegisterField::FullName => self.errors.full_name = message,
            RegisterField::Mobile => self.errors.mobile = message,
            RegisterField::Email => self.errors.email = message,
            RegisterField::Password => self.errors.password = message,
        }
    }

    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.loading {
            return None;
        }
        self.success.clear();
        self.error.clear();
        for field in [RegisterField::FullName, RegisterField::Mobile, RegisterField::Email, RegisterField::Password] {
            self.blur(field);
        }
        if !self.errors.is_empty() {
            return None;
        }
        self.loading = true;
        Some(RegisterRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            full_name: self.full_name.trim().to_owned(),
            mobile_number: self.mobile.chars().filter(|c| !c.is_whitespace()).collect(),
        })
    }

    /// Returns whether the account was created.
    pub fn finish_submit(&mut self, result: Result<Option<String>, ApiError>) -> bool {
        self.loading = false;
        match result {
            Ok(_) => {
                *self = Self { success: SIGNUP_SUCCESS.to_owned(), ..Self::default() };
                true
            }
            Err(err) => {
                self.error = err.message_or("Request failed");
                false
            }
        }
    }
}
