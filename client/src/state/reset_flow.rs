//! Forgot-password flow: email → OTP → new password → success.
//!
//! DESIGN
//! ======
//! The page drives this struct through `begin_*` / `finish_*` pairs. A
//! `begin_*` call validates the current step's fields and, when they pass,
//! marks the flow busy and returns the request body to send. The matching
//! `finish_*` call applies the outcome. Keeping the transitions here lets the
//! whole flow be tested without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures never move the flow backwards or forwards. The server's message
//! is shown when present, otherwise a per-step default.

#[cfg(test)]
#[path = "reset_flow_test.rs"]
mod reset_flow_test;

use crate::net::error::ApiError;
use crate::net::types::{ForgotPasswordRequest, ResetPasswordRequest, VerifyOtpRequest};
use crate::util::validate::{self, ResetField};

/// Seconds before another OTP may be requested.
pub const RESEND_COOLDOWN_SECS: u32 = 60;
/// Delay before leaving the success screen for `/login`.
pub const SUCCESS_REDIRECT_MS: u64 = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Email,
    Otp,
    Reset,
    Success,
}

/// Per-field validation messages; empty means no error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: String,
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Default)]
pub struct ResetFlow {
    pub step: Step,
    pub email: String,
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
    pub show_new_password: bool,
    pub show_confirm_password: bool,
    pub field_errors: FieldErrors,
    pub error: String,
    pub info: String,
    pub loading: bool,
    pub cooldown: u32,
}

impl ResetFlow {
    pub fn subtitle(&self) -> &'static str {
        match self.step {
            Step::Email => "Enter your email address and we'll send a 6-digit OTP to reset your password.",
            Step::Otp => "Enter the 6-digit OTP sent to your email to verify your request.",
            Step::Reset => "Create a new password for your account.",
            Step::Success => "Your password has been reset successfully.",
        }
    }

    fn clear_messages(&mut self) {
        self.error.clear();
        self.info.clear();
    }

    // ===== FIELD EDITS =====

    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.field_errors.email.clear();
        self.clear_messages();
    }

    /// Stores the OTP as typed after stripping non-digits and truncating.
    pub fn set_otp(&mut self, raw: &str) {
        self.otp = validate::normalize_otp_input(raw);
        self.field_errors.otp.clear();
        self.clear_messages();
    }

    pub fn set_new_password(&mut self, value: String) {
        self.new_password = value;
        self.field_errors.new_password.clear();
        self.clear_messages();
    }

    pub fn set_confirm_password(&mut self, value: String) {
        self.confirm_password = value;
        self.field_errors.confirm_password.clear();
        self.clear_messages();
    }

    // ===== STEP: EMAIL =====

    pub fn begin_submit_email(&mut self) -> Option<ForgotPasswordRequest> {
        if self.loading {
            return None;
        }
        self.clear_messages();
        let message = validate::validate_reset_email(&self.email);
        if !message.is_empty() {
            self.field_errors.email = message;
            return None;
        }
        self.loading = true;
        Some(ForgotPasswordRequest { email: self.email.clone() })
    }

    pub fn finish_submit_email(&mut self, result: Result<Option<String>, ApiError>) {
        self.loading = false;
        match result {
            Ok(message) => {
                self.info = message.unwrap_or_else(|| "OTP sent to email".to_owned());
                self.step = Step::Otp;
                self.cooldown = RESEND_COOLDOWN_SECS;
                self.otp.clear();
            }
            Err(err) => self.error = err.message_or("Failed to send OTP"),
        }
    }

    // ===== STEP: OTP =====

    pub fn can_resend(&self) -> bool {
        self.step == Step::Otp && self.cooldown == 0 && !self.loading
    }

    pub fn resend_label(&self) -> String {
        if self.cooldown > 0 {
            format!("Resend OTP in {}s", self.cooldown)
        } else {
            "Resend OTP".to_owned()
        }
    }

    pub fn begin_resend(&mut self) -> Option<ForgotPasswordRequest> {
        if !self.can_resend() {
            return None;
        }
        self.clear_messages();
        self.loading = true;
        Some(ForgotPasswordRequest { email: self.email.clone() })
    }

    pub fn finish_resend(&mut self, result: Result<Option<String>, ApiError>) {
        self.loading = false;
        match result {
            Ok(message) => {
                self.info = message.unwrap_or_else(|| "OTP sent to email".to_owned());
                self.cooldown = RESEND_COOLDOWN_SECS;
            }
            Err(err) => self.error = err.message_or("Failed to resend OTP"),
        }
    }

    pub fn begin_verify(&mut self) -> Option<VerifyOtpRequest> {
        if self.loading {
            return None;
        }
        self.clear_messages();
        let message = validate::validate_reset_otp(&self.otp);
        if !message.is_empty() {
            self.field_errors.otp = message;
            return None;
        }
        self.loading = true;
        Some(VerifyOtpRequest { email: self.email.clone(), otp: self.otp.clone() })
    }

    pub fn finish_verify(&mut self, result: Result<Option<String>, ApiError>) {
        self.loading = false;
        match result {
            Ok(message) => {
                self.info = message.unwrap_or_else(|| "OTP verified successfully".to_owned());
                self.step = Step::Reset;
            }
            Err(err) => {
                // A 2xx `success: false` is the server refusing the code.
                let fallback = if (200..300).contains(&err.status()) {
                    "Invalid or expired OTP"
                } else {
                    "OTP verification failed"
                };
                self.error = err.message_or(fallback);
            }
        }
    }

    /// Back to the email step; the entered email is kept for editing.
    pub fn change_email(&mut self) {
        self.step = Step::Email;
        self.clear_messages();
    }

    /// One second of cooldown; never goes below zero.
    pub fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    // ===== STEP: RESET =====

    pub fn begin_reset(&mut self) -> Option<ResetPasswordRequest> {
        if self.loading {
            return None;
        }
        self.clear_messages();
        if let Some((field, message)) = validate::validate_reset_passwords(&self.new_password, &self.confirm_password) {
            match field {
                ResetField::NewPassword => self.field_errors.new_password = message.to_owned(),
                ResetField::ConfirmPassword => self.field_errors.confirm_password = message.to_owned(),
            }
            return None;
        }
        self.loading = true;
        Some(ResetPasswordRequest {
            email: self.email.clone(),
            new_password: self.new_password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }

    pub fn finish_reset(&mut self, result: Result<Option<String>, ApiError>) {
        self.loading = false;
        match result {
            Ok(message) => {
                self.info = message.unwrap_or_else(|| "Password reset successful".to_owned());
                self.step = Step::Success;
            }
            Err(err) => self.error = err.message_or("Password reset failed"),
        }
    }
}
