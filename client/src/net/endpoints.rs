//! Backend route table.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

pub const AUTH_REGISTER: &str = "/api/auth/register";
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_FORGOT_PASSWORD: &str = "/api/auth/forgot-password";
pub const AUTH_VERIFY_RESET_OTP: &str = "/api/auth/verify-reset-otp";
pub const AUTH_RESET_PASSWORD: &str = "/api/auth/reset-password";
pub const AUTH_ME: &str = "/api/auth/me";
pub const AUTH_AVATAR: &str = "/api/auth/avatar";

pub const BOOKINGS: &str = "/api/bookings";
pub const ADMIN_BOOKINGS: &str = "/api/bookings/admin";
pub const ADMIN_USERS: &str = "/api/admin/users";

#[must_use]
pub fn admin_booking(id: &str) -> String {
    format!("{ADMIN_BOOKINGS}/{id}")
}

#[must_use]
pub fn admin_booking_status(id: &str) -> String {
    format!("{ADMIN_BOOKINGS}/{id}/status")
}

#[must_use]
pub fn admin_user(id: &str) -> String {
    format!("{ADMIN_USERS}/{id}")
}
