//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it holds a state machine from
//! `state` in a signal, runs the HTTP calls, and delegates rendering details
//! to `components`.

pub mod admin;
pub mod admin_bookings;
pub mod admin_users;
pub mod bookings;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod products;
pub mod profile;
pub mod register;
