//! Page-local state machines for forms, flows, and admin tables.
//!
//! Each module is plain data plus transitions so the logic is testable
//! natively. Pages wrap these in `RwSignal`s and drive the HTTP calls.

pub mod admin;
pub mod auth;
pub mod booking_form;
pub mod catalog;
pub mod profile;
pub mod register_form;
pub mod reset_flow;
