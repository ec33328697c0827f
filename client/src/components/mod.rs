//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form fields, navigation, and the dialogs shared by the customer pages and
//! the admin console. Components receive state signals and callbacks from
//! their page; none of them talk to the backend directly.

pub mod booking_details_modal;
pub mod confirm_dialog;
pub mod password_field;
pub mod status_select;
pub mod text_field;
pub mod top_nav;
pub mod user_modal;
