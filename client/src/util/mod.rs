//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod avatar;
pub mod format;
pub mod guard;
pub mod session;
pub mod timer;
pub mod validate;
