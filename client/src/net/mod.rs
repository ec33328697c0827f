//! Networking modules for the FloorEase REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds and sends requests, `endpoints` names the backend routes,
//! `error` classifies failures, and `types` defines the wire records.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod types;
