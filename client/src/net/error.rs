//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every REST helper returns `Result<_, ApiError>`. Pages never inspect raw
//! responses; they pick a user-facing string with [`ApiError::message_or`]
//! and special-case [`ApiError::Unauthorized`] where a login redirect is due.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Message shown when nothing more specific is available.
pub const GENERIC_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No HTTP response was received.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend rejected the request (non-2xx or `success: false`).
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The backend answered 401; the stored session is no longer valid.
    #[error("{message}")]
    Unauthorized { message: String },
    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, or 0 when no response was received.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Rejected { status, .. } => *status,
            Self::Unauthorized { .. } => 401,
            Self::Transport(_) | Self::Decode(_) => 0,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Server-provided message when there is one, else `fallback`.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } | Self::Unauthorized { message } if !message.is_empty() => {
                message.clone()
            }
            _ => fallback.to_owned(),
        }
    }

    /// Classify a non-2xx response from its status and (possibly empty) body.
    #[must_use]
    pub fn from_status(status: u16, body: Option<&Value>) -> Self {
        let message = body.and_then(body_message).unwrap_or_default();
        if status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Rejected { status, message }
        }
    }
}

/// Extract a human-readable message from a response body: `message`, then
/// `error`, then a bare JSON string.
#[must_use]
pub fn body_message(body: &Value) -> Option<String> {
    let pick = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };
    pick("message")
        .or_else(|| pick("error"))
        .or_else(|| body.as_str().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned))
}

/// `Err` when a 2xx body carries `success: false`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the body message when the backend
/// reports a business failure inside a successful HTTP response.
pub fn check_success(status: u16, body: &Value) -> Result<(), ApiError> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Rejected { status, message: body_message(body).unwrap_or_default() });
    }
    Ok(())
}

/// Best user-facing text for any error: server message, transport text, or
/// the generic fallback.
#[must_use]
pub fn display_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(text) if !text.is_empty() => text.clone(),
        other => other.message_or(GENERIC_MESSAGE),
    }
}
