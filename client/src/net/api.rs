//! REST client for the FloorEase backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: requests are still built, but sending
//! fails with [`ApiError::Transport`] since the backend is only reachable
//! from the browser.
//!
//! DESIGN
//! ======
//! Every call goes through [`ApiRequest::build`], which applies the JSON
//! content type and attaches `Authorization: Bearer <token>` when a token is
//! passed in. [`call`] reads the token from storage at call time so a fresh
//! login is picked up without rebuilding any client.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses and 2xx bodies with `success: false` both become
//! [`ApiError`]s carrying the backend's message. Callers decide the
//! user-facing fallback text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::Value;

use super::endpoints;
use super::error::ApiError;
use super::types::{
    Booking, BookingRequest, BookingStatus, ForgotPasswordRequest, LoginRequest, LoginResult, ProfileUpdate,
    RegisterRequest, ResetPasswordRequest, StatusUpdate, User, VerifyOtpRequest, resolve_list, success_message,
};
use crate::config::{api_base_url, join_url};
use crate::util::session;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_MIME: &str = "application/json";

/// HTTP verbs used against the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully prepared request: absolute URL, headers, serialized JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Build a request against the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn build<B: Serialize>(
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<Self, ApiError> {
        let body = body
            .map(|b| serde_json::to_string(b).map_err(|e| ApiError::Decode(e.to_string())))
            .transpose()?;
        let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_MIME.to_owned())];
        headers.extend(auth_header(token));
        Ok(Self { method, url: join_url(api_base_url(), path), headers, body })
    }

    /// Header value for `name`, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// `Authorization` header for a stored token; nothing for a missing or blank one.
#[must_use]
pub fn auth_header(token: Option<&str>) -> Option<(String, String)> {
    let token = token.map(str::trim).filter(|t| !t.is_empty())?;
    Some((AUTHORIZATION.to_owned(), format!("Bearer {token}")))
}

/// Parse a response body; an empty body is `null`.
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Classify a received response into the verbatim body or an error.
///
/// # Errors
///
/// Returns an [`ApiError`] for non-2xx statuses, `success: false` bodies, or
/// undecodable 2xx bodies.
pub fn interpret_response(status: u16, text: &str) -> Result<Value, ApiError> {
    let ok = (200..300).contains(&status);
    if !ok {
        let body = parse_body(text).ok();
        let body = body.or_else(|| (!text.trim().is_empty()).then(|| Value::String(text.trim().to_owned())));
        return Err(ApiError::from_status(status, body.as_ref()));
    }
    let body = parse_body(text)?;
    super::error::check_success(status, &body)?;
    Ok(body)
}

/// Send a prepared request.
///
/// # Errors
///
/// Returns [`ApiError::Transport`] when no response arrives, otherwise the
/// classification from [`interpret_response`].
pub async fn send(request: ApiRequest) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Method, RequestBuilder};

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        };
        let mut builder = RequestBuilder::new(&request.url)
            .method(method)
            .credentials(web_sys::RequestCredentials::Include);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let result = interpret_response(status, &text);
        if let Err(err) = &result {
            leptos::logging::warn!("{} {} failed: {err}", request.method.as_str(), request.url);
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Build with the current session token and send.
///
/// # Errors
///
/// See [`send`].
pub async fn call<B: Serialize>(method: HttpMethod, path: &str, body: Option<&B>) -> Result<Value, ApiError> {
    let token = session::token();
    let request = ApiRequest::build(method, path, body, token.as_deref())?;
    send(request).await
}

/// `call` for requests without a body.
async fn call_empty(method: HttpMethod, path: &str) -> Result<Value, ApiError> {
    call::<()>(method, path, None).await
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn login(request: &LoginRequest) -> Result<LoginResult, ApiError> {
    let body = call(HttpMethod::Post, endpoints::AUTH_LOGIN, Some(request)).await?;
    Ok(LoginResult::from_value(&body))
}

/// `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn register(request: &RegisterRequest) -> Result<Option<String>, ApiError> {
    let body = call(HttpMethod::Post, endpoints::AUTH_REGISTER, Some(request)).await?;
    Ok(success_message(&body))
}

/// `POST /api/auth/forgot-password`; returns the server's message, if any.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn request_password_reset(request: &ForgotPasswordRequest) -> Result<Option<String>, ApiError> {
    let body = call(HttpMethod::Post, endpoints::AUTH_FORGOT_PASSWORD, Some(request)).await?;
    Ok(success_message(&body))
}

/// `POST /api/auth/verify-reset-otp`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn verify_reset_otp(request: &VerifyOtpRequest) -> Result<Option<String>, ApiError> {
    let body = call(HttpMethod::Post, endpoints::AUTH_VERIFY_RESET_OTP, Some(request)).await?;
    Ok(success_message(&body))
}

/// `POST /api/auth/reset-password`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<Option<String>, ApiError> {
    let body = call(HttpMethod::Post, endpoints::AUTH_RESET_PASSWORD, Some(request)).await?;
    Ok(success_message(&body))
}

// =============================================================================
// PROFILE
// =============================================================================

/// `GET /api/auth/me`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn fetch_me() -> Result<User, ApiError> {
    let body = call_empty(HttpMethod::Get, endpoints::AUTH_ME).await?;
    Ok(User::from_value(&body))
}

/// `PUT /api/auth/me`; returns the updated user as echoed by the backend.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn update_me(update: &ProfileUpdate) -> Result<User, ApiError> {
    let body = call(HttpMethod::Put, endpoints::AUTH_ME, Some(update)).await?;
    Ok(User::from_value(&body))
}

/// `POST /api/auth/avatar` as multipart with field `avatar`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
#[cfg(feature = "hydrate")]
pub async fn upload_avatar(file: &web_sys::File) -> Result<Option<User>, ApiError> {
    use gloo_net::http::RequestBuilder;

    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("form data unavailable".to_owned()))?;
    form.append_with_blob("avatar", file)
        .map_err(|_| ApiError::Transport("could not attach file".to_owned()))?;

    let url = join_url(api_base_url(), endpoints::AUTH_AVATAR);
    let mut builder = RequestBuilder::new(&url)
        .method(gloo_net::http::Method::POST)
        .credentials(web_sys::RequestCredentials::Include);
    if let Some((name, value)) = auth_header(session::token().as_deref()) {
        builder = builder.header(&name, &value);
    }
    let resp = builder
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let body = interpret_response(status, &text)?;
    Ok(user_in(&body))
}

/// `DELETE /api/auth/avatar`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn delete_avatar() -> Result<Option<User>, ApiError> {
    let body = call_empty(HttpMethod::Delete, endpoints::AUTH_AVATAR).await?;
    Ok(user_in(&body))
}

/// The `user` record of an avatar response, if it carried one.
fn user_in(body: &Value) -> Option<User> {
    body.get("user").filter(|u| u.is_object()).map(User::from_value)
}

// =============================================================================
// BOOKINGS
// =============================================================================

/// `POST /api/bookings`; returns the raw body so the caller can prefer the
/// server's echo of the booking.
///
/// # Errors
///
/// Returns the backend's rejection (401 as [`ApiError::Unauthorized`]) or a
/// transport error.
pub async fn create_booking(request: &BookingRequest) -> Result<Value, ApiError> {
    call(HttpMethod::Post, endpoints::BOOKINGS, Some(request)).await
}

/// Decode an admin booking list, dropping rows without an id.
#[must_use]
pub fn bookings_from(payload: &Value) -> Vec<Booking> {
    resolve_list(payload, "bookings")
        .iter()
        .map(Booking::from_value)
        .filter(|b| !b.id.is_empty())
        .collect()
}

/// Decode an admin user list, dropping rows without an id.
#[must_use]
pub fn users_from(payload: &Value) -> Vec<User> {
    resolve_list(payload, "users")
        .iter()
        .map(User::from_value)
        .filter(|u| !u.id.is_empty())
        .collect()
}

/// `GET /api/bookings/admin`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn list_admin_bookings() -> Result<Vec<Booking>, ApiError> {
    let body = call_empty(HttpMethod::Get, endpoints::ADMIN_BOOKINGS).await?;
    Ok(bookings_from(&body))
}

/// `GET /api/bookings/admin/:id`; raw detail payload for merging.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn fetch_admin_booking(id: &str) -> Result<Value, ApiError> {
    call_empty(HttpMethod::Get, &endpoints::admin_booking(id)).await
}

/// `PATCH /api/bookings/admin/:id/status`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn update_booking_status(id: &str, status: &BookingStatus) -> Result<(), ApiError> {
    let body = StatusUpdate { status: status.clone() };
    call(HttpMethod::Patch, &endpoints::admin_booking_status(id), Some(&body)).await?;
    Ok(())
}

/// `DELETE /api/bookings/admin/:id`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn delete_booking(id: &str) -> Result<(), ApiError> {
    call_empty(HttpMethod::Delete, &endpoints::admin_booking(id)).await?;
    Ok(())
}

// =============================================================================
// ADMIN USERS
// =============================================================================

/// `GET /api/admin/users`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    let body = call_empty(HttpMethod::Get, endpoints::ADMIN_USERS).await?;
    Ok(users_from(&body))
}

/// `GET /api/admin/users/:id`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn fetch_user(id: &str) -> Result<User, ApiError> {
    let body = call_empty(HttpMethod::Get, &endpoints::admin_user(id)).await?;
    if body.is_null() {
        return Err(ApiError::Decode("User details unavailable".to_owned()));
    }
    Ok(User::from_value(&body))
}

/// `PUT /api/admin/users/:id`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn update_user(id: &str, update: &ProfileUpdate) -> Result<User, ApiError> {
    let body = call(HttpMethod::Put, &endpoints::admin_user(id), Some(update)).await?;
    Ok(User::from_value(&body))
}

/// `DELETE /api/admin/users/:id`.
///
/// # Errors
///
/// Returns the backend's rejection or a transport error.
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    call_empty(HttpMethod::Delete, &endpoints::admin_user(id)).await?;
    Ok(())
}
