use super::*;
use serde_json::json;

// =============================================================================
// ApiRequest::build
// =============================================================================

#[test]
fn build_sets_bearer_header_when_token_present() {
    let req = ApiRequest::build::<()>(HttpMethod::Get, endpoints::AUTH_ME, None, Some("abc123")).unwrap();
    assert_eq!(req.header("authorization"), Some("Bearer abc123"));
    assert_eq!(req.header(CONTENT_TYPE), Some(JSON_MIME));
}

#[test]
fn build_omits_authorization_without_token() {
    let req = ApiRequest::build::<()>(HttpMethod::Get, endpoints::AUTH_ME, None, None).unwrap();
    assert_eq!(req.header(AUTHORIZATION), None);
    assert_eq!(req.headers.len(), 1);
}

#[test]
fn build_omits_authorization_for_blank_token() {
    let req = ApiRequest::build::<()>(HttpMethod::Get, endpoints::AUTH_ME, None, Some("   ")).unwrap();
    assert_eq!(req.header(AUTHORIZATION), None);
}

#[test]
fn build_joins_path_onto_base_url() {
    let req = ApiRequest::build::<()>(HttpMethod::Delete, &endpoints::admin_user("u1"), None, None).unwrap();
    assert_eq!(req.url, join_url(api_base_url(), "/api/admin/users/u1"));
    assert_eq!(req.method.as_str(), "DELETE");
    assert!(req.body.is_none());
}

#[test]
fn build_serializes_body_as_json() {
    let body = LoginRequest { email: "a@b.co".to_owned(), password: "secret".to_owned() };
    let req = ApiRequest::build(HttpMethod::Post, endpoints::AUTH_LOGIN, Some(&body), None).unwrap();
    let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, json!({"email": "a@b.co", "password": "secret"}));
}

#[test]
fn status_update_body_uses_lowercase_status() {
    let body = StatusUpdate { status: BookingStatus::Completed };
    let req = ApiRequest::build(HttpMethod::Patch, &endpoints::admin_booking_status("b1"), Some(&body), Some("t"))
        .unwrap();
    assert_eq!(req.body.as_deref(), Some(r#"{"status":"completed"}"#));
    assert!(req.url.ends_with("/api/bookings/admin/b1/status"));
}

#[test]
fn auth_header_trims_token() {
    assert_eq!(
        auth_header(Some(" tok ")),
        Some((AUTHORIZATION.to_owned(), "Bearer tok".to_owned()))
    );
    assert_eq!(auth_header(Some("")), None);
}

// =============================================================================
// interpret_response
// =============================================================================

#[test]
fn ok_response_returns_body() {
    let body = interpret_response(200, r#"{"message":"OTP sent"}"#).unwrap();
    assert_eq!(success_message(&body).as_deref(), Some("OTP sent"));
}

#[test]
fn empty_ok_response_is_null() {
    assert_eq!(interpret_response(204, "").unwrap(), Value::Null);
}

#[test]
fn non_2xx_carries_server_message() {
    let err = interpret_response(400, r#"{"message":"Invalid OTP"}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 400, message: "Invalid OTP".to_owned() });
}

#[test]
fn non_2xx_with_plain_text_body_uses_text() {
    let err = interpret_response(500, "boom").unwrap_err();
    assert_eq!(err.message_or("fallback"), "boom");
}

#[test]
fn unauthorized_maps_to_dedicated_variant() {
    let err = interpret_response(401, r#"{"error":"jwt expired"}"#).unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message_or("x"), "jwt expired");
}

#[test]
fn success_false_in_2xx_is_rejected() {
    let err = interpret_response(200, r#"{"success":false,"message":"Email not found"}"#).unwrap_err();
    assert_eq!(err.status(), 200);
    assert_eq!(err.message_or("x"), "Email not found");
}

#[test]
fn undecodable_2xx_is_decode_error() {
    assert!(matches!(interpret_response(200, "<html>"), Err(ApiError::Decode(_))));
}

// =============================================================================
// LIST DECODING
// =============================================================================

#[test]
fn bookings_from_drops_rows_without_id() {
    let payload = json!({"data": [
        {"_id": "b1", "fullName": "Ram"},
        {"fullName": "No id"},
        {"id": "b2"}
    ]});
    let ids: Vec<_> = bookings_from(&payload).into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["b1", "b2"]);
}

#[test]
fn users_from_accepts_named_key_or_bare_array() {
    let named = json!({"users": [{"_id": "u1", "email": "a@b.co"}]});
    assert_eq!(users_from(&named).len(), 1);
    let bare = json!([{"id": "u1"}, {"id": ""}]);
    assert_eq!(users_from(&bare).len(), 1);
    assert!(users_from(&json!({"message": "none"})).is_empty());
}

#[test]
fn user_in_reads_nested_user_only() {
    assert!(user_in(&json!({"message": "ok"})).is_none());
    let user = user_in(&json!({"user": {"_id": "u1", "avatarUrl": "/a.png"}})).unwrap();
    assert_eq!(user.avatar_url.as_deref(), Some("/a.png"));
}

// =============================================================================
// SSR FALLBACK
// =============================================================================

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn send_without_browser_is_transport_error() {
    let err = fetch_me().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), 0);
}
