use super::*;
use serde_json::json;

// =============================================================
// List resolution
// =============================================================

#[test]
fn resolve_list_accepts_bare_array() {
    let payload = json!([{ "id": "a" }, { "id": "b" }]);
    assert_eq!(resolve_list(&payload, "bookings").len(), 2);
}

#[test]
fn resolve_list_accepts_data_and_named_envelopes() {
    assert_eq!(resolve_list(&json!({ "data": [{ "id": "a" }] }), "users").len(), 1);
    assert_eq!(resolve_list(&json!({ "users": [{ "id": "a" }, { "id": "b" }] }), "users").len(), 2);
}

#[test]
fn resolve_list_defaults_to_empty() {
    assert!(resolve_list(&json!({ "data": { "id": "a" } }), "users").is_empty());
    assert!(resolve_list(&json!(null), "users").is_empty());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_from_value_reads_mongo_id_and_phone_alias() {
    let user = User::from_value(&json!({
        "_id": "u-1",
        "firstName": "Sita",
        "phone": "+977 9812345678",
        "avatar": "/uploads/a.png"
    }));
    assert_eq!(user.id, "u-1");
    assert_eq!(user.mobile_number.as_deref(), Some("+977 9812345678"));
    assert_eq!(user.avatar_url.as_deref(), Some("/uploads/a.png"));
}

#[test]
fn user_from_value_unwraps_nested_envelopes() {
    let user = User::from_value(&json!({ "data": { "data": { "id": "u-2", "email": "a@b.co" } } }));
    assert_eq!(user.id, "u-2");
    assert_eq!(user.email.as_deref(), Some("a@b.co"));

    let user = User::from_value(&json!({ "message": "ok", "user": { "id": "u-3" } }));
    assert_eq!(user.id, "u-3");
}

#[test]
fn user_display_name_falls_back_through_fields() {
    let mut user = User { id: "u".to_owned(), ..User::default() };
    assert_eq!(user.display_name(), "Unknown");
    user.email = Some("ram@floorease.com".to_owned());
    assert_eq!(user.display_name(), "ram@floorease.com");
    user.first_name = Some("Ram".to_owned());
    assert_eq!(user.display_name(), "Ram");
    user.last_name = Some("Thapa".to_owned());
    assert_eq!(user.display_name(), "Ram Thapa");
}

#[test]
fn user_is_admin_is_case_insensitive() {
    let user = User { role: Some("Admin".to_owned()), ..User::default() };
    assert!(user.is_admin());
    assert!(!User::default().is_admin());
}

// =============================================================
// Booking
// =============================================================

#[test]
fn booking_from_value_fills_placeholders_and_aliases() {
    let booking = Booking::from_value(&json!({
        "_id": "b-1",
        "phone": "9812345678",
        "address": "Lalitpur",
        "areaSize": 120,
        "status": "Completed"
    }));
    assert_eq!(booking.id, "b-1");
    assert_eq!(booking.full_name, EMPTY_CELL);
    assert_eq!(booking.phone_number, "9812345678");
    assert_eq!(booking.city_address, "Lalitpur");
    assert_eq!(booking.area_size.as_deref(), Some("120"));
    assert_eq!(booking.status, BookingStatus::Completed);
}

#[test]
fn booking_status_defaults_to_pending() {
    let booking = Booking::from_value(&json!({ "id": "b-2" }));
    assert_eq!(booking.status, BookingStatus::Pending);
}

#[test]
fn booking_status_preserves_unknown_values() {
    let status = BookingStatus::parse("cancelled");
    assert_eq!(status, BookingStatus::Other("cancelled".to_owned()));
    assert_eq!(status.as_str(), "cancelled");
    assert_eq!(serde_json::to_value(BookingStatus::Completed).unwrap(), json!("completed"));
}

#[test]
fn booking_merged_with_prefers_detail_fields() {
    let row = Booking::from_value(&json!({ "id": "b-3", "fullName": "Hari", "notes": "row note" }));
    let merged = row.merged_with(&json!({ "data": { "fullName": "Hari Bahadur", "email": "h@x.io" } }));
    assert_eq!(merged.id, "b-3");
    assert_eq!(merged.full_name, "Hari Bahadur");
    assert_eq!(merged.email.as_deref(), Some("h@x.io"));
    assert_eq!(merged.notes.as_deref(), Some("row note"));
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn reset_password_request_uses_camel_case() {
    let body = ResetPasswordRequest {
        email: "a@b.co".to_owned(),
        new_password: "Secret123".to_owned(),
        confirm_password: "Secret123".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        json!({ "email": "a@b.co", "newPassword": "Secret123", "confirmPassword": "Secret123" })
    );
}

#[test]
fn register_request_omits_blank_optional_fields() {
    let body = RegisterRequest {
        email: "a@b.co".to_owned(),
        password: "Secret123".to_owned(),
        full_name: "Asha Rai".to_owned(),
        mobile_number: String::new(),
    };
    assert_eq!(
        serde_json::to_value(body).unwrap(),
        json!({ "email": "a@b.co", "password": "Secret123", "fullName": "Asha Rai" })
    );
}

#[test]
fn booking_request_resolved_from_prefers_server_echo() {
    let submitted = BookingRequest {
        full_name: "Asha".to_owned(),
        phone: "9812345678".to_owned(),
        area_size: 40.0,
        preferred_time: "Morning 8-12".to_owned(),
        ..BookingRequest::default()
    };
    let resolved = submitted.resolved_from(&json!({
        "booking": { "fullName": "Asha Rai", "areaSize": "55", "address": "Pokhara" }
    }));
    assert_eq!(resolved.full_name, "Asha Rai");
    assert!((resolved.area_size - 55.0).abs() < f64::EPSILON);
    assert_eq!(resolved.city_address, "Pokhara");
    assert_eq!(resolved.preferred_time, "Morning 8-12");
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_result_reads_token_from_data_or_root() {
    let nested = LoginResult::from_value(&json!({ "data": { "token": "t-1", "user": { "id": "u" } } }));
    assert_eq!(nested.token.as_deref(), Some("t-1"));
    assert_eq!(nested.user.map(|u| u.id).as_deref(), Some("u"));

    let flat = LoginResult::from_value(&json!({ "token": "t-2" }));
    assert_eq!(flat.token.as_deref(), Some("t-2"));
    assert!(flat.user.is_none());
}

#[test]
fn login_result_takes_role_from_user_record() {
    let result = LoginResult::from_value(&json!({
        "data": { "token": "t", "user": { "id": "u", "role": "admin" } }
    }));
    assert!(result.is_admin());
}

#[test]
fn success_message_reads_message_only() {
    assert_eq!(success_message(&json!({ "message": "OTP sent" })).as_deref(), Some("OTP sent"));
    assert_eq!(success_message(&json!({ "error": "nope" })), None);
}
