use super::*;

#[test]
fn normalize_base_trims_trailing_slashes() {
    assert_eq!(normalize_base("https://api.floorease.test///"), "https://api.floorease.test");
}

#[test]
fn normalize_base_falls_back_when_blank() {
    assert_eq!(normalize_base("   "), DEFAULT_API_URL);
}

#[test]
fn join_url_inserts_single_separator() {
    assert_eq!(join_url("http://h:5050", "api/bookings"), "http://h:5050/api/bookings");
    assert_eq!(join_url("http://h:5050/", "/api/bookings"), "http://h:5050/api/bookings");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
