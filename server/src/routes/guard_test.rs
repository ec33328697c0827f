use axum::http::{HeaderMap, HeaderValue};

use super::*;

fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(*name, HeaderValue::from_static(value));
    }
    map
}

#[test]
fn dashboard_paths_are_protected() {
    assert!(requires_session("/dashboard"));
    assert!(requires_session("/dashboard/"));
    assert!(requires_session("/dashboard/orders"));
    assert!(!requires_session("/dashboards"));
    assert!(!requires_session("/login"));
    assert!(!requires_session("/admin"));
}

#[test]
fn cookie_token_wins() {
    let map = headers(&[("cookie", "token=from-cookie"), ("authorization", "Bearer from-header")]);
    assert_eq!(extract_token(&map).as_deref(), Some("from-cookie"));
}

#[test]
fn bearer_prefix_is_case_insensitive() {
    assert_eq!(extract_token(&headers(&[("authorization", "bearer abc")])).as_deref(), Some("abc"));
    assert_eq!(extract_token(&headers(&[("authorization", "BEARER  xyz ")])).as_deref(), Some("xyz"));
}

#[test]
fn raw_header_tokens_are_accepted() {
    assert_eq!(extract_token(&headers(&[("x-auth-token", "t1")])).as_deref(), Some("t1"));
    assert_eq!(extract_token(&headers(&[("x-access-token", " t2 ")])).as_deref(), Some("t2"));
}

#[test]
fn blank_values_count_as_absent() {
    assert_eq!(extract_token(&headers(&[("cookie", "token=")])), None);
    assert_eq!(extract_token(&headers(&[("authorization", "Bearer   ")])), None);
    assert_eq!(extract_token(&HeaderMap::new()), None);
}
