use super::*;

#[test]
fn resolve_passes_absolute_urls_through() {
    assert_eq!(
        resolve_avatar_url_with("http://api", Some("https://cdn.example/a.png")).as_deref(),
        Some("https://cdn.example/a.png")
    );
    assert_eq!(
        resolve_avatar_url_with("http://api", Some("blob:http://x/1")).as_deref(),
        Some("blob:http://x/1")
    );
}

#[test]
fn resolve_joins_relative_paths() {
    assert_eq!(
        resolve_avatar_url_with("http://api", Some("/uploads/a.png")).as_deref(),
        Some("http://api/uploads/a.png")
    );
    assert_eq!(
        resolve_avatar_url_with("http://api", Some("uploads/a.png")).as_deref(),
        Some("http://api/uploads/a.png")
    );
}

#[test]
fn resolve_treats_blank_as_missing() {
    assert_eq!(resolve_avatar_url_with("http://api", Some("  ")), None);
    assert_eq!(resolve_avatar_url_with("http://api", None), None);
}

#[test]
fn name_initials_takes_two_parts() {
    assert_eq!(name_initials("ram bahadur thapa"), "RB");
    assert_eq!(name_initials("  sita  "), "S");
    assert_eq!(name_initials(""), "");
}

#[test]
fn user_initials_falls_back_to_email_then_u() {
    let named = User { first_name: Some("Ram".into()), last_name: Some("Thapa".into()), ..User::default() };
    assert_eq!(user_initials(&named), "RT");

    let email_only = User { email: Some("zed@example.com".into()), ..User::default() };
    assert_eq!(user_initials(&email_only), "Z");

    assert_eq!(user_initials(&User::default()), "U");
}

#[test]
fn generated_avatar_encodes_name() {
    assert_eq!(
        generate_avatar_url("Ram Thapa", 64),
        "https://ui-avatars.com/api/?name=Ram%20Thapa&size=64&background=0ea5b7&color=ffffff"
    );
}
