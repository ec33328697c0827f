use super::*;

#[test]
fn missing_or_blank_token_needs_login() {
    assert_eq!(evaluate(None, None, false), Access::NeedsLogin);
    assert_eq!(evaluate(Some(" "), Some("admin"), true), Access::NeedsLogin);
    assert_eq!(Access::NeedsLogin.redirect(), Some("/login"));
}

#[test]
fn token_is_enough_for_member_pages() {
    assert_eq!(evaluate(Some("t"), None, false), Access::Granted);
    assert_eq!(Access::Granted.redirect(), None);
}

#[test]
fn admin_pages_require_admin_role() {
    assert_eq!(evaluate(Some("t"), None, true), Access::NeedsAdmin);
    assert_eq!(evaluate(Some("t"), Some("user"), true), Access::NeedsAdmin);
    assert_eq!(evaluate(Some("t"), Some("Admin"), true), Access::Granted);
    assert_eq!(Access::NeedsAdmin.redirect(), Some("/dashboard"));
}

#[test]
fn redirects_replace_history() {
    let options = replace_history();
    assert!(options.replace);
    assert!(options.resolve);
}
