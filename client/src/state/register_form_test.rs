use super::*;

fn filled() -> RegisterForm {
    let mut form = RegisterForm {
        full_name: "Ram Thapa".to_owned(),
        email: "ram@example.com".to_owned(),
        password: "Secret123".to_owned(),
        ..RegisterForm::default()
    };
    form.set_mobile("9812345678");
    form
}

#[test]
fn mobile_is_formatted_while_typing() {
    let mut form = RegisterForm::default();
    form.set_mobile("98123");
    assert_eq!(form.mobile, "981 23");
    form.set_mobile("981234567890");
    assert_eq!(form.mobile, "981 234 5678");
}

#[test]
fn blur_validates_single_field() {
    let mut form = RegisterForm::default();
    form.blur(RegisterField::Email);
    assert_eq!(form.errors.email, "Please enter a valid email address");
    assert!(form.errors.full_name.is_empty());
}

#[test]
fn submit_blocked_while_any_field_invalid() {
    let mut form = filled();
    form.password = "weakpassword".to_owned();
    assert!(form.begin_submit().is_none());
    assert_eq!(form.errors.password, "Password must contain uppercase, lowercase, and number");
    assert!(!form.loading);
}

#[test]
fn valid_submit_sends_compact_mobile() {
    let mut form = filled();
    let req = form.begin_submit().unwrap();
    assert_eq!(req.mobile_number, "9812345678");
    assert_eq!(req.full_name, "Ram Thapa");
    assert!(form.loading);
}

#[test]
fn success_clears_form_and_shows_message() {
    let mut form = filled();
    form.begin_submit();
    assert!(form.finish_submit(Ok(None)));
    assert!(form.email.is_empty() && form.password.is_empty() && form.mobile.is_empty());
    assert_eq!(form.success, SIGNUP_SUCCESS);
}

#[test]
fn failure_keeps_input() {
    let mut form = filled();
    form.begin_submit();
    let err = ApiError::Rejected { status: 409, message: "Email already registered".to_owned() };
    assert!(!form.finish_submit(Err(err)));
    assert_eq!(form.error, "Email already registered");
    assert_eq!(form.email, "ram@example.com");
}
