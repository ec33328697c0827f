use super::*;

#[test]
fn full_name_requires_two_trimmed_chars() {
    assert_eq!(validate_full_name(" A "), "Full name must be at least 2 characters long");
    assert_eq!(validate_full_name("Al"), "");
}

#[test]
fn mobile_allows_empty_and_ignores_spaces() {
    assert_eq!(validate_mobile(""), "");
    assert_eq!(validate_mobile("981 234 5678"), "");
    assert_eq!(validate_mobile("+977 9812345678"), "");
}

#[test]
fn mobile_rejects_leading_zero_and_letters() {
    assert_eq!(validate_mobile("0981234567"), "Please enter a valid mobile number");
    assert_eq!(validate_mobile("98a12"), "Please enter a valid mobile number");
    assert_eq!(validate_mobile("12345678901234567"), "Please enter a valid mobile number");
}

#[test]
fn phone_patterns_accept_ascii_digits_only() {
    assert_eq!(validate_mobile("9٨١٢٣٤٥٦٧٨"), "Please enter a valid mobile number");
    assert!(!is_valid_booking_phone("٩٨١٢٣٤٥٦٧٨"));
    assert!(!is_valid_booking_phone("+977９８１２３４５６７８"));
    assert!(is_valid_booking_phone("9812345678"));
}

#[test]
fn email_shape_is_checked() {
    for bad in ["", "plain", "a@b", "a b@c.d", "@c.d", "a@@b.c"] {
        assert!(!validate_email(bad).is_empty(), "{bad} should be rejected");
    }
    assert_eq!(validate_email("user@example.com"), "");
}

#[test]
fn password_checks_length_before_classes() {
    assert_eq!(validate_password("Ab1"), "Password must be at least 8 characters long");
    assert_eq!(validate_password("abcdefgh"), "Password must contain uppercase, lowercase, and number");
    assert_eq!(validate_password("ABCDEFG1"), "Password must contain uppercase, lowercase, and number");
    assert_eq!(validate_password("Abcdefgh"), "Password must contain uppercase, lowercase, and number");
    assert_eq!(validate_password("Abcdefg1"), "");
}

#[test]
fn otp_requires_exactly_six_digits() {
    assert_eq!(validate_otp("123456"), "");
    assert_eq!(validate_otp("12345"), "OTP must be 6 digits");
    assert_eq!(validate_otp("abcdef"), "OTP must be 6 digits");
    assert_eq!(validate_otp("1234567"), "OTP must be 6 digits");
}

#[test]
fn otp_input_is_digits_only_and_truncated() {
    assert_eq!(normalize_otp_input("12a3-45 678"), "123456");
    assert_eq!(normalize_otp_input("abc"), "");
}

#[test]
fn format_mobile_groups_three_three_four() {
    assert_eq!(format_mobile("9812345678"), "981 234 5678");
    assert_eq!(format_mobile("98123"), "981 23");
    assert_eq!(format_mobile("981"), "981");
    assert_eq!(format_mobile("(981) 234-567899"), "981 234 5678");
}

#[test]
fn reset_email_distinguishes_missing_and_malformed() {
    assert_eq!(validate_reset_email("  "), "Please enter your email address");
    assert_eq!(validate_reset_email("nope"), "Please enter a valid email address");
    assert_eq!(validate_reset_email("a@b.co"), "");
}

#[test]
fn reset_otp_distinguishes_missing_and_malformed() {
    assert_eq!(validate_reset_otp(""), "Please enter the OTP");
    assert_eq!(validate_reset_otp("12"), "OTP must be 6 digits");
}

#[test]
fn reset_passwords_report_first_failure() {
    assert_eq!(
        validate_reset_passwords("", ""),
        Some((ResetField::NewPassword, "Please enter a new password"))
    );
    assert_eq!(
        validate_reset_passwords("short", ""),
        Some((ResetField::NewPassword, "Password must be at least 8 characters"))
    );
    assert_eq!(
        validate_reset_passwords("longenough", " "),
        Some((ResetField::ConfirmPassword, "Please confirm your password"))
    );
    assert_eq!(
        validate_reset_passwords("longenough", "different"),
        Some((ResetField::ConfirmPassword, "Passwords do not match"))
    );
    assert_eq!(validate_reset_passwords("longenough", "longenough"), None);
}

#[test]
fn booking_phone_accepts_local_or_nepal_prefix() {
    assert!(is_valid_booking_phone("9812345678"));
    assert!(is_valid_booking_phone("+9779812345678"));
    assert!(!is_valid_booking_phone("981234567"));
    assert!(!is_valid_booking_phone("+19812345678"));
}
