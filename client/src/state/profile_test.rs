use super::*;

#[test]
fn nepal_option_maps_to_prefix_and_back() {
    assert_eq!(country_to_prefix("NP"), "+977");
    assert_eq!(country_to_prefix("+44"), "+44");
    assert_eq!(prefix_to_country("+977"), "NP");
    assert_eq!(prefix_to_country("+91"), "+91");
}

#[test]
fn split_phone_reads_prefix() {
    assert_eq!(split_phone("+977 9812345678", "+1"), ("NP".to_owned(), "9812345678".to_owned()));
    assert_eq!(split_phone(" +44 7700 900123 ", "+1"), ("+44".to_owned(), "7700 900123".to_owned()));
}

#[test]
fn split_phone_ignores_non_ascii_prefix() {
    assert_eq!(split_phone("+٩٧٧ 9812345678", "+1"), ("+1".to_owned(), "+٩٧٧ 9812345678".to_owned()));
}

#[test]
fn split_phone_without_prefix_keeps_country() {
    assert_eq!(split_phone("9812345678", "+61"), ("+61".to_owned(), "9812345678".to_owned()));
}

#[test]
fn join_phone_rules() {
    assert_eq!(join_phone("NP", " 9812345678 "), "+977 9812345678");
    assert_eq!(join_phone("+1", "+44 123"), "+44 123");
    assert_eq!(join_phone("+1", "   "), "");
}

#[test]
fn initials_default_to_u() {
    assert_eq!(profile_initials("ram", " thapa"), "RT");
    assert_eq!(profile_initials("", ""), "U");
}

#[test]
fn fill_from_user_splits_phone() {
    let user = User {
        first_name: Some("Sita".into()),
        mobile_number: Some("+977 9800000000".into()),
        gender: Some("female".into()),
        ..User::default()
    };
    let mut editor = ProfileEditor::default();
    editor.fill_from(&user);
    assert_eq!(editor.country, "NP");
    assert_eq!(editor.mobile_number, "9800000000");
    assert_eq!(editor.gender, "female");
    assert_eq!(editor.initials(), "S");
}

#[test]
fn save_body_joins_phone_and_trims() {
    let mut editor = ProfileEditor {
        first_name: " Sita ".into(),
        country: "NP".into(),
        mobile_number: "9800000000".into(),
        address: " Pokhara ".into(),
        ..ProfileEditor::default()
    };
    let body = editor.begin_save().unwrap();
    assert_eq!(body.first_name, "Sita");
    assert_eq!(body.mobile_number, "+977 9800000000");
    assert_eq!(body.address, "Pokhara");
    assert!(editor.begin_save().is_none());
}

#[test]
fn save_without_echo_persists_sent_fields() {
    let mut editor = ProfileEditor { first_name: "Sita".into(), ..ProfileEditor::default() };
    let body = editor.begin_save().unwrap();
    let user = editor.finish_save(&body, Ok(User::default())).unwrap();
    assert_eq!(user.first_name.as_deref(), Some("Sita"));
    assert_eq!(editor.success, "Profile updated successfully");
    assert!(!editor.saving);
}

#[test]
fn save_failure_uses_default_message() {
    let mut editor = ProfileEditor::default();
    let body = editor.begin_save().unwrap();
    assert!(editor.finish_save(&body, Err(ApiError::Transport("x".into()))).is_none());
    assert_eq!(editor.error, "Unable to update profile.");
}

#[test]
fn upload_shows_preview_then_server_url() {
    let mut editor = ProfileEditor::default();
    assert!(editor.begin_upload("blob:local".to_owned()));
    assert_eq!(editor.display_avatar().as_deref(), Some("blob:local"));
    let echoed = User { avatar_url: Some("https://cdn.example/a.png".into()), ..User::default() };
    let persisted = editor.finish_upload(Ok(Some(echoed))).unwrap();
    assert_eq!(persisted.avatar_url.as_deref(), Some("https://cdn.example/a.png"));
    assert_eq!(editor.display_avatar().as_deref(), Some("https://cdn.example/a.png"));
    assert_eq!(editor.success, "Avatar updated successfully");
}

#[test]
fn failed_upload_reports_error() {
    let mut editor = ProfileEditor::default();
    assert!(editor.begin_upload("blob:local".to_owned()));
    assert!(editor.finish_upload(Err(ApiError::Rejected { status: 413, message: String::new() })).is_none());
    assert_eq!(editor.error, "Unable to upload avatar.");
    assert!(!editor.uploading);
}

#[test]
fn delete_avatar_clears_preview_and_url() {
    let mut editor = ProfileEditor {
        avatar_url: Some("https://cdn.example/a.png".into()),
        avatar_preview: Some("https://cdn.example/a.png".into()),
        ..ProfileEditor::default()
    };
    assert!(editor.begin_delete_avatar());
    assert!(!editor.begin_delete_avatar());
    assert!(editor.finish_delete_avatar(Ok(None)));
    assert_eq!(editor.display_avatar(), None);
    assert_eq!(editor.success, "Avatar deleted successfully");
}

#[test]
fn second_upload_is_refused_while_busy() {
    let mut editor = ProfileEditor::default();
    assert!(editor.begin_upload("blob:first".to_owned()));
    assert!(!editor.begin_upload("blob:second".to_owned()));
    assert_eq!(editor.avatar_preview.as_deref(), Some("blob:first"));
    assert!(editor.take_released().is_empty());
}

#[test]
fn replaced_blob_previews_are_released_once() {
    let mut editor = ProfileEditor::default();
    assert!(editor.begin_upload("blob:first".to_owned()));
    let echoed = User { avatar_url: Some("https://cdn.example/a.png".into()), ..User::default() };
    editor.finish_upload(Ok(Some(echoed)));
    assert_eq!(editor.take_released(), vec!["blob:first".to_owned()]);
    assert!(editor.take_released().is_empty());

    assert!(editor.begin_upload("blob:second".to_owned()));
    assert!(editor.take_released().is_empty());
    editor.finish_upload(Err(ApiError::Transport("x".into())));
    assert_eq!(editor.release_all(), vec!["blob:second".to_owned()]);
    assert_eq!(editor.avatar_preview, None);
}

#[test]
fn server_previews_are_never_released() {
    let mut editor = ProfileEditor {
        avatar_preview: Some("https://cdn.example/a.png".into()),
        ..ProfileEditor::default()
    };
    assert!(editor.begin_delete_avatar());
    editor.finish_delete_avatar(Ok(None));
    assert!(editor.release_all().is_empty());
}
