use super::*;
use serde_json::json;

fn booking(id: &str) -> Booking {
    Booking { id: id.to_owned(), full_name: format!("Customer {id}"), ..Booking::default() }
}

fn user(id: &str, email: &str) -> User {
    User { id: id.to_owned(), email: Some(email.to_owned()), ..User::default() }
}

fn loaded(ids: &[&str]) -> AdminTable<Booking> {
    let mut table = AdminTable::default();
    table.finish_load(Ok(ids.iter().map(|id| booking(id)).collect()), "Failed to load bookings");
    table
}

fn ids(table: &AdminTable<Booking>) -> Vec<&str> {
    table.rows.iter().map(|b| b.id.as_str()).collect()
}

// =============================================================
// Loading
// =============================================================

#[test]
fn table_starts_loading_and_empty() {
    let table = AdminTable::<User>::default();
    assert!(table.loading);
    assert!(table.rows.is_empty());
}

#[test]
fn load_failure_surfaces_message() {
    let mut table = AdminTable::<Booking>::default();
    table.finish_load(Err(ApiError::Transport("x".to_owned())), "Failed to load bookings");
    assert!(!table.loading);
    assert_eq!(table.error, "Failed to load bookings");
}

// =============================================================
// Delete
// =============================================================

#[test]
fn successful_delete_removes_only_that_row() {
    let mut table = loaded(&["a", "b", "c"]);
    table.request_delete("b");
    let id = table.confirm_delete().unwrap();
    assert!(table.apply_delete(&id, Ok(()), "Failed to delete booking"));
    assert_eq!(ids(&table), vec!["a", "c"]);
    assert!(table.pending_delete.is_none());
}

#[test]
fn rejected_delete_leaves_list_unchanged() {
    let mut table = loaded(&["a", "b"]);
    let err = ApiError::Rejected { status: 403, message: "Forbidden".to_owned() };
    assert!(!table.apply_delete("a", Err(err), "Failed to delete booking"));
    assert_eq!(ids(&table), vec!["a", "b"]);
    assert_eq!(table.error, "Forbidden");
}

#[test]
fn transport_failure_on_delete_uses_fallback() {
    let mut table = loaded(&["a"]);
    table.apply_delete("a", Err(ApiError::Transport("offline".to_owned())), "Failed to delete booking");
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.error, "Failed to delete booking");
}

#[test]
fn cancelled_delete_yields_nothing_to_send() {
    let mut table = loaded(&["a"]);
    table.request_delete("a");
    table.cancel_delete();
    assert_eq!(table.confirm_delete(), None);
    assert_eq!(table.rows.len(), 1);
}

// =============================================================
// Status
// =============================================================

#[test]
fn status_changes_only_after_success() {
    let mut table = loaded(&["a"]);
    let err = ApiError::Rejected { status: 500, message: String::new() };
    assert!(!table.apply_status("a", &BookingStatus::Completed, Err(err)));
    assert_eq!(table.find("a").unwrap().status, BookingStatus::Pending);
    assert_eq!(table.error, "Failed to update status");

    assert!(table.apply_status("a", &BookingStatus::Completed, Ok(())));
    assert_eq!(table.find("a").unwrap().status, BookingStatus::Completed);
    assert!(table.error.is_empty());
}

// =============================================================
// Booking detail
// =============================================================

#[test]
fn detail_merges_payload_over_row() {
    let row = booking("a");
    let mut detail = BookingDetail::default();
    detail.open_for(&row);
    assert!(detail.loading);
    detail.finish_load(&row, Ok(json!({"data": {"notes": "Bring samples", "status": "completed"}})));
    let shown = detail.booking.as_ref().unwrap();
    assert_eq!(shown.notes.as_deref(), Some("Bring samples"));
    assert_eq!(shown.full_name, "Customer a");
    assert_eq!(shown.status, BookingStatus::Completed);
    assert!(detail.shows("a"));
}

#[test]
fn detail_ignores_response_for_previous_row() {
    let (a, b) = (booking("a"), booking("b"));
    let mut detail = BookingDetail::default();
    detail.open_for(&a);
    detail.close();
    detail.open_for(&b);
    detail.finish_load(&a, Ok(json!({"data": {"notes": "late"}})));
    assert!(detail.shows("b"));
    assert!(detail.loading);
    assert_eq!(detail.booking.as_ref().unwrap().notes, None);

    detail.close();
    detail.finish_load(&b, Ok(json!({"data": {"notes": "late"}})));
    assert!(!detail.open);
    assert!(detail.booking.is_none());
}

#[test]
fn detail_falls_back_to_row_on_failure() {
    let row = booking("a");
    let mut detail = BookingDetail::default();
    detail.open_for(&row);
    detail.finish_load(&row, Err(ApiError::Rejected { status: 404, message: String::new() }));
    assert_eq!(detail.booking.as_ref(), Some(&row));
    assert_eq!(detail.error, "Failed to load booking details");
    detail.close();
    assert!(!detail.open);
}

// =============================================================
// User editor
// =============================================================

#[test]
fn editor_sends_trimmed_fields() {
    let mut editor = UserEditor::default();
    editor.open_for("u1", UserModalMode::Edit);
    editor.finish_load("u1", Ok(user("u1", "a@b.co")));
    editor.form.first_name = "  Ram ".to_owned();
    editor.form.address = " Kathmandu ".to_owned();
    let (id, body) = editor.begin_save().unwrap();
    assert_eq!(id, "u1");
    assert_eq!(body.first_name, "Ram");
    assert_eq!(body.address, "Kathmandu");
    assert!(editor.begin_save().is_none());
}

#[test]
fn editor_save_success_updates_modal_and_returns_user() {
    let mut editor = UserEditor::default();
    editor.open_for("u1", UserModalMode::Edit);
    editor.finish_load("u1", Ok(user("u1", "a@b.co")));
    editor.form.first_name = "Ram".to_owned();
    let (_, body) = editor.begin_save().unwrap();
    let updated = editor.finish_save(&body, Ok(User::default())).unwrap();
    assert_eq!(updated.first_name.as_deref(), Some("Ram"));
    assert_eq!(updated.email.as_deref(), Some("a@b.co"));
    assert_eq!(editor.mode, UserModalMode::View);
    assert_eq!(editor.success, "Changes saved successfully.");

    let mut table = AdminTable::<User>::default();
    table.finish_load(Ok(vec![user("u1", "a@b.co"), user("u2", "c@d.co")]), "Failed to load users");
    table.update_row("u1", |row| patch_user_row(row, &updated));
    assert_eq!(table.find("u1").unwrap().display_name(), "Ram");
    assert_eq!(table.find("u2").unwrap().display_name(), "c@d.co");
}

#[test]
fn editor_save_failure_keeps_form() {
    let mut editor = UserEditor::default();
    editor.open_for("u1", UserModalMode::Edit);
    editor.finish_load("u1", Ok(user("u1", "a@b.co")));
    let (_, body) = editor.begin_save().unwrap();
    let err = ApiError::Rejected { status: 400, message: String::new() };
    assert!(editor.finish_save(&body, Err(err)).is_none());
    assert_eq!(editor.error, "Failed to update user");
    assert_eq!(editor.mode, UserModalMode::Edit);
    assert!(!editor.saving);
}

#[test]
fn editor_ignores_late_load_for_other_user() {
    let mut editor = UserEditor::default();
    editor.open_for("a", UserModalMode::View);
    editor.close();
    editor.open_for("b", UserModalMode::Edit);
    editor.finish_load("a", Ok(user("a", "a@b.co")));
    assert_eq!(editor.user.as_ref().map(|u| u.id.as_str()), Some("b"));
    assert!(editor.loading);
    assert!(editor.form.first_name.is_empty());

    editor.finish_load("b", Ok(user("b", "c@d.co")));
    editor.form.first_name = "Ram".to_owned();
    let (id, _) = editor.begin_save().unwrap();
    assert_eq!(id, "b");
}

#[test]
fn editor_load_after_close_is_dropped() {
    let mut editor = UserEditor::default();
    editor.open_for("a", UserModalMode::Edit);
    editor.close();
    editor.finish_load("a", Ok(user("a", "a@b.co")));
    assert!(!editor.open);
    assert!(editor.user.is_none());
}

#[test]
fn editor_load_failure_reports_error() {
    let mut editor = UserEditor::default();
    editor.open_for("u1", UserModalMode::View);
    editor.finish_load("u1", Err(ApiError::Transport("x".to_owned())));
    assert_eq!(editor.error, "Failed to load user details");
    assert!(!editor.loading);
}
