use super::*;

#[test]
fn admin_booking_paths_embed_id() {
    assert_eq!(admin_booking("b1"), "/api/bookings/admin/b1");
    assert_eq!(admin_booking_status("b1"), "/api/bookings/admin/b1/status");
}

#[test]
fn admin_user_path_embeds_id() {
    assert_eq!(admin_user("u9"), "/api/admin/users/u9");
}
