use super::*;

#[test]
fn known_status_offers_fixed_choices() {
    assert_eq!(status_choices(&BookingStatus::Completed), BookingStatus::CHOICES.to_vec());
}

#[test]
fn unknown_status_stays_selectable() {
    let current = BookingStatus::parse("cancelled");
    let choices = status_choices(&current);
    assert_eq!(choices.len(), 3);
    assert_eq!(choices.last(), Some(&current));
}

#[test]
fn picking_the_committed_status_requests_nothing() {
    assert_eq!(change_request(&BookingStatus::Pending, "pending"), None);
    assert_eq!(change_request(&BookingStatus::Pending, "completed"), Some(BookingStatus::Completed));
}

#[test]
fn reselecting_unknown_status_requests_nothing() {
    let committed = BookingStatus::parse("cancelled");
    assert_eq!(change_request(&committed, "cancelled"), None);
    assert_eq!(change_request(&committed, "pending"), Some(BookingStatus::Pending));
}
