use super::*;

#[test]
fn format_date_uses_month_day_year() {
    assert_eq!(format_date(Some("2024-03-07T10:15:00.000Z")), "3/7/2024");
    assert_eq!(format_date(Some("2025-12-31")), "12/31/2025");
    assert_eq!(format_date(Some("2024-03-07T23:30:00+05:45")), "3/7/2024");
    assert_eq!(format_date(Some("2024-03-07T10:15:00")), "3/7/2024");
}

#[test]
fn format_date_rejects_impossible_calendar_dates() {
    assert_eq!(format_date(Some("2024-02-31")), EMPTY_CELL);
    assert_eq!(format_date(Some("2023-02-29T00:00:00Z")), EMPTY_CELL);
    assert_eq!(format_date(Some("2024-02-29")), "2/29/2024");
}

#[test]
fn format_date_placeholder_for_missing_or_bad_values() {
    assert_eq!(format_date(None), EMPTY_CELL);
    assert_eq!(format_date(Some("yesterday")), EMPTY_CELL);
    assert_eq!(format_date(Some("2024-13-01")), EMPTY_CELL);
    assert_eq!(format_date(Some("2024-1-1")), EMPTY_CELL);
}
