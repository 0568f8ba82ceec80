use super::*;

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1000), "1,000");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn format_rate_keeps_one_decimal() {
    assert_eq!(format_rate(3.47), "3.5%");
    assert_eq!(format_rate(0.0), "0.0%");
}

#[test]
fn format_date_truncates_timestamps() {
    assert_eq!(format_date("2026-10-01T09:30:00Z"), "2026-10-01");
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
}

#[test]
fn format_datetime_shows_minutes() {
    assert_eq!(format_datetime("2026-10-01T09:30:12Z"), "2026-10-01 09:30");
    assert_eq!(format_datetime("2026-10-01"), "2026-10-01");
}
