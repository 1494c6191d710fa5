// crates/console-core/tests/formatting.rs
use chrono::{FixedOffset, Utc};
use console_core::format::{
    format_currency, format_date_time, format_price, INVALID_DATE, PRICE_PLACEHOLDER,
};

#[test]
fn currency_has_symbol_and_two_decimals() {
    assert_eq!(format_currency(1234.5), "$1234.50");
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(1_000_000.0), "$1000000.00");
}

#[test]
fn missing_price_is_a_placeholder_not_zero() {
    assert_eq!(format_price(None), PRICE_PLACEHOLDER);
    assert_ne!(format_price(None), "$0.00");
    assert_eq!(format_price(Some(151.25)), "$151.25");
}

#[test]
fn backend_local_timestamp_is_formatted_as_is() {
    // LocalDateTime from the backend, no offset, with and without fractions
    assert_eq!(format_date_time("2024-01-15T14:30:05", &Utc), "Jan 15, 02:30:05 PM");
    assert_eq!(
        format_date_time("2024-03-07T09:05:00.123456", &Utc),
        "Mar 7, 09:05:00 AM"
    );
    assert_eq!(format_date_time("2024-12-31T00:00:01", &Utc), "Dec 31, 12:00:01 AM");
}

#[test]
fn offset_timestamp_is_converted_into_the_given_zone() {
    let raw = "2024-01-15T14:30:05Z";
    assert_eq!(format_date_time(raw, &Utc), "Jan 15, 02:30:05 PM");

    let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
    assert_eq!(format_date_time(raw, &new_york), "Jan 15, 09:30:05 AM");

    // crossing midnight moves the date as well
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    assert_eq!(format_date_time("2024-01-15T20:00:00Z", &tokyo), "Jan 16, 05:00:00 AM");
}

#[test]
fn garbage_timestamp_renders_invalid_date() {
    assert_eq!(format_date_time("", &Utc), INVALID_DATE);
    assert_eq!(format_date_time("yesterday", &Utc), INVALID_DATE);
}

#[test]
fn formatting_is_deterministic() {
    let a = format_date_time("2024-06-01T12:00:00", &Utc);
    let b = format_date_time("2024-06-01T12:00:00", &Utc);
    assert_eq!(a, b);
    assert_eq!(a, "Jun 1, 12:00:00 PM");
}
