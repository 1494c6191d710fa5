//! Display formatting for amounts and backend timestamps.

use chrono::{DateTime, NaiveDateTime, TimeZone};

/// Shown in place of a price that does not exist yet (e.g. an unfilled order).
pub const PRICE_PLACEHOLDER: &str = "-";

/// Shown for a timestamp that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_TIME_FORMAT: &str = "%b %-d, %I:%M:%S %p";

/// `$` plus the amount with exactly two fractional digits, no grouping.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Like [`format_currency`] but an absent price renders as
/// [`PRICE_PLACEHOLDER`].
pub fn format_price(amount: Option<f64>) -> String {
    match amount {
        Some(amount) => format_currency(amount),
        None => PRICE_PLACEHOLDER.to_string(),
    }
}

/// Short en-US date-time, e.g. `Jan 15, 02:30:05 PM`.
///
/// RFC 3339 timestamps are converted into `tz`. Timestamps without an
/// offset are already wall-clock local time on the backend and are
/// formatted as they are.
pub fn format_date_time<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(tz).format(DATE_TIME_FORMAT).to_string();
    }

    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => naive.format(DATE_TIME_FORMAT).to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}
