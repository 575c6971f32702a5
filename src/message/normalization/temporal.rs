//! Conversion between ISO-8601 text and wire temporal values.
//!
//! Encoding never fails. An unusable timestamp falls back to the clock's
//! current instant, and an unusable date falls back to absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use mockable::Clock;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Offset-free layouts accepted for timestamps, read as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parses timestamp text, returning `None` when it is empty or unusable.
///
/// Accepts RFC 3339 with any offset, offset-free date-times (read as UTC), and
/// bare dates (UTC midnight).
#[must_use]
pub fn parse_date_time(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NAIVE_DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
                .map(|naive| naive.and_utc())
        })
}

/// Encodes timestamp text, substituting the current instant when unusable.
///
/// # Examples
///
/// ```
/// use interlace::message::normalization::temporal::{decode_date_time, encode_date_time};
/// use mockable::DefaultClock;
///
/// let instant = encode_date_time("2024-05-01T12:00:00+02:00", &DefaultClock);
/// assert_eq!(decode_date_time(instant), "2024-05-01T10:00:00.000Z");
/// ```
#[must_use]
pub fn encode_date_time(text: &str, clock: &impl Clock) -> DateTime<Utc> {
    parse_date_time(text).unwrap_or_else(|| {
        tracing::debug!(field = "createdAt", value = %text, "unusable timestamp, substituting current time");
        clock.utc()
    })
}

/// Renders an instant as ISO-8601 with millisecond precision and a `Z` suffix.
#[must_use]
pub fn decode_date_time(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Encodes date text; empty or unusable text yields absent.
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, keeping its date.
///
/// # Examples
///
/// ```
/// use interlace::message::normalization::temporal::encode_date_only;
///
/// assert!(encode_date_only("").is_none());
/// assert!(encode_date_only("not-a-date").is_none());
/// assert!(encode_date_only("2024-02-29").is_some());
/// ```
#[must_use]
pub fn encode_date_only(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|instant| instant.date_naive())
    });
    if parsed.is_none() {
        tracing::debug!(field = "dateOnly", value = %text, "unusable date, omitting field");
    }
    parsed
}

/// Renders a date as `YYYY-MM-DD`; absent yields an empty string.
#[must_use]
pub fn decode_date_only(date: Option<NaiveDate>) -> String {
    date.map_or_else(String::new, |value| value.format(DATE_FORMAT).to_string())
}
