//! Parsing of client-supplied instants and calendar day bounds.
//!
//! Every instant is resolved to UTC before it reaches the conflict checker
//! or the database.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Parse an ISO-8601 instant supplied for `field`.
///
/// Accepted forms, tried in order:
/// - RFC 3339 with offset (`2025-04-25T14:00:00Z`, `2025-04-25T16:00:00+02:00`)
/// - naive date-time, taken as UTC (`2025-04-25T14:00:00`, `2025-04-25T14:00`)
/// - plain date, taken as midnight UTC (`2025-04-25`)
pub fn parse_instant(field: &str, value: &str) -> Result<Timestamp, CoreError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(CoreError::Validation(format!(
        "{field} must be an ISO-8601 date or date-time, got '{value}'"
    )))
}

/// Inclusive listing window for one calendar day: `[00:00Z, next day 00:00Z]`.
pub fn day_bounds(date: NaiveDate) -> (Timestamp, Timestamp) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    let end = date
        .checked_add_days(Days::new(1))
        .map(|next| next.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    (start, end)
}
