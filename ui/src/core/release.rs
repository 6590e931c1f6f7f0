//! Release-date parsing and the "new release" recency check.

use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, Duration,
    OffsetDateTime,
};

/// How long after its release a shoe still counts as new.
pub const NEW_RELEASE_WINDOW: Duration = Duration::days(30);

/// True when `release_date` falls inside [`NEW_RELEASE_WINDOW`] before `now`.
///
/// Release dates in the future also count as new.
pub fn is_new_shoe(release_date: OffsetDateTime, now: OffsetDateTime) -> bool {
    now - release_date < NEW_RELEASE_WINDOW
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (taken as UTC midnight).
pub fn parse_release_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts);
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// Convert a unix timestamp in milliseconds.
pub fn from_unix_millis(millis: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}
