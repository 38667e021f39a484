//! Cookie date serialization.
//!
//! `Set-Cookie` expiry dates use a fixed RFC-1123-like shape with dashes,
//! `Wdy, DD-Mon-YYYY HH:MM:SS GMT`, always in English and always GMT.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// The wire shape of a cookie expiry date. chrono's `%a`/`%b` are fixed
/// English three-letter names, not locale-dependent.
pub const COOKIE_DATE_FORMAT: &str = "%a, %d-%b-%Y %H:%M:%S GMT";

/// Anything that can be turned into a cookie expiry date.
#[derive(Debug, Clone, PartialEq)]
pub enum CookieDate {
    /// An already-formatted date string, passed through verbatim.
    Formatted(String),
    /// Seconds from now.
    Offset(i64),
    /// A span from now.
    Span(std::time::Duration),
    /// An absolute instant.
    Instant(DateTime<Utc>),
}

impl From<&str> for CookieDate {
    fn from(value: &str) -> Self {
        CookieDate::Formatted(value.to_owned())
    }
}

impl From<String> for CookieDate {
    fn from(value: String) -> Self {
        CookieDate::Formatted(value)
    }
}

impl From<i64> for CookieDate {
    fn from(seconds: i64) -> Self {
        CookieDate::Offset(seconds)
    }
}

impl From<std::time::Duration> for CookieDate {
    fn from(span: std::time::Duration) -> Self {
        CookieDate::Span(span)
    }
}

impl From<DateTime<Utc>> for CookieDate {
    fn from(instant: DateTime<Utc>) -> Self {
        CookieDate::Instant(instant)
    }
}

impl From<NaiveDate> for CookieDate {
    fn from(date: NaiveDate) -> Self {
        CookieDate::Instant(date.and_time(NaiveTime::MIN).and_utc())
    }
}

/// Serialize `date` into the fixed cookie-date string.
///
/// Relative shapes (seconds, spans) are anchored at the current UTC instant;
/// pre-formatted strings pass through untouched.
#[must_use]
pub fn serialize_cookie_date(date: impl Into<CookieDate>) -> String {
    let instant = match date.into() {
        CookieDate::Formatted(text) => return text,
        CookieDate::Offset(seconds) => {
            from_now(TimeDelta::try_seconds(seconds).unwrap_or(TimeDelta::MAX))
        }
        CookieDate::Span(span) => from_now(TimeDelta::from_std(span).unwrap_or(TimeDelta::MAX)),
        CookieDate::Instant(instant) => instant,
    };
    instant.format(COOKIE_DATE_FORMAT).to_string()
}

fn from_now(delta: TimeDelta) -> DateTime<Utc> {
    Utc::now()
        .checked_add_signed(delta)
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_instants_with_fixed_tables() {
        let instant = NaiveDate::from_ymd_opt(2021, 6, 9)
            .unwrap()
            .and_hms_opt(10, 18, 14)
            .unwrap()
            .and_utc();
        assert_eq!(serialize_cookie_date(instant), "Wed, 09-Jun-2021 10:18:14 GMT");
    }

    #[test]
    fn passes_preformatted_strings_through() {
        let text = "Thu, 01-Jan-1970 00:00:00 GMT";
        assert_eq!(serialize_cookie_date(text), text);
    }

    #[test]
    fn naive_dates_mean_midnight() {
        let date = NaiveDate::from_ymd_opt(1994, 11, 6).unwrap();
        assert_eq!(serialize_cookie_date(date), "Sun, 06-Nov-1994 00:00:00 GMT");
    }

    #[test]
    fn offsets_are_relative_to_now() {
        let year = Utc::now().format("%Y").to_string();
        // a zero offset lands in the current year and keeps the wire shape
        let serialized = serialize_cookie_date(0i64);
        assert!(serialized.contains(&year));
        assert!(serialized.ends_with(" GMT"));
        assert_eq!(serialize_cookie_date(std::time::Duration::ZERO).len(), serialized.len());
    }
}
