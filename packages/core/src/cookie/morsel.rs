//! A single named cookie and its attribute bag.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::date::{CookieDate, serialize_cookie_date};
use super::encoding::{needs_quoting, quote};
use crate::error::Error;

/// The seven reserved cookie attribute keywords.
///
/// Variant order is the canonical serialization order: value-bearing
/// attributes alphabetically by wire key, then the two presence flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attr {
    Comment,
    Domain,
    Expires,
    MaxAge,
    Path,
    Secure,
    HttpOnly,
}

impl Attr {
    /// Every attribute, in canonical serialization order.
    pub const ALL: [Attr; 7] = [
        Attr::Comment,
        Attr::Domain,
        Attr::Expires,
        Attr::MaxAge,
        Attr::Path,
        Attr::Secure,
        Attr::HttpOnly,
    ];

    /// Case-insensitive lookup of a wire key. `None` for anything that is a
    /// cookie name rather than an attribute.
    #[must_use]
    pub fn from_wire(key: &str) -> Option<Attr> {
        Attr::ALL
            .into_iter()
            .find(|attr| attr.wire_key().eq_ignore_ascii_case(key))
    }

    /// The lowercase key as matched on incoming headers.
    #[must_use]
    pub const fn wire_key(self) -> &'static str {
        match self {
            Attr::Comment => "comment",
            Attr::Domain => "domain",
            Attr::Expires => "expires",
            Attr::MaxAge => "max-age",
            Attr::Path => "path",
            Attr::Secure => "secure",
            Attr::HttpOnly => "httponly",
        }
    }

    /// The capitalization used when serializing. `expires` stays lowercase,
    /// matching what legacy servers emit.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Attr::Comment => "Comment",
            Attr::Domain => "Domain",
            Attr::Expires => "expires",
            Attr::MaxAge => "Max-Age",
            Attr::Path => "Path",
            Attr::Secure => "secure",
            Attr::HttpOnly => "HttpOnly",
        }
    }

    /// Presence flags carry no value on the wire.
    #[must_use]
    pub const fn is_flag(self) -> bool {
        matches!(self, Attr::Secure | Attr::HttpOnly)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

/// The value shapes [`Morsel::set`] accepts before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Removes the attribute.
    Absent,
    /// Stored verbatim (already wire-ready).
    Text(String),
    /// `true` stores a presence marker, `false` removes.
    Flag(bool),
    /// Seconds for `Max-Age`/`expires`, a plain number elsewhere.
    Int(i64),
    /// A span of time; only `Max-Age` and `expires` can normalize it.
    Span(Duration),
    /// An absolute instant; only `expires` can normalize it.
    Instant(DateTime<Utc>),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<Duration> for AttrValue {
    fn from(value: Duration) -> Self {
        AttrValue::Span(value)
    }
}

impl From<DateTime<Utc>> for AttrValue {
    fn from(value: DateTime<Utc>) -> Self {
        AttrValue::Instant(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(AttrValue::Absent, Into::into)
    }
}

/// Accepted inputs for [`Morsel::set_max_age`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxAge {
    /// A count of seconds.
    Seconds(i64),
    /// A span, truncated to whole seconds.
    Span(Duration),
}

impl From<i64> for MaxAge {
    fn from(seconds: i64) -> Self {
        MaxAge::Seconds(seconds)
    }
}

impl From<u32> for MaxAge {
    fn from(seconds: u32) -> Self {
        MaxAge::Seconds(seconds.into())
    }
}

impl From<Duration> for MaxAge {
    fn from(span: Duration) -> Self {
        MaxAge::Span(span)
    }
}

/// One named cookie: a value plus a sparse attribute bag.
///
/// Attributes are sparse by design: an attribute set to an empty, false or
/// zero-equivalent value is removed rather than stored, matching "not sent"
/// on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Morsel {
    name: String,
    value: String,
    attrs: BTreeMap<Attr, String>,
}

// ===== impl Morsel =====

impl Morsel {
    /// Create a morsel for `name` holding `value`.
    ///
    /// # Panics
    ///
    /// A name that collides case-insensitively with a reserved attribute
    /// keyword, or that itself requires quoting, is a caller bug and panics.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Morsel {
        let name = name.into();
        assert!(
            Attr::from_wire(&name).is_none(),
            "cookie name {name:?} collides with a reserved attribute keyword"
        );
        assert!(
            !needs_quoting(&name),
            "cookie name {name:?} contains characters that require quoting"
        );
        Morsel {
            name,
            value: value.into(),
            attrs: BTreeMap::new(),
        }
    }

    /// The cookie's name. Immutable once constructed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cookie's payload.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the cookie's payload.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The stored, wire-ready text of an attribute.
    #[must_use]
    pub fn get(&self, attr: Attr) -> Option<&str> {
        self.attrs.get(&attr).map(String::as_str)
    }

    /// Returns the path directive, if set.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.get(Attr::Path)
    }

    /// Returns the domain directive, if set.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.get(Attr::Domain)
    }

    /// Returns the comment directive, if set.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.get(Attr::Comment)
    }

    /// The pre-formatted expiry date, if set.
    #[must_use]
    pub fn expires(&self) -> Option<&str> {
        self.get(Attr::Expires)
    }

    /// The Max-Age directive as a span, if set to a parseable count.
    #[must_use]
    pub fn max_age(&self) -> Option<Duration> {
        self.get(Attr::MaxAge)?.parse().ok().map(Duration::from_secs)
    }

    /// Returns true if the `secure` flag is present.
    #[must_use]
    pub fn secure(&self) -> bool {
        self.attrs.contains_key(&Attr::Secure)
    }

    /// Returns true if the `HttpOnly` flag is present.
    #[must_use]
    pub fn http_only(&self) -> bool {
        self.attrs.contains_key(&Attr::HttpOnly)
    }

    /// Set `attr` from any accepted value shape, normalizing it into
    /// wire-ready text.
    ///
    /// Empty, false and zero-equivalent values remove the attribute. A value
    /// shape the key cannot normalize (a span for `Path`, an instant for
    /// `Max-Age`) is a type mismatch reported immediately.
    pub fn set(&mut self, attr: Attr, value: impl Into<AttrValue>) -> Result<(), Error> {
        let text = match value.into() {
            AttrValue::Absent => None,
            AttrValue::Text(text) => Some(text),
            AttrValue::Flag(on) => on.then(|| "1".to_owned()),
            AttrValue::Int(n) => match attr {
                Attr::Expires => Some(serialize_cookie_date(n)),
                _ => Some(n.to_string()),
            },
            AttrValue::Span(span) => match attr {
                Attr::Expires => Some(serialize_cookie_date(span)),
                Attr::MaxAge => Some(span.as_secs().to_string()),
                _ => return Err(Error::attr_type(attr, "a time span")),
            },
            AttrValue::Instant(instant) => match attr {
                Attr::Expires => Some(serialize_cookie_date(instant)),
                _ => return Err(Error::attr_type(attr, "a date-time")),
            },
        };
        match text {
            Some(text) => self.put(attr, text),
            None => {
                self.attrs.remove(&attr);
            }
        }
        Ok(())
    }

    /// Remove `attr` from the bag.
    pub fn remove(&mut self, attr: Attr) {
        self.attrs.remove(&attr);
    }

    /// Set the `Path` attribute; empty removes it.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.put(Attr::Path, path.into());
    }

    /// Set the `Domain` attribute; empty removes it.
    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.put(Attr::Domain, domain.into());
    }

    /// Set the `Comment` attribute; empty removes it.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.put(Attr::Comment, comment.into());
    }

    /// Set `Max-Age` from a seconds count or a span, normalized to a decimal
    /// string of whole seconds. Zero removes the attribute.
    pub fn set_max_age(&mut self, max_age: impl Into<MaxAge>) {
        let seconds = match max_age.into() {
            MaxAge::Seconds(seconds) => seconds,
            MaxAge::Span(span) => i64::try_from(span.as_secs()).unwrap_or(i64::MAX),
        };
        self.put(Attr::MaxAge, seconds.to_string());
    }

    /// Set `expires` from any accepted date shape, normalized to the fixed
    /// cookie-date string.
    pub fn set_expires(&mut self, expires: impl Into<CookieDate>) {
        self.put(Attr::Expires, serialize_cookie_date(expires));
    }

    /// Set or clear the `secure` flag.
    pub fn set_secure(&mut self, secure: bool) {
        if secure {
            self.attrs.insert(Attr::Secure, "1".to_owned());
        } else {
            self.attrs.remove(&Attr::Secure);
        }
    }

    /// Set or clear the `HttpOnly` flag.
    pub fn set_http_only(&mut self, http_only: bool) {
        if http_only {
            self.attrs.insert(Attr::HttpOnly, "1".to_owned());
        } else {
            self.attrs.remove(&Attr::HttpOnly);
        }
    }

    /// Parser entry point: an unquoted wire value, stored verbatim.
    pub(crate) fn set_raw(&mut self, attr: Attr, value: Cow<'_, str>) {
        self.put(attr, value.into_owned());
    }

    // Insert normalized text, applying the sparsity rule: empty always
    // removes, and a Max-Age equal to zero removes.
    fn put(&mut self, attr: Attr, text: String) {
        let zero_max_age = attr == Attr::MaxAge && matches!(text.parse::<i64>(), Ok(0));
        if text.is_empty() || zero_max_age {
            self.attrs.remove(&attr);
        } else {
            self.attrs.insert(attr, text);
        }
    }
}

impl fmt::Display for Morsel {
    /// One `Set-Cookie`-style segment: `name=value`, value-bearing
    /// attributes in canonical order, presence flags last. The expiry date
    /// keeps its legacy literal quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, quote(&self.value))?;
        for (&attr, value) in &self.attrs {
            if attr.is_flag() {
                write!(f, "; {}", attr.display_name())?;
            } else if attr == Attr::Expires {
                write!(f, "; {}=\"{}\"", attr.display_name(), value)?;
            } else {
                write!(f, "; {}={}", attr.display_name(), quote(value))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_name_and_value() {
        let morsel = Morsel::new("session", "abc123");
        assert_eq!(morsel.to_string(), "session=abc123");
    }

    #[test]
    fn quotes_unsafe_values() {
        let morsel = Morsel::new("k", "a;b");
        assert_eq!(morsel.to_string(), "k=\"a\\073b\"");
    }

    #[test]
    #[should_panic(expected = "reserved attribute keyword")]
    fn reserved_name_panics() {
        let _ = Morsel::new("Max-Age", "10");
    }

    #[test]
    #[should_panic(expected = "require quoting")]
    fn unsafe_name_panics() {
        let _ = Morsel::new("bad;name", "v");
    }

    #[test]
    fn attributes_serialize_in_canonical_order() {
        let mut morsel = Morsel::new("id", "7");
        morsel.set_path("/");
        morsel.set_domain("example.com");
        morsel.set_max_age(3600i64);
        morsel.set_secure(true);
        morsel.set_http_only(true);
        assert_eq!(
            morsel.to_string(),
            "id=7; Domain=example.com; Max-Age=3600; Path=/; secure; HttpOnly"
        );
    }

    #[test]
    fn expires_keeps_literal_quotes() {
        let mut morsel = Morsel::new("id", "7");
        morsel.set_expires("Wed, 09-Jun-2021 10:18:14 GMT");
        assert_eq!(morsel.to_string(), "id=7; expires=\"Wed, 09-Jun-2021 10:18:14 GMT\"");
    }

    #[test]
    fn zero_and_empty_values_remove() {
        let mut morsel = Morsel::new("id", "7");
        morsel.set_max_age(0i64);
        assert_eq!(morsel.get(Attr::MaxAge), None);

        morsel.set_max_age(10i64);
        morsel.set_max_age(Duration::ZERO);
        assert_eq!(morsel.get(Attr::MaxAge), None);

        morsel.set_path("/tmp");
        morsel.set_path("");
        assert_eq!(morsel.path(), None);

        morsel.set_secure(true);
        morsel.set_secure(false);
        assert!(!morsel.secure());
    }

    #[test]
    fn set_removes_on_absent_and_false() {
        let mut morsel = Morsel::new("id", "7");
        morsel.set(Attr::Expires, "Thu, 01-Jan-1970 00:00:00 GMT").unwrap();
        morsel.set(Attr::Expires, None::<&str>).unwrap();
        assert_eq!(morsel.expires(), None);

        morsel.set(Attr::HttpOnly, true).unwrap();
        assert!(morsel.http_only());
        morsel.set(Attr::HttpOnly, false).unwrap();
        assert!(!morsel.http_only());
    }

    #[test]
    fn type_mismatches_error_immediately() {
        let mut morsel = Morsel::new("id", "7");
        assert!(morsel.set(Attr::Path, Duration::from_secs(1)).is_err());
        assert!(morsel.set(Attr::MaxAge, Utc::now()).is_err());
        assert!(morsel.set(Attr::MaxAge, Duration::from_secs(60)).is_ok());
        assert_eq!(morsel.get(Attr::MaxAge), Some("60"));
    }

    #[test]
    fn max_age_reads_back_as_span() {
        let mut morsel = Morsel::new("id", "7");
        morsel.set_max_age(Duration::from_secs(90));
        assert_eq!(morsel.max_age(), Some(Duration::from_secs(90)));
    }
}
