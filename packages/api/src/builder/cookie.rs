//! Fluent `Set-Cookie` construction.

use crumb_core::cookie::{CookieDate, MaxAge, Morsel};
use crumb_core::header::to_header_value;
use crumb_core::{CookieJar, Result};
use http::HeaderValue;

/// Builder for one `Set-Cookie` header value.
///
/// Every method routes through the core typed setters, so values are
/// normalized and quoted exactly as they would be on a [`Morsel`] mutated
/// directly.
///
/// # Examples
///
/// ```rust
/// use crumb::SetCookie;
///
/// let header = SetCookie::new("session", "abc123")
///     .path("/")
///     .max_age(3600i64)
///     .secure()
///     .http_only()
///     .build();
///
/// assert_eq!(header, "session=abc123; Max-Age=3600; Path=/; secure; HttpOnly");
/// ```
#[derive(Debug, Clone)]
pub struct SetCookie {
    morsel: Morsel,
}

impl SetCookie {
    /// Start a cookie named `name` holding `value`.
    ///
    /// # Panics
    ///
    /// As with [`Morsel::new`]: a name colliding with a reserved attribute
    /// keyword, or requiring quoting, is a caller bug.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> SetCookie {
        SetCookie {
            morsel: Morsel::new(name, value),
        }
    }

    /// Set the `Path` attribute.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.morsel.set_path(path);
        self
    }

    /// Set the `Domain` attribute.
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.morsel.set_domain(domain);
        self
    }

    /// Set the `Comment` attribute.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.morsel.set_comment(comment);
        self
    }

    /// Set `Max-Age` from seconds or a span; zero removes it.
    #[must_use]
    pub fn max_age(mut self, max_age: impl Into<MaxAge>) -> Self {
        self.morsel.set_max_age(max_age);
        self
    }

    /// Set the expiry date from any accepted shape.
    #[must_use]
    pub fn expires(mut self, expires: impl Into<CookieDate>) -> Self {
        self.morsel.set_expires(expires);
        self
    }

    /// Set the `secure` flag.
    #[must_use]
    pub fn secure(mut self) -> Self {
        self.morsel.set_secure(true);
        self
    }

    /// Set the `HttpOnly` flag.
    #[must_use]
    pub fn http_only(mut self) -> Self {
        self.morsel.set_http_only(true);
        self
    }

    /// Serialize into the `Set-Cookie` header value.
    #[must_use]
    pub fn build(self) -> String {
        self.morsel.to_string()
    }

    /// Serialize straight into an `http::HeaderValue`.
    pub fn build_header_value(self) -> Result<HeaderValue> {
        to_header_value(&self.morsel)
    }

    /// Hand over the underlying morsel, e.g. to drop into a [`CookieJar`].
    #[must_use]
    pub fn into_morsel(self) -> Morsel {
        self.morsel
    }
}

impl From<SetCookie> for Morsel {
    fn from(builder: SetCookie) -> Morsel {
        builder.into_morsel()
    }
}

impl FromIterator<SetCookie> for CookieJar {
    fn from_iter<I: IntoIterator<Item = SetCookie>>(iter: I) -> CookieJar {
        iter.into_iter().map(SetCookie::into_morsel).collect()
    }
}
