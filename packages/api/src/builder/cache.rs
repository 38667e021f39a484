//! Fluent `Cache-Control` construction.
//!
//! Two builders, one per side of the exchange, each exposing only the
//! directives valid for that side plus the shared ones. Scope errors are
//! therefore unrepresentable here; the raw directive map remains reachable
//! through [`CacheControl`] for anything exotic.

use crumb_core::cachecontrol::{CacheControl, DirectiveValue, FieldList};
use crumb_core::header::to_header_value;
use crumb_core::Result;
use http::HeaderValue;

/// Builder for a request `Cache-Control` header.
///
/// # Examples
///
/// ```rust
/// use crumb::RequestCacheControl;
///
/// let header = RequestCacheControl::new()
///     .no_cache()
///     .max_stale_any()
///     .min_fresh(30)
///     .build()
///     .to_string();
///
/// assert_eq!(header, "max-stale, min-fresh=30, no-cache");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestCacheControl {
    control: CacheControl,
}

/// Builder for a response `Cache-Control` header.
///
/// # Examples
///
/// ```rust
/// use crumb::ResponseCacheControl;
///
/// let header = ResponseCacheControl::new()
///     .public()
///     .max_age(300)
///     .must_revalidate()
///     .build()
///     .to_string();
///
/// assert_eq!(header, "max-age=300, must-revalidate, public");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponseCacheControl {
    control: CacheControl,
}

// ===== impl RequestCacheControl =====

impl RequestCacheControl {
    /// Start an empty request header.
    #[must_use]
    pub fn new() -> RequestCacheControl {
        RequestCacheControl {
            control: CacheControl::request(),
        }
    }

    /// `no-cache`.
    #[must_use]
    pub fn no_cache(mut self) -> Self {
        self.control.set_directive("no-cache", None);
        self
    }

    /// `no-store`.
    #[must_use]
    pub fn no_store(mut self) -> Self {
        self.control.set_directive("no-store", None);
        self
    }

    /// `no-transform`.
    #[must_use]
    pub fn no_transform(mut self) -> Self {
        self.control.set_directive("no-transform", None);
        self
    }

    /// `max-age=seconds`.
    #[must_use]
    pub fn max_age(mut self, seconds: i64) -> Self {
        self.control.set_directive("max-age", Some(DirectiveValue::Int(seconds)));
        self
    }

    /// `max-stale` with no bound.
    #[must_use]
    pub fn max_stale_any(mut self) -> Self {
        self.control.set_directive("max-stale", None);
        self
    }

    /// `max-stale=seconds`.
    #[must_use]
    pub fn max_stale(mut self, seconds: i64) -> Self {
        self.control.set_directive("max-stale", Some(DirectiveValue::Int(seconds)));
        self
    }

    /// `min-fresh=seconds`.
    #[must_use]
    pub fn min_fresh(mut self, seconds: i64) -> Self {
        self.control.set_directive("min-fresh", Some(DirectiveValue::Int(seconds)));
        self
    }

    /// `only-if-cached`.
    #[must_use]
    pub fn only_if_cached(mut self) -> Self {
        self.control.set_directive("only-if-cached", None);
        self
    }

    /// Finish, yielding the directive map.
    #[must_use]
    pub fn build(self) -> CacheControl {
        self.control
    }

    /// Serialize straight into an `http::HeaderValue`.
    pub fn build_header_value(self) -> Result<HeaderValue> {
        to_header_value(&self.control)
    }
}

// ===== impl ResponseCacheControl =====

impl ResponseCacheControl {
    /// Start an empty response header.
    #[must_use]
    pub fn new() -> ResponseCacheControl {
        ResponseCacheControl {
            control: CacheControl::response(),
        }
    }

    /// `public`.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.control.set_directive("public", None);
        self
    }

    /// `private`, wholesale or naming header fields.
    #[must_use]
    pub fn private(mut self, fields: FieldList) -> Self {
        let value = match fields {
            FieldList::All => None,
            FieldList::Fields(fields) => Some(DirectiveValue::Str(fields)),
        };
        self.control.set_directive("private", value);
        self
    }

    /// `no-cache`.
    #[must_use]
    pub fn no_cache(mut self) -> Self {
        self.control.set_directive("no-cache", None);
        self
    }

    /// `no-store`.
    #[must_use]
    pub fn no_store(mut self) -> Self {
        self.control.set_directive("no-store", None);
        self
    }

    /// `no-transform`.
    #[must_use]
    pub fn no_transform(mut self) -> Self {
        self.control.set_directive("no-transform", None);
        self
    }

    /// `max-age=seconds`.
    #[must_use]
    pub fn max_age(mut self, seconds: i64) -> Self {
        self.control.set_directive("max-age", Some(DirectiveValue::Int(seconds)));
        self
    }

    /// `s-maxage=seconds`.
    #[must_use]
    pub fn s_maxage(mut self, seconds: i64) -> Self {
        self.control.set_directive("s-maxage", Some(DirectiveValue::Int(seconds)));
        self
    }

    /// `must-revalidate`.
    #[must_use]
    pub fn must_revalidate(mut self) -> Self {
        self.control.set_directive("must-revalidate", None);
        self
    }

    /// `proxy-revalidate`.
    #[must_use]
    pub fn proxy_revalidate(mut self) -> Self {
        self.control.set_directive("proxy-revalidate", None);
        self
    }

    /// Finish, yielding the directive map.
    #[must_use]
    pub fn build(self) -> CacheControl {
        self.control
    }

    /// Serialize straight into an `http::HeaderValue`.
    pub fn build_header_value(self) -> Result<HeaderValue> {
        to_header_value(&self.control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumb_core::cachecontrol::{Scope, Staleness};

    #[test]
    fn request_builder_sets_scope() {
        let cc = RequestCacheControl::new().no_store().build();
        assert_eq!(cc.scope(), Some(Scope::Request));
        assert!(cc.no_store());
    }

    #[test]
    fn staleness_variants() {
        let any = RequestCacheControl::new().max_stale_any().build();
        assert_eq!(any.max_stale(), Some(Staleness::Any));

        let bounded = RequestCacheControl::new().max_stale(120).build();
        assert_eq!(bounded.max_stale(), Some(Staleness::Seconds(120)));
    }

    #[test]
    fn private_field_list() {
        let cc = ResponseCacheControl::new()
            .private(FieldList::Fields("Set-Cookie".into()))
            .build();
        assert_eq!(cc.to_string(), "private=Set-Cookie");

        let cc = ResponseCacheControl::new().private(FieldList::All).build();
        assert_eq!(cc.to_string(), "private");
    }

    #[test]
    fn header_value_output() {
        let value = ResponseCacheControl::new()
            .max_age(60)
            .build_header_value()
            .unwrap();
        assert_eq!(value.to_str().unwrap(), "max-age=60");
    }
}
