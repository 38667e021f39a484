//! Interop with the `http` crate's header types.
//!
//! The crate's output is header-value text; attaching it to a request or
//! response object belongs to the surrounding HTTP layer. These helpers
//! bridge the two without taking ownership of the header map's lifecycle.

use std::fmt;

use bytes::Bytes;
use http::header::{CACHE_CONTROL, COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};

use crate::cachecontrol::CacheControl;
use crate::cookie::CookieJar;
use crate::error::Result;

/// Convert any serialized header representation into a `HeaderValue`.
pub fn to_header_value<T: fmt::Display>(value: &T) -> Result<HeaderValue> {
    Ok(HeaderValue::from_maybe_shared(Bytes::from(value.to_string()))?)
}

/// Insert the jar's serialized form as the `Cookie` header.
///
/// An empty jar inserts nothing; a serialization that is not a valid header
/// value (quoting keeps output ASCII, so this does not happen for values
/// that round-tripped through the codec) is skipped.
pub fn add_cookie_header(headers: &mut HeaderMap, jar: &CookieJar) {
    if jar.is_empty() {
        return;
    }
    match to_header_value(jar) {
        Ok(value) => {
            headers.insert(COOKIE, value);
        }
        Err(error) => tracing::warn!(%error, "cookie jar did not serialize to a header value"),
    }
}

/// Append one `Set-Cookie` header per morsel in the jar.
pub fn append_set_cookie_headers(headers: &mut HeaderMap, jar: &CookieJar) {
    for morsel in jar {
        match to_header_value(&morsel) {
            Ok(value) => {
                headers.append(SET_COOKIE, value);
            }
            Err(error) => {
                tracing::warn!(cookie = morsel.name(), %error, "morsel did not serialize to a header value");
            }
        }
    }
}

/// Insert the directive map as the `Cache-Control` header. Empty maps
/// insert nothing.
pub fn add_cache_control_header(headers: &mut HeaderMap, control: &CacheControl) {
    if control.is_empty() {
        return;
    }
    match to_header_value(control) {
        Ok(value) => {
            headers.insert(CACHE_CONTROL, value);
        }
        Err(error) => tracing::warn!(%error, "cache-control did not serialize to a header value"),
    }
}
