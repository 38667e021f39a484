//! # Crumb
//!
//! Cookie and `Cache-Control` header handling with a fluent builder API.
//! Parsing, mutation and serialization live in [`crumb_core`]; this crate
//! re-exports the codec types and adds chainable construction.
//!
//! ## Usage
//!
//! ```rust
//! use crumb::{CookieJar, SetCookie};
//!
//! // Parse an incoming Cookie header.
//! let jar = CookieJar::parse("session=abc123; Path=/; theme=dark");
//! assert_eq!(jar.get("theme").unwrap().value(), "dark");
//!
//! // Build an outgoing Set-Cookie header.
//! let header = SetCookie::new("session", "abc123")
//!     .path("/")
//!     .http_only()
//!     .build();
//! assert_eq!(header, "session=abc123; Path=/; HttpOnly");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{RequestCacheControl, ResponseCacheControl, SetCookie};

// Re-export the codec types from the core package.
pub use crumb_core::cachecontrol::{CacheControl, DirectiveValue, FieldList, Scope, Staleness};
pub use crumb_core::cookie::{
    Attr, AttrValue, CookieDate, CookieJar, MaxAge, Morsel, needs_quoting, quote,
    serialize_cookie_date, unquote,
};
pub use crumb_core::header::{
    add_cache_control_header, add_cookie_header, append_set_cookie_headers, to_header_value,
};
pub use crumb_core::{Error, Result};
