//! # Crumb core
//!
//! Parsing and serialization for two HTTP header families:
//! `Cookie`/`Set-Cookie` values and `Cache-Control` directives. Raw wire
//! text becomes a structured representation that application code can read
//! and mutate safely, and serializes back deterministically, preserving
//! round-trip fidelity for values carrying reserved characters (`;`, `,`,
//! `"`, control bytes, non-ASCII).
//!
//! ## Design
//!
//! - **Permissive parsing**: the grammars mirror what legacy traffic
//!   actually carries; fragments that do not match are dropped, never
//!   reported. There is no parse-error type.
//! - **Sparse attributes**: an attribute or directive set to an empty,
//!   false or zero-equivalent value is removed, matching "not sent" on the
//!   wire.
//! - **Deterministic output**: cookies sort by name, directives sort by
//!   name, attributes follow a fixed canonical order.
//!
//! ## Usage
//!
//! ```rust
//! use crumb_core::prelude::*;
//!
//! let mut jar = CookieJar::parse("session=abc123; Path=/; theme=dark");
//! assert_eq!(jar.get("session").unwrap().path(), Some("/"));
//!
//! jar.get_mut("theme").unwrap().set_max_age(3600i64);
//! assert_eq!(jar.to_string(), "session=abc123; Path=/; theme=dark; Max-Age=3600");
//!
//! let cc = CacheControl::parse("no-cache, max-age=0");
//! assert_eq!(cc.max_age(), Some(0));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod cachecontrol;
pub mod cookie;
pub mod error;
pub mod header;
pub mod prelude;

pub use cachecontrol::{CacheControl, DirectiveValue, FieldList, Scope, Staleness};
pub use cookie::{
    Attr, AttrValue, CookieDate, CookieJar, MaxAge, Morsel, needs_quoting, quote,
    serialize_cookie_date, unquote,
};
pub use error::{Error, Result};
