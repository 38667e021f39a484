//! `Cookie` / `Set-Cookie` header handling.
//!
//! This module provides the full parse-mutate-serialize cycle:
//! - Quoting and unquoting of cookie values ([`quote`], [`unquote`])
//! - Permissive tokenization of raw `Cookie` headers ([`tokenize`])
//! - A per-cookie value and attribute bag ([`Morsel`])
//! - The ordered per-header container ([`CookieJar`])
//! - Cookie expiry date serialization ([`serialize_cookie_date`])

pub mod date;
pub mod encoding;
pub mod jar;
pub mod morsel;
pub mod parse;

pub use date::{COOKIE_DATE_FORMAT, CookieDate, serialize_cookie_date};
pub use encoding::{needs_quoting, quote, unquote};
pub use jar::CookieJar;
pub use morsel::{Attr, AttrValue, MaxAge, Morsel};
pub use parse::tokenize;
