//! Convenience re-exports of the types most callers need.

pub use crate::cachecontrol::{CacheControl, DirectiveValue, FieldList, Scope, Staleness};
pub use crate::cookie::{Attr, AttrValue, CookieDate, CookieJar, MaxAge, Morsel};
pub use crate::error::{Error, Result};
