//! Directive value shapes shared by parsing and the typed accessors.

use std::fmt;

/// Which header a [`super::CacheControl`] describes. Some directives are
/// only valid on one side of the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// A `Cache-Control` request header.
    Request,
    /// A `Cache-Control` response header.
    Response,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Scope::Request => "request",
            Scope::Response => "response",
        })
    }
}

/// The value of a `name=value` directive. A value made entirely of decimal
/// digits is kept as an integer, everything else as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveValue {
    Int(i64),
    Str(String),
}

impl DirectiveValue {
    /// Coerce raw directive text the way the grammar does: decimal integers
    /// stay integers.
    #[must_use]
    pub fn coerce(raw: &str) -> DirectiveValue {
        match raw.parse() {
            Ok(n) => DirectiveValue::Int(n),
            Err(_) => DirectiveValue::Str(raw.to_owned()),
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DirectiveValue::Int(n) => Some(*n),
            DirectiveValue::Str(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DirectiveValue::Int(_) => None,
            DirectiveValue::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for DirectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveValue::Int(n) => write!(f, "{n}"),
            DirectiveValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DirectiveValue {
    fn from(value: i64) -> Self {
        DirectiveValue::Int(value)
    }
}

impl From<&str> for DirectiveValue {
    fn from(value: &str) -> Self {
        DirectiveValue::Str(value.to_owned())
    }
}

impl From<String> for DirectiveValue {
    fn from(value: String) -> Self {
        DirectiveValue::Str(value)
    }
}

/// Reading of `no-cache` or `private`, which may apply wholesale (a bare
/// flag, `*` in the original notation) or name specific header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldList {
    /// The directive applies to the whole message.
    All,
    /// The directive names specific header fields.
    Fields(String),
}

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldList::All => f.write_str("*"),
            FieldList::Fields(fields) => f.write_str(fields),
        }
    }
}

/// Reading of `max-stale`, which may accept any staleness (bare) or bound
/// it in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// Any staleness is acceptable.
    Any,
    /// Stale responses up to this many seconds old are acceptable.
    Seconds(i64),
}
