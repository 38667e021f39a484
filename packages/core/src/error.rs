//! Error types.
//!
//! Parsing never fails in this crate; errors only surface from typed
//! mutation (an attribute value shape the key cannot normalize, a directive
//! set on the wrong side of the exchange) and from header-value conversion.

use crate::cachecontrol::Scope;
use crate::cookie::Attr;

/// A `Result` alias where the `Err` case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by typed mutation and header interop.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The attribute cannot normalize the given value shape.
    #[error("attribute `{attr}` cannot take {given}")]
    AttrType {
        /// The attribute being set.
        attr: Attr,
        /// Description of the rejected value shape.
        given: &'static str,
    },

    /// The directive only applies to the other side of the exchange.
    #[error("directive `{directive}` only applies to {scope} Cache-Control")]
    DirectiveScope {
        /// The directive being set.
        directive: &'static str,
        /// The scope the directive requires.
        scope: Scope,
    },

    /// Serialized text could not become an `http` header value.
    #[error("serialized header value is invalid")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

impl Error {
    pub(crate) fn attr_type(attr: Attr, given: &'static str) -> Error {
        Error::AttrType { attr, given }
    }

    pub(crate) fn directive_scope(directive: &'static str, scope: Scope) -> Error {
        Error::DirectiveScope { directive, scope }
    }
}
