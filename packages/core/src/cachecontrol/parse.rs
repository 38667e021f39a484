//! The `Cache-Control` token/value grammar.
//!
//! Same shape as the cookie scanner: one process-wide compiled grammar, a
//! global find-all, and no error path. A directive is a token optionally
//! followed by `=` and either a quoted string or a bare token.

use std::sync::LazyLock;

use regex::Regex;

use super::directive::DirectiveValue;

static DIRECTIVE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z][a-zA-Z_-]*)\s*(?:=(?:"([^"]*)"|([^ \t",;]*)))?"#)
        .expect("cache-control grammar is a valid regex")
});

/// Scan `header` for directives, in order of appearance.
///
/// A directive without a value, or with an empty one, yields `None`; decimal
/// integer values are coerced to [`DirectiveValue::Int`].
pub fn parse_directives(header: &str) -> impl Iterator<Item = (&str, Option<DirectiveValue>)> + '_ {
    DIRECTIVE_GRAMMAR.captures_iter(header).map(|caps| {
        let name = caps.get(1).map_or("", |m| m.as_str());
        let raw = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .filter(|raw| !raw.is_empty());
        (name, raw.map(DirectiveValue::coerce))
    })
}
