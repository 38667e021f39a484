//! The `Cache-Control` directive map and its typed accessors.

use std::collections::BTreeMap;
use std::fmt;

use super::directive::{DirectiveValue, FieldList, Scope, Staleness};
use super::parse::parse_directives;
use crate::error::Error;

/// A parsed `Cache-Control` header: directive name to optional value.
///
/// Directives are stored sparsely; absent means "not sent". Typed setters
/// remove the directive when given the absent/false/default value, and the
/// scope-restricted ones refuse to apply to the wrong side of the exchange.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheControl {
    directives: BTreeMap<String, Option<DirectiveValue>>,
    scope: Option<Scope>,
}

// ===== impl CacheControl =====

impl CacheControl {
    /// An empty, unscoped directive map.
    #[must_use]
    pub fn new() -> CacheControl {
        CacheControl::default()
    }

    /// An empty map for a request header.
    #[must_use]
    pub fn request() -> CacheControl {
        CacheControl {
            directives: BTreeMap::new(),
            scope: Some(Scope::Request),
        }
    }

    /// An empty map for a response header.
    #[must_use]
    pub fn response() -> CacheControl {
        CacheControl {
            directives: BTreeMap::new(),
            scope: Some(Scope::Response),
        }
    }

    /// Parse a raw header. Malformed fragments are dropped, repeated
    /// directives keep the last occurrence.
    #[must_use]
    pub fn parse(header: &str) -> CacheControl {
        CacheControl::parse_scoped(header, None)
    }

    /// Parse a raw header for a known side of the exchange.
    #[must_use]
    pub fn parse_scoped(header: &str, scope: Option<Scope>) -> CacheControl {
        let mut directives = BTreeMap::new();
        for (name, value) in parse_directives(header) {
            directives.insert(name.to_owned(), value);
        }
        CacheControl { directives, scope }
    }

    /// The side of the exchange this header describes, if known.
    #[must_use]
    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    /// Raw read of a directive: `None` if absent, `Some(None)` for a bare
    /// flag, `Some(Some(_))` for a valued directive.
    #[must_use]
    pub fn directive(&self, name: &str) -> Option<Option<&DirectiveValue>> {
        self.directives.get(name).map(Option::as_ref)
    }

    /// Raw write of a directive; replaces any existing entry.
    pub fn set_directive(&mut self, name: impl Into<String>, value: Option<DirectiveValue>) {
        self.directives.insert(name.into(), value);
    }

    /// Remove a directive entirely.
    pub fn remove_directive(&mut self, name: &str) {
        self.directives.remove(name);
    }

    /// Returns true if no directives are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    fn flag(&self, name: &str) -> bool {
        self.directives.contains_key(name)
    }

    fn set_flag(&mut self, name: &str, on: bool) {
        if on {
            self.directives.insert(name.to_owned(), None);
        } else {
            self.directives.remove(name);
        }
    }

    fn int(&self, name: &str) -> Option<i64> {
        self.directives.get(name)?.as_ref()?.as_int()
    }

    fn set_int(&mut self, name: &str, seconds: Option<i64>) {
        match seconds {
            Some(n) => {
                self.directives.insert(name.to_owned(), Some(DirectiveValue::Int(n)));
            }
            None => {
                self.directives.remove(name);
            }
        }
    }

    fn field_list(&self, name: &str) -> Option<FieldList> {
        match self.directives.get(name)? {
            None => Some(FieldList::All),
            Some(value) => Some(FieldList::Fields(value.to_string())),
        }
    }

    fn set_field_list(&mut self, name: &str, fields: Option<FieldList>) {
        match fields {
            Some(FieldList::All) => {
                self.directives.insert(name.to_owned(), None);
            }
            Some(FieldList::Fields(fields)) => {
                self.directives
                    .insert(name.to_owned(), Some(DirectiveValue::Str(fields)));
            }
            None => {
                self.directives.remove(name);
            }
        }
    }

    fn check_scope(&self, directive: &'static str, required: Scope) -> Result<(), Error> {
        match self.scope {
            Some(scope) if scope != required => Err(Error::directive_scope(directive, required)),
            _ => Ok(()),
        }
    }

    // Shared directives.

    /// `no-cache`: forbid serving from cache, wholesale or per field.
    #[must_use]
    pub fn no_cache(&self) -> Option<FieldList> {
        self.field_list("no-cache")
    }

    pub fn set_no_cache(&mut self, fields: Option<FieldList>) {
        self.set_field_list("no-cache", fields);
    }

    /// `no-store`: forbid storing the message at all.
    #[must_use]
    pub fn no_store(&self) -> bool {
        self.flag("no-store")
    }

    pub fn set_no_store(&mut self, on: bool) {
        self.set_flag("no-store", on);
    }

    /// `no-transform`: forbid intermediary transformations.
    #[must_use]
    pub fn no_transform(&self) -> bool {
        self.flag("no-transform")
    }

    pub fn set_no_transform(&mut self, on: bool) {
        self.set_flag("no-transform", on);
    }

    /// `max-age` in seconds.
    #[must_use]
    pub fn max_age(&self) -> Option<i64> {
        self.int("max-age")
    }

    pub fn set_max_age(&mut self, seconds: Option<i64>) {
        self.set_int("max-age", seconds);
    }

    // Request-only directives.

    /// `max-stale`: how stale a cached response may be.
    #[must_use]
    pub fn max_stale(&self) -> Option<Staleness> {
        match self.directives.get("max-stale")? {
            None => Some(Staleness::Any),
            Some(value) => value.as_int().map(Staleness::Seconds),
        }
    }

    pub fn set_max_stale(&mut self, staleness: Option<Staleness>) -> Result<(), Error> {
        self.check_scope("max-stale", Scope::Request)?;
        match staleness {
            Some(Staleness::Any) => {
                self.directives.insert("max-stale".to_owned(), None);
            }
            Some(Staleness::Seconds(n)) => {
                self.set_int("max-stale", Some(n));
            }
            None => {
                self.directives.remove("max-stale");
            }
        }
        Ok(())
    }

    /// `min-fresh` in seconds.
    #[must_use]
    pub fn min_fresh(&self) -> Option<i64> {
        self.int("min-fresh")
    }

    pub fn set_min_fresh(&mut self, seconds: Option<i64>) -> Result<(), Error> {
        self.check_scope("min-fresh", Scope::Request)?;
        self.set_int("min-fresh", seconds);
        Ok(())
    }

    /// `only-if-cached`: only answer from cache.
    #[must_use]
    pub fn only_if_cached(&self) -> bool {
        self.flag("only-if-cached")
    }

    pub fn set_only_if_cached(&mut self, on: bool) -> Result<(), Error> {
        self.check_scope("only-if-cached", Scope::Request)?;
        self.set_flag("only-if-cached", on);
        Ok(())
    }

    // Response-only directives.

    /// `public`: any cache may store the response.
    #[must_use]
    pub fn public(&self) -> bool {
        self.flag("public")
    }

    pub fn set_public(&mut self, on: bool) -> Result<(), Error> {
        self.check_scope("public", Scope::Response)?;
        self.set_flag("public", on);
        Ok(())
    }

    /// `private`: only a private cache may store, wholesale or per field.
    #[must_use]
    pub fn private(&self) -> Option<FieldList> {
        self.field_list("private")
    }

    pub fn set_private(&mut self, fields: Option<FieldList>) -> Result<(), Error> {
        self.check_scope("private", Scope::Response)?;
        self.set_field_list("private", fields);
        Ok(())
    }

    /// `must-revalidate`: stale responses must be revalidated.
    #[must_use]
    pub fn must_revalidate(&self) -> bool {
        self.flag("must-revalidate")
    }

    pub fn set_must_revalidate(&mut self, on: bool) -> Result<(), Error> {
        self.check_scope("must-revalidate", Scope::Response)?;
        self.set_flag("must-revalidate", on);
        Ok(())
    }

    /// `proxy-revalidate`: like `must-revalidate`, for shared caches.
    #[must_use]
    pub fn proxy_revalidate(&self) -> bool {
        self.flag("proxy-revalidate")
    }

    pub fn set_proxy_revalidate(&mut self, on: bool) -> Result<(), Error> {
        self.check_scope("proxy-revalidate", Scope::Response)?;
        self.set_flag("proxy-revalidate", on);
        Ok(())
    }

    /// `s-maxage` in seconds, for shared caches.
    #[must_use]
    pub fn s_maxage(&self) -> Option<i64> {
        self.int("s-maxage")
    }

    pub fn set_s_maxage(&mut self, seconds: Option<i64>) -> Result<(), Error> {
        self.check_scope("s-maxage", Scope::Response)?;
        self.set_int("s-maxage", seconds);
        Ok(())
    }
}

fn value_needs_quotes(value: &str) -> bool {
    !value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

impl fmt::Display for CacheControl {
    /// Directives sorted by name, bare flags as the name alone, values
    /// quoted only when they stray outside token characters, joined with
    /// `, `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in &self.directives {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            match value {
                None => f.write_str(name)?,
                Some(value) => {
                    let text = value.to_string();
                    if value_needs_quotes(&text) {
                        write!(f, "{name}=\"{text}\"")?;
                    } else {
                        write!(f, "{name}={text}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_ints_flags_and_strings() {
        let cc = CacheControl::parse(r#"max-age=0, no-cache, private="Cookie""#);
        assert_eq!(cc.max_age(), Some(0));
        assert_eq!(cc.no_cache(), Some(FieldList::All));
        assert_eq!(cc.private(), Some(FieldList::Fields("Cookie".into())));
    }

    #[test]
    fn serializes_sorted_with_selective_quoting() {
        let cc = CacheControl::parse(r#"no-cache, private="Set-Cookie, X-Auth", max-age=60"#);
        assert_eq!(
            cc.to_string(),
            r#"max-age=60, no-cache, private="Set-Cookie, X-Auth""#
        );
    }

    #[test]
    fn default_values_remove_directives() {
        let mut cc = CacheControl::response();
        cc.set_max_age(Some(60));
        cc.set_max_age(None);
        cc.set_public(true).unwrap();
        cc.set_public(false).unwrap();
        assert!(cc.is_empty());
        assert_eq!(cc.to_string(), "");
    }

    #[test]
    fn scope_violations_error() {
        let mut response = CacheControl::response();
        assert!(response.set_max_stale(Some(Staleness::Any)).is_err());
        assert!(response.set_s_maxage(Some(30)).is_ok());

        let mut request = CacheControl::request();
        assert!(request.set_public(true).is_err());
        assert!(request.set_only_if_cached(true).is_ok());

        // unscoped accepts everything
        let mut any = CacheControl::new();
        assert!(any.set_public(true).is_ok());
        assert!(any.set_max_stale(Some(Staleness::Seconds(5))).is_ok());
    }

    #[test]
    fn bare_directives_read_as_wildcards() {
        let cc = CacheControl::parse("no-cache, max-stale");
        assert_eq!(cc.no_cache(), Some(FieldList::All));
        assert_eq!(cc.max_stale(), Some(Staleness::Any));
        assert_eq!(cc.max_age(), None);
    }

    #[test]
    fn last_occurrence_wins() {
        let cc = CacheControl::parse("max-age=1, max-age=2");
        assert_eq!(cc.max_age(), Some(2));
    }
}
