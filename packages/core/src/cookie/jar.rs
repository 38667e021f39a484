//! The ordered cookie container for one `Cookie` header.

use std::collections::BTreeMap;
use std::fmt;

use super::encoding::{needs_quoting, unquote};
use super::morsel::{Attr, Morsel};
use super::parse::tokenize;

/// An ordered mapping from cookie name to [`Morsel`], one jar per header.
///
/// Parsing is permissive: fragments that do not match the grammar, keys
/// beginning with `$`, attributes appearing before any cookie name, and
/// names that would require quoting are all dropped without error. Two
/// cookies with the same name never merge; the later one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieJar {
    cookies: BTreeMap<String, Morsel>,
}

// ===== impl CookieJar =====

impl CookieJar {
    /// Create an empty jar.
    #[must_use]
    pub fn new() -> CookieJar {
        CookieJar::default()
    }

    /// Build a jar from a raw `Cookie` header.
    #[must_use]
    pub fn parse(header: &str) -> CookieJar {
        let mut jar = CookieJar::new();
        jar.load(header);
        jar
    }

    /// Feed a raw header into the jar, creating and updating morsels.
    ///
    /// Attribute-looking keys attach to the most recently seen cookie name,
    /// never to the cookie whose name happens to match the attribute.
    pub fn load(&mut self, header: &str) {
        let mut current: Option<String> = None;
        for (key, raw) in tokenize(header) {
            if let Some(attr) = Attr::from_wire(key) {
                match current.as_deref().and_then(|name| self.cookies.get_mut(name)) {
                    Some(morsel) => morsel.set_raw(attr, unquote(raw)),
                    None => tracing::debug!(key, "attribute before any cookie name, dropped"),
                }
            } else if key.starts_with('$') {
                tracing::debug!(key, "RFC 2965 metadata key, dropped");
            } else {
                self.insert(key, unquote(raw));
                current = Some(key.to_owned());
            }
        }
    }

    /// Insert a fresh morsel for `name`, replacing any existing one.
    ///
    /// A name that requires quoting cannot appear on the wire as a cookie
    /// name and is dropped. Reserved attribute keywords panic, as in
    /// [`Morsel::new`]: reaching here with one is a caller bug, the parser
    /// routes them away before insertion.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if needs_quoting(&name) {
            tracing::debug!(name = %name, "cookie name requires quoting, dropped");
            return;
        }
        let morsel = Morsel::new(name, value);
        self.cookies.insert(morsel.name().to_owned(), morsel);
    }

    /// Insert an already-built morsel under its own name.
    pub fn insert_morsel(&mut self, morsel: Morsel) {
        self.cookies.insert(morsel.name().to_owned(), morsel);
    }

    /// Look up a cookie by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Morsel> {
        self.cookies.get(name)
    }

    /// Look up a cookie by name, mutably.
    #[must_use]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Morsel> {
        self.cookies.get_mut(name)
    }

    /// Remove a cookie by name, returning it if present.
    pub fn remove(&mut self, name: &str) -> Option<Morsel> {
        self.cookies.remove(name)
    }

    /// Returns true if a cookie named `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    /// Number of cookies held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Returns true if the jar holds no cookies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Iterate morsels in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Morsel> {
        self.cookies.values()
    }
}

impl fmt::Display for CookieJar {
    /// Every morsel's serialized form, sorted by cookie name, joined with
    /// `; `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for morsel in self.cookies.values() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{morsel}")?;
        }
        Ok(())
    }
}

impl FromIterator<Morsel> for CookieJar {
    fn from_iter<I: IntoIterator<Item = Morsel>>(iter: I) -> CookieJar {
        let mut jar = CookieJar::new();
        for morsel in iter {
            jar.insert_morsel(morsel);
        }
        jar
    }
}

impl<'a> IntoIterator for &'a CookieJar {
    type Item = &'a Morsel;
    type IntoIter = std::collections::btree_map::Values<'a, String, Morsel>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.values()
    }
}
