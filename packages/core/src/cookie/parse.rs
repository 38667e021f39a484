//! The `Cookie` header grammar.
//!
//! A single regular grammar, compiled once into process-wide immutable
//! state, locates every `key=value` occurrence in a raw header in
//! left-to-right order. No `;`-splitting happens first: fragments that do
//! not match the grammar are simply never produced, which is what makes the
//! parser tolerant of malformed separators.

use std::sync::LazyLock;

use regex::Regex;

/// Characters legal in a bare key or value token. Wider than RFC 6265 on
/// purpose: real traffic carries `@`, `:`, `/` and friends unquoted.
const LEGAL: &str = r"[\w~!@#$%^&*()_+=\-`.?|:/{}<>',]";

static COOKIE_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    // Value alternation is ordered: a double-quoted string (non-greedy
    // across any characters to the closing quote), an HTTP-date literal
    // (`Www, DD-Mon-YYYY HH:MM:SS GMT`), then a bare run of legal chars.
    let pattern = format!(
        r#"({LEGAL}+?)\s*=\s*("(?s:.)*?"|\w{{3}},\s[\w\-]{{9,11}}\s[\d:]{{8}}\sGMT|{LEGAL}*)"#
    );
    Regex::new(&pattern).expect("cookie grammar is a valid regex")
});

/// Scan `header` for `key=value` pairs, in order of appearance.
///
/// The returned values are raw: a quoted value still carries its quotes and
/// escapes, and must go through [`super::unquote`] before use.
pub fn tokenize(header: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
    COOKIE_GRAMMAR.captures_iter(header).map(|caps| {
        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = caps.get(2).map_or("", |m| m.as_str());
        (key, value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(header: &str) -> Vec<(&str, &str)> {
        tokenize(header).collect()
    }

    #[test]
    fn splits_simple_pairs() {
        assert_eq!(pairs("a=1; b=2"), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn empty_and_quoted_values() {
        assert_eq!(
            pairs("empty=; quoted=\"a;b\""),
            vec![("empty", ""), ("quoted", "\"a;b\"")]
        );
    }

    #[test]
    fn value_may_contain_equals() {
        assert_eq!(pairs("data=a=b=c"), vec![("data", "a=b=c")]);
    }

    #[test]
    fn recognizes_bare_date_values() {
        assert_eq!(
            pairs("expires=Wed, 09-Jun-2021 10:18:14 GMT; Path=/"),
            vec![("expires", "Wed, 09-Jun-2021 10:18:14 GMT"), ("Path", "/")]
        );
    }

    #[test]
    fn tolerates_malformed_separators() {
        // no semicolons at all; the scan still finds both pairs
        assert_eq!(pairs("a=1 b=2"), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn skips_fragments_without_equals() {
        assert_eq!(pairs("orphan; a=1"), vec![("a", "1")]);
        assert_eq!(pairs(""), Vec::<(&str, &str)>::new());
    }

    #[test]
    fn dollar_keys_are_tokenized() {
        // the jar drops them; the tokenizer itself must still see them
        assert_eq!(pairs("$Version=1; foo=bar"), vec![("$Version", "1"), ("foo", "bar")]);
    }

    #[test]
    fn whitespace_around_equals() {
        assert_eq!(pairs("a = 1; b =2"), vec![("a", "1"), ("b", "2")]);
    }
}
