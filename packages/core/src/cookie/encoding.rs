//! Cookie value quoting and unquoting.
//!
//! Values made entirely of safe characters travel bare on the wire. Anything
//! else is wrapped in double quotes with every unsafe byte escaped, either as
//! a backslashed literal (`\"`, `\\`) or as a three-digit octal sequence
//! (`\377`). [`unquote`] reverses the transform and is total: input that is
//! not quoted passes through unchanged.

use std::borrow::Cow;
use std::fmt::Write as _;

/// Characters that never need escaping inside a cookie value.
///
/// Wider than the RFC 6265 token set so that common values (paths, HTTP
/// dates, comma-separated lists) serialize without quoting.
const NO_ESCAPE_CHARS: &[u8] = b"!#$%&'*+-.^_`|~/:, ";

fn is_no_escape(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || NO_ESCAPE_CHARS.contains(&byte)
}

/// Returns true if `value` contains any byte that cannot travel bare.
#[must_use]
pub fn needs_quoting(value: &str) -> bool {
    value.bytes().any(|byte| !is_no_escape(byte))
}

/// Quote `value` for the wire.
///
/// Already-safe values are returned borrowed and unchanged; `quote` is
/// idempotent on them. Unsafe values are wrapped in double quotes with each
/// byte of their UTF-8 encoding mapped through the escape table, so the
/// output is always pure ASCII.
#[must_use]
pub fn quote(value: &str) -> Cow<'_, str> {
    if !needs_quoting(value) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for byte in value.bytes() {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            byte if is_no_escape(byte) => out.push(char::from(byte)),
            byte => {
                let _ = write!(out, "\\{byte:03o}");
            }
        }
    }
    out.push('"');
    Cow::Owned(out)
}

/// Strip a surrounding quote pair and decode backslash escapes.
///
/// `\` followed by three octal digits (leading digit 0-3) decodes to that
/// byte; `\` followed by any other character decodes to that character.
/// Decoded bytes reassemble as UTF-8; a sequence that is not valid UTF-8 is
/// read as Latin-1, one byte per character. Input without a surrounding
/// quote pair passes through unchanged.
#[must_use]
pub fn unquote(value: &str) -> Cow<'_, str> {
    let inner = match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(inner) => inner,
        None => return Cow::Borrowed(value),
    };
    if !inner.contains('\\') {
        return Cow::Borrowed(inner);
    }

    let bytes = inner.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 == bytes.len() {
            out.push(bytes[i]);
            i += 1;
        } else if i + 3 < bytes.len()
            && matches!(bytes[i + 1], b'0'..=b'3')
            && matches!(bytes[i + 2], b'0'..=b'7')
            && matches!(bytes[i + 3], b'0'..=b'7')
        {
            out.push((bytes[i + 1] - b'0') * 64 + (bytes[i + 2] - b'0') * 8 + (bytes[i + 3] - b'0'));
            i += 4;
        } else {
            // backslash is ASCII, so i + 1 is a char boundary
            let escaped = &inner[i + 1..];
            let len = escaped.chars().next().map_or(0, char::len_utf8);
            out.extend_from_slice(&escaped.as_bytes()[..len]);
            i += 1 + len;
        }
    }

    match String::from_utf8(out) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(err) => Cow::Owned(err.into_bytes().iter().map(|&b| char::from(b)).collect()),
    }
}
