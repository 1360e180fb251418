//! Percent-encoding and decoding of URI text.
//!
//! Escaping works on the UTF-8 bytes of the input: every byte outside the
//! unreserved set (`A-Z a-z 0-9 - _ . ~`) and outside the caller's
//! exceptions becomes `%XX` with uppercase hex digits.
//!
//! Decoding is permissive. A `%` that is not followed by two hex digits is
//! copied through literally. Only the conversion of the decoded octets back
//! into text can fail, when they are not valid UTF-8.

use std::fmt;

use crate::constants::{HEX_DIGITS, UNRESERVED_MARKS};
use crate::error::DecodeError;

/// The set of bytes that [`escape`] leaves untouched.
///
/// Always contains the unreserved characters. Extra exceptions are added
/// from a string; only its ASCII characters are honored, since leaving
/// some bytes of a multi-byte character unescaped would not be valid text.
///
/// # Examples
///
/// ```
/// use uri_toolkit::{escape, EscapeSet};
///
/// assert_eq!(escape("a/b c", &EscapeSet::unreserved()), "a%2Fb%20c");
/// assert_eq!(escape("a/b c", &EscapeSet::new("/")), "a/b%20c");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeSet(u128);

impl EscapeSet {
    /// Creates a set of the unreserved characters plus the ASCII characters of `exceptions`.
    #[must_use]
    pub fn new(exceptions: &str) -> Self {
        Self::unreserved().with_exceptions(exceptions)
    }

    /// Returns the set of unreserved characters only.
    #[must_use]
    pub const fn unreserved() -> Self {
        let mut bits = 0u128;
        let mut b = 0u8;
        while b < 128 {
            if b.is_ascii_alphanumeric() {
                bits |= 1 << b;
            }
            b += 1;
        }
        let marks = UNRESERVED_MARKS.as_bytes();
        let mut i = 0;
        while i < marks.len() {
            bits |= 1 << marks[i];
            i += 1;
        }
        Self(bits)
    }

    /// Returns a new set that also leaves the ASCII characters of `exceptions` unescaped.
    #[must_use]
    pub fn with_exceptions(self, exceptions: &str) -> Self {
        let bits = exceptions
            .bytes()
            .filter(u8::is_ascii)
            .fold(self.0, |bits, b| bits | (1 << b));
        Self(bits)
    }

    /// Returns true if `byte` is copied through by [`escape`].
    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        byte < 128 && self.0 & (1 << byte) != 0
    }
}

impl Default for EscapeSet {
    fn default() -> Self {
        Self::unreserved()
    }
}

impl fmt::Debug for EscapeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members: String = (0u8..128)
            .filter(|&b| self.contains(b))
            .map(char::from)
            .collect();
        f.debug_tuple("EscapeSet").field(&members).finish()
    }
}

/// Percent-encodes every byte of `text` that `set` does not contain.
///
/// # Examples
///
/// ```
/// use uri_toolkit::{escape, EscapeSet};
///
/// assert_eq!(escape("a b c", &EscapeSet::default()), "a%20b%20c");
/// assert_eq!(escape("µ", &EscapeSet::default()), "%C2%B5");
/// ```
#[must_use]
pub fn escape(text: &str, set: &EscapeSet) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        if set.contains(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
            out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
        }
    }
    out
}

/// Decodes every well-formed `%XX` triplet in `text` into its octet.
///
/// Malformed triplets (a trailing `%`, or `%` followed by non-hex digits)
/// are copied through as literal bytes. This never fails.
///
/// # Examples
///
/// ```
/// use uri_toolkit::unescape_bytes;
///
/// assert_eq!(unescape_bytes("%41%zz%"), b"A%zz%");
/// ```
#[must_use]
pub fn unescape_bytes(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).copied().and_then(hex_value),
                bytes.get(i + 2).copied().and_then(hex_value),
            ) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

/// Decodes `text` like [`unescape_bytes`] and returns the result as text.
///
/// # Errors
///
/// Returns `DecodeError::InvalidUtf8` if the decoded octets are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use uri_toolkit::unescape;
///
/// assert_eq!(unescape("a%20b%2fc").unwrap(), "a b/c");
/// assert_eq!(unescape("%C2%B5").unwrap(), "µ");
/// assert!(unescape("%C2").is_err());
/// ```
pub fn unescape(text: &str) -> Result<String, DecodeError> {
    String::from_utf8(unescape_bytes(text)).map_err(|e| DecodeError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
