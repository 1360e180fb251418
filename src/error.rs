//! Error types for URI parsing, resolution and percent-decoding.

use std::fmt;

/// Errors that can occur when parsing a URI reference.
///
/// Only input that cannot be split into components at all is rejected;
/// a malformed port or an odd host does not fail the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `:` appears before any other character, leaving an empty scheme
    EmptyScheme,
    /// An IP literal host opened with `[` but never closed
    UnterminatedIpLiteral,
    /// Unexpected character at position
    UnexpectedChar {
        /// The unexpected character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::EmptyScheme => write!(
                f,
                "scheme is empty; a leading ':' must be escaped as '%3A' in a relative reference"
            ),
            ParseErrorKind::UnterminatedIpLiteral => {
                write!(f, "IP literal host is missing its closing ']'")
            }
            ParseErrorKind::UnexpectedChar { char, position } => {
                write!(f, "unexpected character '{char}' at position {position}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur when resolving a reference against a base URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The base URI could not be parsed
    InvalidBase(ParseError),
    /// The reference could not be parsed
    InvalidReference(ParseError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase(e) => write!(f, "invalid base URI: {e}"),
            Self::InvalidReference(e) => write!(f, "invalid reference: {e}"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBase(e) | Self::InvalidReference(e) => Some(e),
        }
    }
}

/// Errors for percent-decoding into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The decoded octets do not form valid UTF-8
    InvalidUtf8 {
        /// Number of leading decoded bytes that were valid
        valid_up_to: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUtf8 { valid_up_to } => write!(
                f,
                "decoded octets are not valid UTF-8 after byte {valid_up_to}; use unescape_bytes for binary data"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}
