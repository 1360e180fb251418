//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_toolkit::prelude::*;
//!
//! let uri = ParsedUri::parse("http://example.com/a/b").unwrap();
//! assert_eq!(uri.resolve(&ParsedUri::parse("c").unwrap()).to_string(), "http://example.com/a/c");
//! ```

pub use crate::{
    // Core types
    Authority, ComponentRecord, EscapeSet, ParsedUri, UriPath,
    // Operations
    escape, relativize, resolve, unescape, unescape_bytes,
    // Errors
    DecodeError, ParseError, ParseErrorKind, ResolveError,
};
