//! Generic URI parsing, reference resolution, relativization and
//! percent-encoding.
//!
//! This crate decomposes URI references into their components following the
//! generic URI syntax, resolves relative references against a base URI,
//! computes the shortest relative reference between two URIs, and escapes or
//! unescapes percent-encoded text. Every operation is a pure function of its
//! inputs.
//!
//! # Overview
//!
//! ```text
//! [scheme ":"] ["//" [user "@"] host [":" port]] path ["?" query] ["#" fragment]
//! ```
//!
//! Parsing is lenient: hosts are not validated and a malformed port is
//! dropped rather than rejected. Only input that cannot be split into
//! components at all fails to parse.
//!
//! # Quick Start
//!
//! ```rust
//! use uri_toolkit::{relativize, resolve, ParsedUri};
//!
//! // Resolve references against a base
//! let base = "http://hadley.nz/a/b/c/d";
//! assert_eq!(resolve("..", base).unwrap(), "http://hadley.nz/a/b/");
//! assert_eq!(resolve("/x", base).unwrap(), "http://hadley.nz/x");
//!
//! // And go back the other way
//! assert_eq!(relativize("http://hadley.nz/a/c", "http://hadley.nz/a/b/"), "../c");
//!
//! // Access components
//! let uri = ParsedUri::parse("http://had.co.nz:1234/?a=1&b=2#def").unwrap();
//! assert_eq!(uri.authority().and_then(|a| a.port()), Some(1234));
//! assert_eq!(uri.query(), Some("a=1&b=2"));
//! ```
//!
//! # Percent-Encoding
//!
//! ```rust
//! use uri_toolkit::{escape, unescape, EscapeSet};
//!
//! assert_eq!(escape("a b c", &EscapeSet::default()), "a%20b%20c");
//! assert_eq!(unescape("a%20b%2fc").unwrap(), "a b/c");
//! ```
//!
//! # Path Algebra
//!
//! | Operation | Purpose |
//! |-----------|---------|
//! | [`remove_dot_segments`] | Drop `.` and resolve `..` segments |
//! | [`merge`] | Graft a relative path onto a base directory |
//! | [`common_prefix_len`] | Shared leading segments of two paths |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod component;
mod constants;
mod error;
mod path;
mod percent;
pub mod prelude;
mod relativize;
mod resolve;
mod uri;

pub use authority::Authority;
pub use component::ComponentRecord;
pub use constants::{
    AUTHORITY_PREFIX, DOT_SEGMENT, DOUBLE_DOT_SEGMENT, FRAGMENT_DELIMITER, QUERY_DELIMITER,
    SCHEME_DELIMITER, SEGMENT_DELIMITER, UNRESERVED_MARKS,
};
pub use error::{DecodeError, ParseError, ParseErrorKind, ResolveError};
pub use path::{common_prefix_len, merge, remove_dot_segments, UriPath};
pub use percent::{escape, unescape, unescape_bytes, EscapeSet};
pub use relativize::relativize;
pub use resolve::resolve;
pub use uri::ParsedUri;
