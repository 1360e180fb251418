//! Index-aligned vector operations over `uri-toolkit`.
//!
//! Every operation takes a slice of strings and returns a vector of the same
//! length, where output `i` belongs to input `i`. Parameters that must be a
//! single value (the base URI, the escape exceptions) are still taken as
//! slices so that callers marshalling vectors from another runtime get an
//! explicit [`BatchError::InvalidArgument`] instead of a silent choice.
//!
//! # Quick Start
//!
//! ```rust
//! use uri_toolkit_batch::{absolute, escape, parse, relative, unescape};
//!
//! let abs = absolute(&[".", "..", "/", "/x"], &["http://hadley.nz/a/b/c/d"]).unwrap();
//! assert_eq!(abs[0].as_deref(), Some("http://hadley.nz/a/b/c/"));
//!
//! let rel = relative(&["http://hadley.nz/a/c"], &["http://hadley.nz/a/b/"]).unwrap();
//! assert_eq!(rel, vec!["../c"]);
//!
//! let rows = parse(&["http://had.co.nz:1234/?a=1&b=2#def", "not a uri"]);
//! assert_eq!(rows[0].port, Some(1234));
//! assert_eq!(rows.len(), 2);
//!
//! assert_eq!(escape(&["a b c"], &[""]).unwrap(), vec!["a%20b%20c"]);
//! assert_eq!(unescape(&["a%20b%2fc"]), vec![Some("a b/c".to_string())]);
//! ```
//!
//! # Logging
//!
//! Calls emit `tracing` events: `debug` for element counts and for each
//! element that degrades to a missing value, `warn` when a call is rejected.
//!
//! # Features
//!
//! - `parallel`: map large inputs on the rayon thread pool
//!   (see [`BatchConfig::parallel_threshold`])
//! - `serde`: serialization for [`BatchConfig`] and the core record types

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod batch;
mod config;
mod error;

pub use batch::UriBatch;
pub use config::BatchConfig;
pub use error::BatchError;
pub use uri_toolkit::ComponentRecord;

/// Resolves every reference against a single base URI with the default configuration.
///
/// # Errors
///
/// Returns `BatchError::InvalidArgument` if `base` does not hold exactly one value.
pub fn absolute<S, B>(references: &[S], base: &[B]) -> Result<Vec<Option<String>>, BatchError>
where
    S: AsRef<str> + Sync,
    B: AsRef<str>,
{
    UriBatch::default().absolute(references, base)
}

/// Computes the reference from a single base URI to every target with the
/// default configuration.
///
/// # Errors
///
/// Returns `BatchError::InvalidArgument` if `base` does not hold exactly one value.
pub fn relative<S, B>(targets: &[S], base: &[B]) -> Result<Vec<String>, BatchError>
where
    S: AsRef<str> + Sync,
    B: AsRef<str>,
{
    UriBatch::default().relative(targets, base)
}

/// Decomposes every URI into a [`ComponentRecord`] with the default configuration.
#[must_use]
pub fn parse<S>(uris: &[S]) -> Vec<ComponentRecord>
where
    S: AsRef<str> + Sync,
{
    UriBatch::default().parse(uris)
}

/// Percent-encodes every string with the default configuration.
///
/// # Errors
///
/// Returns `BatchError::InvalidArgument` if `exceptions` holds more than one value.
pub fn escape<S, E>(text: &[S], exceptions: &[E]) -> Result<Vec<String>, BatchError>
where
    S: AsRef<str> + Sync,
    E: AsRef<str>,
{
    UriBatch::default().escape(text, exceptions)
}

/// Percent-decodes every string with the default configuration.
#[must_use]
pub fn unescape<S>(text: &[S]) -> Vec<Option<String>>
where
    S: AsRef<str> + Sync,
{
    UriBatch::default().unescape(text)
}
