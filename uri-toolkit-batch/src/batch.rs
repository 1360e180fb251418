//! Index-aligned batch operations.

use tracing::{debug, warn};
use uri_toolkit::{ComponentRecord, EscapeSet, ParsedUri};

use crate::config::BatchConfig;
use crate::error::BatchError;

/// Runs URI operations over slices of strings.
///
/// Output element `i` always corresponds to input element `i`. Elements are
/// independent: one that cannot be processed becomes a missing value (or,
/// for [`relative`](Self::relative), is returned unchanged) while the rest
/// still succeed. Only a malformed scalar parameter fails the whole call.
///
/// # Examples
///
/// ```
/// use uri_toolkit_batch::{BatchConfig, UriBatch};
///
/// let batch = UriBatch::new(BatchConfig::default());
/// let out = batch
///     .absolute(&[".", "..", "/", "/x"], &["http://hadley.nz/a/b/c/d"])
///     .unwrap();
/// assert_eq!(out[1].as_deref(), Some("http://hadley.nz/a/b/"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct UriBatch {
    config: BatchConfig,
}

impl UriBatch {
    /// Creates a batch runner with the given configuration.
    #[must_use]
    pub const fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Resolves every reference against a single base URI.
    ///
    /// An element is `None` when the reference cannot be parsed; every
    /// element is `None` when the base cannot be parsed.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::InvalidArgument` if `base` does not hold exactly one value.
    pub fn absolute<S, B>(
        &self,
        references: &[S],
        base: &[B],
    ) -> Result<Vec<Option<String>>, BatchError>
    where
        S: AsRef<str> + Sync,
        B: AsRef<str>,
    {
        let base = single("base", base)?;
        debug!(elements = references.len(), base, "resolving references");

        let parsed_base = match ParsedUri::parse(base) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "base URI is unparsable; every element is missing");
                return Ok(vec![None; references.len()]);
            }
        };

        Ok(self.map_elements(references, |index, reference| {
            match ParsedUri::parse(reference.as_ref()) {
                Ok(reference) => Some(parsed_base.resolve(&reference).to_string()),
                Err(e) => {
                    debug!(index, error = %e, "reference is unparsable");
                    None
                }
            }
        }))
    }

    /// Computes the reference from a single base URI to every target.
    ///
    /// A target that cannot be made relative (different scheme or
    /// authority, or either side unparsable) is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::InvalidArgument` if `base` does not hold exactly one value.
    pub fn relative<S, B>(&self, targets: &[S], base: &[B]) -> Result<Vec<String>, BatchError>
    where
        S: AsRef<str> + Sync,
        B: AsRef<str>,
    {
        let base = single("base", base)?;
        debug!(elements = targets.len(), base, "relativizing targets");

        let parsed_base = ParsedUri::parse(base)
            .inspect_err(|e| debug!(error = %e, "base URI is unparsable; targets are returned unchanged"))
            .ok();

        Ok(self.map_elements(targets, |index, target| {
            let target = target.as_ref();
            let reference = parsed_base.as_ref().and_then(|base| {
                ParsedUri::parse(target)
                    .ok()
                    .and_then(|parsed| parsed.relativize(base))
            });
            reference.map_or_else(
                || {
                    debug!(index, target, "target has no relative form");
                    target.to_string()
                },
                |reference| reference.to_string(),
            )
        }))
    }

    /// Decomposes every URI into a [`ComponentRecord`].
    ///
    /// Unparsable input yields [`ComponentRecord::missing`] at its index.
    #[must_use]
    pub fn parse<S>(&self, uris: &[S]) -> Vec<ComponentRecord>
    where
        S: AsRef<str> + Sync,
    {
        debug!(elements = uris.len(), "parsing URIs");
        self.map_elements(uris, |index, uri| {
            let record = ComponentRecord::from_input(uri.as_ref());
            if record.is_missing() {
                debug!(index, "URI is unparsable");
            }
            record
        })
    }

    /// Percent-encodes every string, leaving unreserved characters and the
    /// characters of `exceptions` unescaped.
    ///
    /// `exceptions` holds at most one string; an empty slice means no extra
    /// exceptions.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::InvalidArgument` if `exceptions` holds more than one value.
    pub fn escape<S, E>(&self, text: &[S], exceptions: &[E]) -> Result<Vec<String>, BatchError>
    where
        S: AsRef<str> + Sync,
        E: AsRef<str>,
    {
        let set = match exceptions {
            [] => EscapeSet::default(),
            [exceptions] => EscapeSet::new(exceptions.as_ref()),
            _ => return Err(invalid_argument("exceptions", "at most one string", exceptions.len())),
        };
        debug!(elements = text.len(), ?set, "escaping text");

        Ok(self.map_elements(text, |_, s| uri_toolkit::escape(s.as_ref(), &set)))
    }

    /// Percent-decodes every string.
    ///
    /// Malformed escapes are passed through literally. An element is `None`
    /// only when its decoded octets are not valid UTF-8.
    #[must_use]
    pub fn unescape<S>(&self, text: &[S]) -> Vec<Option<String>>
    where
        S: AsRef<str> + Sync,
    {
        debug!(elements = text.len(), "unescaping text");
        self.map_elements(text, |index, s| {
            uri_toolkit::unescape(s.as_ref())
                .inspect_err(|e| debug!(index, error = %e, "decoded text is not valid UTF-8"))
                .ok()
        })
    }

    #[cfg_attr(not(feature = "parallel"), allow(clippy::unused_self))]
    fn map_elements<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(usize, &T) -> R + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        if self.config.runs_parallel(items.len()) {
            use rayon::prelude::*;

            debug!(elements = items.len(), "mapping on the rayon pool");
            return items
                .par_iter()
                .enumerate()
                .map(|(index, item)| f(index, item))
                .collect();
        }

        items
            .iter()
            .enumerate()
            .map(|(index, item)| f(index, item))
            .collect()
    }
}

fn single<'a, B: AsRef<str>>(name: &'static str, values: &'a [B]) -> Result<&'a str, BatchError> {
    match values {
        [value] => Ok(value.as_ref()),
        _ => Err(invalid_argument(name, "a single string", values.len())),
    }
}

fn invalid_argument(name: &'static str, expected: &'static str, actual: usize) -> BatchError {
    warn!(name, actual, "rejecting batch call");
    BatchError::InvalidArgument {
        name,
        expected,
        actual,
    }
}
