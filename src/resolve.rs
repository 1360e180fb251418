//! Reference resolution: turning a reference into an absolute URI.

use crate::constants::DOT_SEGMENT;
use crate::error::ResolveError;
use crate::path::{merge, UriPath};
use crate::uri::ParsedUri;

impl ParsedUri {
    /// Resolves `reference` against `self` as the base URI.
    ///
    /// Follows the generic reference resolution algorithm: a reference with
    /// a scheme or an authority stands on its own, an empty path inherits
    /// the base path (and the base query when the reference has none), an
    /// absolute path replaces the base path, and a relative path is merged
    /// onto the base directory. Dot segments are removed from every path
    /// taken from the reference. The fragment always comes from the reference.
    ///
    /// Without an authority, a path whose text would re-parse as an
    /// authority or a scheme (`//y`, `a:b`) is prefixed with a `.` segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_toolkit::ParsedUri;
    ///
    /// let base = ParsedUri::parse("http://hadley.nz/a/b/c/d").unwrap();
    /// let reference = ParsedUri::parse("../x").unwrap();
    /// assert_eq!(base.resolve(&reference).to_string(), "http://hadley.nz/a/b/x");
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &Self) -> Self {
        let (scheme, authority, path, query);

        if reference.scheme().is_some() {
            scheme = reference.scheme().map(str::to_string);
            authority = reference.authority().cloned();
            path = reference.path().remove_dot_segments();
            query = reference.query().map(str::to_string);
        } else {
            scheme = self.scheme().map(str::to_string);
            if reference.authority().is_some() {
                authority = reference.authority().cloned();
                path = reference.path().remove_dot_segments();
                query = reference.query().map(str::to_string);
            } else {
                authority = self.authority().cloned();
                if reference.path().is_empty() {
                    path = self.path().clone();
                    query = reference.query().or(self.query()).map(str::to_string);
                } else {
                    path = if reference.path().is_absolute() {
                        reference.path().remove_dot_segments()
                    } else {
                        merge(self.path(), reference.path(), self.authority().is_some())
                            .remove_dot_segments()
                    };
                    query = reference.query().map(str::to_string);
                }
            }
        }

        let path = unambiguous_path(path, scheme.is_some(), authority.is_some());
        Self::new(scheme, authority, path, query, reference.fragment().map(str::to_string))
    }
}

/// Returns `path` in a form whose serialization re-parses to the same path.
///
/// Without an authority, a leading empty segment would print as `//` and
/// re-parse as an authority, and a scheme-less first segment like `a:b`
/// would re-parse as a scheme. Both get a leading `.` segment. A path that
/// serializes to nothing becomes the empty path.
fn unambiguous_path(path: UriPath, has_scheme: bool, has_authority: bool) -> UriPath {
    if path.is_empty() {
        return UriPath::empty();
    }
    if has_authority {
        return path;
    }
    let ambiguous = path.starts_with_empty_segment()
        || (!has_scheme
            && !path.is_absolute()
            && path
                .segments()
                .first()
                .is_some_and(|s| ParsedUri::reads_as_scheme(s)));
    if !ambiguous {
        return path;
    }
    let mut segments = Vec::with_capacity(path.segments().len() + 1);
    segments.push(DOT_SEGMENT.to_string());
    segments.extend(path.segments().iter().cloned());
    UriPath::new(path.is_absolute(), segments)
}

/// Resolves `reference` against `base` and returns the resulting URI text.
///
/// # Errors
///
/// Returns `ResolveError::InvalidBase` if `base` cannot be parsed and
/// `ResolveError::InvalidReference` if `reference` cannot be parsed.
///
/// # Examples
///
/// ```
/// use uri_toolkit::resolve;
///
/// let base = "http://hadley.nz/a/b/c/d";
/// assert_eq!(resolve(".", base).unwrap(), "http://hadley.nz/a/b/c/");
/// assert_eq!(resolve("..", base).unwrap(), "http://hadley.nz/a/b/");
/// assert_eq!(resolve("/", base).unwrap(), "http://hadley.nz/");
/// assert_eq!(resolve("/x", base).unwrap(), "http://hadley.nz/x");
/// ```
pub fn resolve(reference: &str, base: &str) -> Result<String, ResolveError> {
    let base = ParsedUri::parse(base).map_err(ResolveError::InvalidBase)?;
    let reference = ParsedUri::parse(reference).map_err(ResolveError::InvalidReference)?;
    Ok(base.resolve(&reference).to_string())
}
