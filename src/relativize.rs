//! Relativization: the shortest reference that resolves back to a target.

use crate::constants::{DOT_SEGMENT, DOUBLE_DOT_SEGMENT, SCHEME_DELIMITER};
use crate::path::{common_prefix_len, UriPath};
use crate::uri::ParsedUri;

impl ParsedUri {
    /// Computes a relative reference from `base` to `self`.
    ///
    /// Returns `None` when no relative form exists: the schemes or
    /// authorities differ, or the target's path cannot be reached without
    /// restating its authority. The result never carries a scheme or an
    /// authority. The target's query and fragment are kept verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_toolkit::ParsedUri;
    ///
    /// let target = ParsedUri::parse("http://hadley.nz/a/c").unwrap();
    /// let base = ParsedUri::parse("http://hadley.nz/a/b/").unwrap();
    /// assert_eq!(target.relativize(&base).unwrap().to_string(), "../c");
    ///
    /// let other = ParsedUri::parse("https://hadley.nz/a/b").unwrap();
    /// assert!(target.relativize(&other).is_none());
    /// ```
    #[must_use]
    pub fn relativize(&self, base: &Self) -> Option<Self> {
        if !self.same_scheme(base) || !self.same_authority(base) {
            return None;
        }

        if self.path().is_empty() {
            return if base.path().is_empty() {
                self.same_document(base, None)
            } else {
                None
            };
        }

        if base.path().is_empty() && base.authority().is_none() {
            return Some(self.reference_with_path(self.path().clone()));
        }

        if self.has_rooted_path() != base.has_rooted_path() {
            return self
                .path()
                .is_absolute()
                .then(|| self.reference_with_path(self.path().clone()));
        }

        let target_path = self.rooted_path();
        let base_path = base.rooted_path();
        if self.path() == base.path() {
            return self.same_document(base, Some(&target_path));
        }

        let base_dir = base_path.directory();
        let target_segments = target_path.segments();
        let common = common_prefix_len(base_dir, target_path.directory());
        let remaining = &target_segments[common..];

        let mut segments: Vec<String> = Vec::with_capacity(base_dir.len() - common + remaining.len() + 1);
        segments.extend(std::iter::repeat_n(
            DOUBLE_DOT_SEGMENT.to_string(),
            base_dir.len() - common,
        ));
        if segments.is_empty() && remaining.first().is_some_and(|s| needs_dot_prefix(s)) {
            segments.push(DOT_SEGMENT.to_string());
        }
        segments.extend(remaining.iter().cloned());

        Some(self.reference_with_path(UriPath::new(false, segments)))
    }

    /// Returns true if the path is rooted once resolution has applied.
    ///
    /// An empty path under an authority behaves like `/` when merging.
    fn has_rooted_path(&self) -> bool {
        self.path().is_absolute() || (self.authority().is_some() && self.path().is_empty())
    }

    fn rooted_path(&self) -> UriPath {
        if self.path().is_empty() && self.authority().is_some() {
            UriPath::new(true, vec![String::new()])
        } else {
            self.path().clone()
        }
    }

    fn same_scheme(&self, other: &Self) -> bool {
        match (self.scheme(), other.scheme()) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn same_authority(&self, other: &Self) -> bool {
        match (self.authority(), other.authority()) {
            (Some(a), Some(b)) => a.same_origin(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn reference_with_path(&self, path: UriPath) -> Self {
        Self::new(
            None,
            None,
            path,
            self.query().map(str::to_string),
            self.fragment().map(str::to_string),
        )
    }

    /// Reference from `base` to `self` when both name the same document.
    ///
    /// An empty path works unless it would pick up the base's query.
    fn same_document(&self, base: &Self, path: Option<&UriPath>) -> Option<Self> {
        if self.query().is_some() || base.query().is_none() {
            return Some(self.reference_with_path(UriPath::empty()));
        }
        let last = path?.last_segment()?;
        let segments = if needs_dot_prefix(last) {
            vec![DOT_SEGMENT.to_string(), last.to_string()]
        } else {
            vec![last.to_string()]
        };
        Some(self.reference_with_path(UriPath::new(false, segments)))
    }
}

/// A leading segment that is empty or holds a `:` would change meaning.
fn needs_dot_prefix(segment: &str) -> bool {
    segment.is_empty() || segment.contains(SCHEME_DELIMITER)
}

/// Computes the reference from `base` to `target`, or returns `target`
/// unchanged when either fails to parse or no relative form exists.
///
/// # Examples
///
/// ```
/// use uri_toolkit::relativize;
///
/// assert_eq!(relativize("http://hadley.nz/a/c", "http://hadley.nz/a/b"), "c");
/// assert_eq!(relativize("http://hadley.nz/a/c", "http://hadley.nz/a/b/"), "../c");
/// assert_eq!(relativize("http://hadley.nz/a/c", "http://hadley.nz"), "a/c");
/// assert_eq!(relativize("http://other.nz/a/c", "http://hadley.nz/a/b"), "http://other.nz/a/c");
/// ```
#[must_use]
pub fn relativize(target: &str, base: &str) -> String {
    let (Ok(parsed_target), Ok(parsed_base)) = (ParsedUri::parse(target), ParsedUri::parse(base))
    else {
        return target.to_string();
    };
    parsed_target
        .relativize(&parsed_base)
        .map_or_else(|| target.to_string(), |reference| reference.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;

    #[test]
    fn rooted_path_of_bare_authority() {
        let uri = ParsedUri::parse("http://x").unwrap();
        assert!(uri.has_rooted_path());
        assert_eq!(uri.rooted_path().to_string(), "/");
    }

    #[test]
    fn sibling_document() {
        assert_eq!(relativize("http://hadley.nz/a/c", "http://hadley.nz/a/b"), "c");
    }

    #[test]
    fn parent_directory() {
        assert_eq!(relativize("http://hadley.nz/a/c", "http://hadley.nz/a/b/"), "../c");
    }

    #[test]
    fn root_base() {
        assert_eq!(relativize("http://hadley.nz/a/c", "http://hadley.nz/"), "a/c");
        assert_eq!(relativize("http://hadley.nz/a/c", "http://hadley.nz"), "a/c");
    }

    #[test]
    fn deeper_base() {
        assert_eq!(relativize("http://x/a/b", "http://x/c/d/e"), "../../a/b");
        assert_eq!(relativize("http://x/", "http://x/a/b"), "../");
    }

    #[test]
    fn identical_document_is_empty() {
        assert_eq!(relativize("http://x/a/b", "http://x/a/b"), "");
        assert_eq!(relativize("http://x/a/b#f", "http://x/a/b?q"), "b#f");
        assert_eq!(relativize("http://x/a/b?r", "http://x/a/b?q"), "?r");
    }

    #[test]
    fn identical_directory_document() {
        assert_eq!(relativize("http://x/a/", "http://x/a/?q"), "./");
    }

    #[test]
    fn root_path_against_empty_path() {
        assert_eq!(relativize("http://x/", "http://x"), "./");
        assert_eq!(resolve("./", "http://x").unwrap(), "http://x/");
    }

    #[test]
    fn target_directory_of_base() {
        assert_eq!(relativize("http://x/a/", "http://x/a/b"), "./");
    }

    #[test]
    fn colon_in_first_segment_is_protected() {
        assert_eq!(relativize("http://x/a/b:c", "http://x/a/d"), "./b:c");
    }

    #[test]
    fn empty_segment_is_protected() {
        assert_eq!(relativize("http://x/a//y", "http://x/a/b"), ".//y");
    }

    #[test]
    fn query_and_fragment_are_kept() {
        assert_eq!(relativize("http://x/a/c?q=1#top", "http://x/a/b?z"), "c?q=1#top");
    }

    #[test]
    fn different_scheme_returns_target() {
        assert_eq!(relativize("https://x/a", "http://x/b"), "https://x/a");
    }

    #[test]
    fn scheme_and_host_compare_case_insensitively() {
        assert_eq!(relativize("HTTP://X.com/a/c", "http://x.COM/a/b"), "c");
    }

    #[test]
    fn different_port_returns_target() {
        assert_eq!(relativize("http://x:81/a", "http://x/b"), "http://x:81/a");
    }

    #[test]
    fn unparsable_returns_target() {
        assert_eq!(relativize(":bad", "http://x/"), ":bad");
        assert_eq!(relativize("http://x/a", "http://[::1"), "http://x/a");
    }

    #[test]
    fn empty_target_path_against_nonempty_base() {
        assert_eq!(relativize("http://x", "http://x/a"), "http://x");
        assert_eq!(relativize("http://x?q", "http://x"), "?q");
    }

    #[test]
    fn opaque_paths() {
        assert_eq!(relativize("urn:a/c", "urn:a/b"), "c");
        assert_eq!(relativize("foo:/a", "foo:"), "/a");
        assert_eq!(relativize("foo:/a/b", "foo:x"), "/a/b");
        assert_eq!(relativize("foo:x", "foo:/a"), "foo:x");
    }
}
