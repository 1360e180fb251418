//! URI paths and the segment algebra used by resolution and relativization.

use std::fmt;

use crate::constants::{DOT_SEGMENT, DOUBLE_DOT_SEGMENT, SEGMENT_DELIMITER};

/// The path component of a URI, split into segments.
///
/// A leading `/` sets the absolute flag and is not part of any segment, so
/// `/a/b/` is absolute with segments `["a", "b", ""]` and `a/b` is relative
/// with segments `["a", "b"]`. The empty path has no segments.
///
/// # Examples
///
/// ```
/// use uri_toolkit::UriPath;
///
/// let path = UriPath::parse("/a/b/");
/// assert!(path.is_absolute());
/// assert_eq!(path.segments(), ["a", "b", ""]);
/// assert_eq!(path.to_string(), "/a/b/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UriPath {
    absolute: bool,
    segments: Vec<String>,
}

impl UriPath {
    /// Creates a path from its parts.
    #[must_use]
    pub const fn new(absolute: bool, segments: Vec<String>) -> Self {
        Self { absolute, segments }
    }

    /// Returns the empty path.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(false, Vec::new())
    }

    /// Splits raw path text into segments.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return Self::empty();
        }
        let (absolute, rest) = match input.strip_prefix(SEGMENT_DELIMITER) {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        Self::new(absolute, rest.split(SEGMENT_DELIMITER).map(str::to_string).collect())
    }

    /// Returns true if the path starts with `/`.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Returns the segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns true if the path serializes to the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.absolute && self.segments.iter().all(String::is_empty) && self.segments.len() <= 1
    }

    /// Returns the final segment, the "document" part of the path.
    #[must_use]
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns every segment except the last one.
    #[must_use]
    pub fn directory(&self) -> &[String] {
        match self.segments.split_last() {
            Some((_, dir)) => dir,
            None => &[],
        }
    }

    /// Returns a copy of this path with `.` and `..` segments removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_toolkit::UriPath;
    ///
    /// assert_eq!(UriPath::parse("/a/b/../c/./d").remove_dot_segments().to_string(), "/a/c/d");
    /// assert_eq!(UriPath::parse("../a/./b/..").remove_dot_segments().to_string(), "../a/");
    /// ```
    #[must_use]
    pub fn remove_dot_segments(&self) -> Self {
        Self::new(
            self.absolute,
            remove_dot_segments(&self.segments, self.absolute),
        )
    }

    pub(crate) fn starts_with_empty_segment(&self) -> bool {
        self.segments.len() > 1 && self.segments[0].is_empty()
    }
}

impl fmt::Display for UriPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            write!(f, "{SEGMENT_DELIMITER}")?;
        }
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{SEGMENT_DELIMITER}")?;
            }
            first = false;
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Removes `.` and `..` segments.
///
/// `.` is dropped. `..` drops the previous output segment when there is one
/// that is not itself `..`; otherwise it is dropped for an absolute path and
/// kept for a relative one. A path ending in `.` or `..` keeps its directory
/// form by ending in an empty segment.
#[must_use]
pub fn remove_dot_segments(segments: &[String], is_absolute: bool) -> Vec<String> {
    let mut output: Vec<String> = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment.as_str() {
            DOT_SEGMENT => {}
            DOUBLE_DOT_SEGMENT => match output.last() {
                Some(last) if last != DOUBLE_DOT_SEGMENT => {
                    output.pop();
                }
                _ if is_absolute => {}
                _ => output.push(segment.clone()),
            },
            _ => output.push(segment.clone()),
        }
    }
    if segments
        .last()
        .is_some_and(|s| s == DOT_SEGMENT || s == DOUBLE_DOT_SEGMENT)
    {
        output.push(String::new());
    }
    output
}

/// Merges a relative reference path onto a base path.
///
/// If the base has an authority and an empty path, the result is
/// `/` followed by the reference. Otherwise the base's final segment is
/// replaced by the reference's segments.
#[must_use]
pub fn merge(base: &UriPath, reference: &UriPath, base_has_authority: bool) -> UriPath {
    if base_has_authority && base.is_empty() {
        return UriPath::new(true, reference.segments.clone());
    }
    let mut segments = base.directory().to_vec();
    segments.extend(reference.segments.iter().cloned());
    UriPath::new(base.absolute, segments)
}

/// Returns the number of leading segments shared by `a` and `b`.
#[must_use]
pub fn common_prefix_len(a: &[String], b: &[String]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
