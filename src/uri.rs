//! Main parsed URI type.

use std::fmt;
use std::str::FromStr;

use crate::authority::Authority;
use crate::constants::{
    AUTHORITY_PREFIX, FRAGMENT_DELIMITER, QUERY_DELIMITER, SCHEME_DELIMITER, SEGMENT_DELIMITER,
};
use crate::error::{ParseError, ParseErrorKind};
use crate::path::UriPath;

/// A URI reference decomposed into its components.
///
/// # Structure
///
/// ```text
/// [scheme ":"] ["//" authority] path ["?" query] ["#" fragment]
/// ```
///
/// A missing scheme makes this a relative reference. Query and fragment are
/// kept raw (still percent-encoded). Values are immutable: the `with_*` and
/// `without_*` methods return new values.
///
/// # Examples
///
/// ```
/// use uri_toolkit::ParsedUri;
///
/// let uri = ParsedUri::parse("http://had.co.nz:1234/?a=1&b=2#def").unwrap();
/// assert_eq!(uri.scheme(), Some("http"));
/// assert_eq!(uri.authority().and_then(|a| a.host()), Some("had.co.nz"));
/// assert_eq!(uri.authority().and_then(|a| a.port()), Some(1234));
/// assert_eq!(uri.path().to_string(), "/");
/// assert_eq!(uri.query(), Some("a=1&b=2"));
/// assert_eq!(uri.fragment(), Some("def"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ParsedUri {
    scheme: Option<String>,
    authority: Option<Authority>,
    path: UriPath,
    query: Option<String>,
    fragment: Option<String>,
}

impl ParsedUri {
    /// Parses a URI or relative reference.
    ///
    /// Parsing is lenient: hosts are not validated and a malformed port is
    /// dropped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input starts with `:` (empty scheme)
    /// - An IP literal host is not closed by `]`
    /// - Anything other than `:port` follows a closed IP literal
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Creates a URI reference from its components.
    #[must_use]
    pub const fn new(
        scheme: Option<String>,
        authority: Option<Authority>,
        path: UriPath,
        query: Option<String>,
        fragment: Option<String>,
    ) -> Self {
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    /// Returns the scheme, if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the authority, if present.
    #[must_use]
    pub const fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Returns the path.
    #[must_use]
    pub const fn path(&self) -> &UriPath {
        &self.path
    }

    /// Returns the raw query, if present.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the raw fragment, if present.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns true if this is a relative reference (no scheme).
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.scheme.is_none()
    }

    /// Returns a new URI with the given raw query.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_toolkit::ParsedUri;
    ///
    /// let uri = ParsedUri::parse("http://example.com/a").unwrap();
    /// assert_eq!(uri.with_query("x=1").to_string(), "http://example.com/a?x=1");
    /// ```
    #[must_use]
    pub fn with_query(&self, query: &str) -> Self {
        Self {
            query: Some(query.to_string()),
            ..self.clone()
        }
    }

    /// Returns a new URI without a query.
    #[must_use]
    pub fn without_query(&self) -> Self {
        Self {
            query: None,
            ..self.clone()
        }
    }

    /// Returns a new URI with the given raw fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_toolkit::ParsedUri;
    ///
    /// let uri = ParsedUri::parse("http://example.com/a#old").unwrap();
    /// assert_eq!(uri.with_fragment("new").to_string(), "http://example.com/a#new");
    /// ```
    #[must_use]
    pub fn with_fragment(&self, fragment: &str) -> Self {
        Self {
            fragment: Some(fragment.to_string()),
            ..self.clone()
        }
    }

    /// Returns a new URI without a fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_toolkit::ParsedUri;
    ///
    /// let uri = ParsedUri::parse("http://example.com/a?q#top").unwrap();
    /// assert_eq!(uri.without_fragment().to_string(), "http://example.com/a?q");
    /// ```
    #[must_use]
    pub fn without_fragment(&self) -> Self {
        Self {
            fragment: None,
            ..self.clone()
        }
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        // Split off fragment
        let (rest, fragment) = Self::split_fragment(input);

        // Split off query
        let (rest, query) = Self::split_query(rest);

        // Split off scheme
        let (scheme, rest) = Self::split_scheme(rest)?;

        // Split authority from path
        let offset = scheme.map_or(0, |s| s.len() + 1);
        let (authority, path) = Self::split_authority(rest, offset)?;

        Ok(Self {
            scheme: scheme.map(str::to_string),
            authority,
            path: UriPath::parse(path),
            query: query.map(str::to_string),
            fragment: fragment.map(str::to_string),
        })
    }

    fn split_fragment(input: &str) -> (&str, Option<&str>) {
        match input.split_once(FRAGMENT_DELIMITER) {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        }
    }

    fn split_query(input: &str) -> (&str, Option<&str>) {
        match input.split_once(QUERY_DELIMITER) {
            Some((rest, query)) => (rest, Some(query)),
            None => (input, None),
        }
    }

    fn split_scheme(input: &str) -> Result<(Option<&str>, &str), ParseErrorKind> {
        let Some(colon) = input.find([SCHEME_DELIMITER, SEGMENT_DELIMITER]) else {
            return Ok((None, input));
        };
        if !input[colon..].starts_with(SCHEME_DELIMITER) {
            return Ok((None, input));
        }
        let candidate = &input[..colon];
        if candidate.is_empty() {
            return Err(ParseErrorKind::EmptyScheme);
        }
        if Self::is_valid_scheme(candidate) {
            Ok((Some(candidate), &input[colon + 1..]))
        } else {
            Ok((None, input))
        }
    }

    fn split_authority(
        input: &str,
        offset: usize,
    ) -> Result<(Option<Authority>, &str), ParseErrorKind> {
        let Some(rest) = input.strip_prefix(AUTHORITY_PREFIX) else {
            return Ok((None, input));
        };
        let end = rest.find(SEGMENT_DELIMITER).unwrap_or(rest.len());
        let authority = Authority::parse(&rest[..end], offset + AUTHORITY_PREFIX.len())?;
        Ok((Some(authority), &rest[end..]))
    }

    /// Returns true if `segment`, leading a scheme-less relative path,
    /// would re-parse as a scheme or fail to parse.
    pub(crate) fn reads_as_scheme(segment: &str) -> bool {
        segment
            .split_once(SCHEME_DELIMITER)
            .is_some_and(|(candidate, _)| candidate.is_empty() || Self::is_valid_scheme(candidate))
    }

    fn is_valid_scheme(candidate: &str) -> bool {
        let mut bytes = candidate.bytes();
        bytes.next().is_some_and(|b| b.is_ascii_alphabetic())
            && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
    }
}

impl fmt::Display for ParsedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}{SCHEME_DELIMITER}")?;
        }

        match &self.authority {
            Some(authority) => {
                write!(f, "{AUTHORITY_PREFIX}{authority}")?;
                if !self.path.is_absolute() && !self.path.is_empty() {
                    write!(f, "{SEGMENT_DELIMITER}")?;
                }
            }
            None => {
                // "//x" would re-parse as an authority
                if self.path.starts_with_empty_segment() {
                    f.write_str(if self.path.is_absolute() { "/." } else { "./" })?;
                } else if self.scheme.is_none()
                    && !self.path.is_absolute()
                    && self
                        .path
                        .segments()
                        .first()
                        .is_some_and(|s| Self::reads_as_scheme(s))
                {
                    f.write_str("./")?;
                }
            }
        }

        write!(f, "{}", self.path)?;

        if let Some(query) = &self.query {
            write!(f, "{QUERY_DELIMITER}{query}")?;
        }

        if let Some(fragment) = &self.fragment {
            write!(f, "{FRAGMENT_DELIMITER}{fragment}")?;
        }

        Ok(())
    }
}

impl FromStr for ParsedUri {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ParsedUri {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParsedUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ParsedUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_uri() {
        let uri = ParsedUri::parse("http://had.co.nz:1234/?a=1&b=2#def").unwrap();
        assert_eq!(uri.scheme(), Some("http"));
        let authority = uri.authority().unwrap();
        assert_eq!(authority.host(), Some("had.co.nz"));
        assert_eq!(authority.port(), Some(1234));
        assert_eq!(authority.user(), None);
        assert_eq!(uri.path().to_string(), "/");
        assert_eq!(uri.query(), Some("a=1&b=2"));
        assert_eq!(uri.fragment(), Some("def"));
    }

    #[test]
    fn parse_without_authority() {
        let uri = ParsedUri::parse("mailto:someone@example.com").unwrap();
        assert_eq!(uri.scheme(), Some("mailto"));
        assert!(uri.authority().is_none());
        assert_eq!(uri.path().to_string(), "someone@example.com");
    }

    #[test]
    fn parse_empty_authority() {
        let uri = ParsedUri::parse("file:///etc/hosts").unwrap();
        let authority = uri.authority().unwrap();
        assert_eq!(authority.host(), None);
        assert_eq!(uri.path().segments(), ["etc", "hosts"]);
        assert_eq!(uri.to_string(), "file:///etc/hosts");
    }

    #[test]
    fn parse_network_path_reference() {
        let uri = ParsedUri::parse("//example.com/x").unwrap();
        assert!(uri.is_relative());
        assert_eq!(uri.authority().and_then(Authority::host), Some("example.com"));
        assert_eq!(uri.path().to_string(), "/x");
    }

    #[test]
    fn parse_relative_path() {
        let uri = ParsedUri::parse("a/b:c?q").unwrap();
        assert!(uri.is_relative());
        assert!(uri.authority().is_none());
        assert_eq!(uri.path().segments(), ["a", "b:c"]);
        assert_eq!(uri.query(), Some("q"));
    }

    #[test]
    fn parse_empty_reference() {
        let uri = ParsedUri::parse("").unwrap();
        assert_eq!(uri, ParsedUri::default());
        assert!(uri.path().is_empty());
    }

    #[test]
    fn empty_query_and_fragment_are_present() {
        let uri = ParsedUri::parse("http://x/?#").unwrap();
        assert_eq!(uri.query(), Some(""));
        assert_eq!(uri.fragment(), Some(""));
        assert_eq!(uri.to_string(), "http://x/?#");
    }

    #[test]
    fn question_mark_in_fragment_is_not_query() {
        let uri = ParsedUri::parse("a#b?c").unwrap();
        assert_eq!(uri.query(), None);
        assert_eq!(uri.fragment(), Some("b?c"));
    }

    #[test]
    fn invalid_scheme_is_relative() {
        let uri = ParsedUri::parse("1http://x").unwrap();
        assert!(uri.is_relative());
        assert!(uri.authority().is_none());
        assert_eq!(uri.to_string(), "1http://x");
    }

    #[test]
    fn scheme_chars() {
        let uri = ParsedUri::parse("svn+ssh.v-2:x").unwrap();
        assert_eq!(uri.scheme(), Some("svn+ssh.v-2"));
    }

    #[test]
    fn not_a_uri_is_a_relative_path() {
        let uri = ParsedUri::parse("not a uri").unwrap();
        assert!(uri.is_relative());
        assert_eq!(uri.path().to_string(), "not a uri");
    }

    #[test]
    fn leading_colon_fails() {
        let err = ParsedUri::parse(":foo").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::EmptyScheme);
        assert_eq!(err.input, ":foo");
    }

    #[test]
    fn unterminated_ip_literal_fails() {
        let err = ParsedUri::parse("http://[::1/x").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedIpLiteral);
    }

    #[test]
    fn ip_literal_junk_position() {
        let err = ParsedUri::parse("http://[::1]z/").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedChar { char: 'z', position: 12 }
        );
    }

    #[test]
    fn error_position_ignores_query() {
        let err = ParsedUri::parse("http://[::1]z/?q#f").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedChar { char: 'z', position: 12 }
        );
    }

    #[test]
    fn display_roundtrip() {
        for input in [
            "http://had.co.nz:1234/?a=1&b=2#def",
            "http://user@host/a/b/",
            "urn:isbn:0451450523",
            "../a/b?x#y",
            "?only",
            "#only",
            "//host",
            "",
        ] {
            assert_eq!(ParsedUri::parse(input).unwrap().to_string(), input);
        }
    }

    #[test]
    fn display_protects_double_slash_path() {
        let uri = ParsedUri::new(
            Some("x".to_string()),
            None,
            UriPath::parse("//a"),
            None,
            None,
        );
        let text = uri.to_string();
        assert_eq!(text, "x:/.//a");
        assert!(ParsedUri::parse(&text).unwrap().authority().is_none());
    }

    #[test]
    fn display_protects_relative_path_with_empty_first_segment() {
        let path = UriPath::new(false, vec![String::new(), "y".to_string()]);
        let with_scheme = ParsedUri::new(Some("foo".to_string()), None, path.clone(), None, None);
        assert_eq!(with_scheme.to_string(), "foo:.//y");
        let reparsed = ParsedUri::parse(&with_scheme.to_string()).unwrap();
        assert!(reparsed.authority().is_none());
        assert!(!reparsed.path().is_absolute());
        assert_eq!(reparsed.path().segments(), [".", "", "y"]);

        let bare = ParsedUri::new(None, None, path, None, None);
        assert_eq!(bare.to_string(), ".//y");
    }

    #[test]
    fn display_protects_scheme_like_first_segment() {
        let scheme_like = ParsedUri::new(None, None, UriPath::parse("a:b"), None, None);
        assert_eq!(scheme_like.to_string(), "./a:b");
        let empty_scheme = ParsedUri::new(None, None, UriPath::parse(":b"), None, None);
        assert_eq!(empty_scheme.to_string(), "./:b");
        let not_a_scheme = ParsedUri::new(None, None, UriPath::parse("1:b"), None, None);
        assert_eq!(not_a_scheme.to_string(), "1:b");
    }

    #[test]
    fn parsed_values_reparse_unchanged() {
        for input in ["1http://x", "foo:/.//y", "//a:b:x/p", "x:y:z", ".//y"] {
            let parsed = ParsedUri::parse(input).unwrap();
            assert_eq!(ParsedUri::parse(&parsed.to_string()).unwrap(), parsed, "input {input}");
        }
    }

    #[test]
    fn display_adds_slash_after_authority() {
        let uri = ParsedUri::new(
            None,
            Some(Authority::new(None, Some("h".to_string()), None)),
            UriPath::parse("a"),
            None,
            None,
        );
        assert_eq!(uri.to_string(), "//h/a");
    }

    #[test]
    fn from_str_and_try_from() {
        let a: ParsedUri = "http://x/y".parse().unwrap();
        let b = ParsedUri::try_from("http://x/y").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn functional_updates_leave_original() {
        let uri = ParsedUri::parse("http://x/y?q#f").unwrap();
        assert_eq!(uri.without_query().to_string(), "http://x/y#f");
        assert_eq!(uri.without_fragment().to_string(), "http://x/y?q");
        assert_eq!(uri.with_query("r").to_string(), "http://x/y?r#f");
        assert_eq!(uri.with_fragment("g").to_string(), "http://x/y?q#g");
        assert_eq!(uri.to_string(), "http://x/y?q#f");
    }
}
