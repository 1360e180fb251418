//! Flat component record for tabular output.

use crate::uri::ParsedUri;

/// The flat projection of a parsed URI: one row of a `parse` result.
///
/// For a URI that parsed, every text field is `Some`, holding `""` when the
/// component is absent, and `port` is `Some` only when a valid port was
/// given. For input that could not be parsed, every field is `None`.
///
/// # Examples
///
/// ```
/// use uri_toolkit::ComponentRecord;
///
/// let row = ComponentRecord::from_input("http://had.co.nz:1234/?a=1&b=2#def");
/// assert_eq!(row.scheme.as_deref(), Some("http"));
/// assert_eq!(row.server.as_deref(), Some("had.co.nz"));
/// assert_eq!(row.port, Some(1234));
/// assert_eq!(row.user.as_deref(), Some(""));
/// assert_eq!(row.path.as_deref(), Some("/"));
/// assert_eq!(row.query.as_deref(), Some("a=1&b=2"));
/// assert_eq!(row.fragment.as_deref(), Some("def"));
///
/// assert!(ComponentRecord::from_input(":").is_missing());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentRecord {
    /// Scheme, without the trailing `:`
    pub scheme: Option<String>,
    /// Host, IP literals keep their brackets
    pub server: Option<String>,
    /// Port number
    pub port: Option<u16>,
    /// User information, without the trailing `@`
    pub user: Option<String>,
    /// Raw path
    pub path: Option<String>,
    /// Raw query, without the leading `?`
    pub query: Option<String>,
    /// Raw fragment, without the leading `#`
    pub fragment: Option<String>,
}

impl ComponentRecord {
    /// Returns the record for unparsable input: every field missing.
    #[must_use]
    pub fn missing() -> Self {
        Self::default()
    }

    /// Parses `input` and projects it, or returns [`missing`](Self::missing).
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        ParsedUri::parse(input).map_or_else(|_| Self::missing(), |uri| Self::from(&uri))
    }

    /// Returns true if this is the record of an unparsable input.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        *self == Self::missing()
    }
}

impl From<&ParsedUri> for ComponentRecord {
    fn from(uri: &ParsedUri) -> Self {
        let authority = uri.authority();
        let text = |value: Option<&str>| Some(value.unwrap_or_default().to_string());
        Self {
            scheme: text(uri.scheme()),
            server: text(authority.and_then(|a| a.host())),
            port: authority.and_then(|a| a.port()),
            user: text(authority.and_then(|a| a.user())),
            path: Some(uri.path().to_string()),
            query: text(uri.query()),
            fragment: text(uri.fragment()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_for_full_uri() {
        let row = ComponentRecord::from_input("https://me@example.com:8443/a/b?x=1#frag");
        assert_eq!(
            row,
            ComponentRecord {
                scheme: Some("https".to_string()),
                server: Some("example.com".to_string()),
                port: Some(8443),
                user: Some("me".to_string()),
                path: Some("/a/b".to_string()),
                query: Some("x=1".to_string()),
                fragment: Some("frag".to_string()),
            }
        );
    }

    #[test]
    fn absent_fields_are_empty_text() {
        let row = ComponentRecord::from_input("http://had.co.nz/");
        assert_eq!(row.user.as_deref(), Some(""));
        assert_eq!(row.query.as_deref(), Some(""));
        assert_eq!(row.fragment.as_deref(), Some(""));
        assert_eq!(row.port, None);
        assert!(!row.is_missing());
    }

    #[test]
    fn not_a_uri_still_yields_a_row() {
        let row = ComponentRecord::from_input("not a uri");
        assert_eq!(row.scheme.as_deref(), Some(""));
        assert_eq!(row.path.as_deref(), Some("not a uri"));
    }

    #[test]
    fn unparsable_is_all_missing() {
        let row = ComponentRecord::from_input("http://[::1/");
        assert!(row.is_missing());
        assert_eq!(row.path, None);
    }

    #[test]
    fn invalid_port_is_missing() {
        let row = ComponentRecord::from_input("http://host:99999/");
        assert_eq!(row.server.as_deref(), Some("host"));
        assert_eq!(row.port, None);
    }
}
