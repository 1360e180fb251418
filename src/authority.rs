//! Authority component (`user@host:port`).

use std::fmt;

use crate::error::ParseErrorKind;

/// The authority of a URI: the text between `//` and the path.
///
/// Every field is optional. An authority whose fields are all `None`
/// (as in `file:///etc`) is still distinct from a URI with no authority.
/// The host is not validated; any run of non-delimiter text is accepted.
///
/// # Examples
///
/// ```
/// use uri_toolkit::ParsedUri;
///
/// let uri = ParsedUri::parse("ftp://anon@files.example.com:2121/pub").unwrap();
/// let authority = uri.authority().unwrap();
/// assert_eq!(authority.user(), Some("anon"));
/// assert_eq!(authority.host(), Some("files.example.com"));
/// assert_eq!(authority.port(), Some(2121));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Authority {
    user: Option<String>,
    host: Option<String>,
    port: Option<u16>,
}

impl Authority {
    /// Creates an authority from its parts. An empty host is stored as `None`.
    #[must_use]
    pub fn new(user: Option<String>, host: Option<String>, port: Option<u16>) -> Self {
        Self {
            user,
            host: host.filter(|h| !h.is_empty()),
            port,
        }
    }

    /// Parses the raw authority text (without the leading `//`).
    ///
    /// `offset` is the position of the authority in the full input and is
    /// only used for error positions.
    pub(crate) fn parse(input: &str, offset: usize) -> Result<Self, ParseErrorKind> {
        let (user, host_port, host_offset) = match input.rfind('@') {
            Some(at) => (Some(&input[..at]), &input[at + 1..], offset + at + 1),
            None => (None, input, offset),
        };

        let (host, port_str) = if host_port.starts_with('[') {
            Self::split_ip_literal(host_port, host_offset)?
        } else {
            match host_port.rfind(':') {
                Some(colon) => (&host_port[..colon], Some(&host_port[colon + 1..])),
                None => (host_port, None),
            }
        };

        Ok(Self::new(
            user.map(str::to_string),
            Some(host.to_string()),
            port_str.and_then(Self::parse_port),
        ))
    }

    /// Returns the user information, if present.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the host, if non-empty. IP literals keep their brackets.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port, if present and valid.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns true if both authorities name the same origin.
    ///
    /// Hosts compare ASCII case-insensitively; user and port compare exactly.
    #[must_use]
    pub fn same_origin(&self, other: &Self) -> bool {
        let hosts_match = match (&self.host, &other.host) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            (None, None) => true,
            _ => false,
        };
        hosts_match && self.user == other.user && self.port == other.port
    }

    fn split_ip_literal(
        input: &str,
        offset: usize,
    ) -> Result<(&str, Option<&str>), ParseErrorKind> {
        let close = input
            .find(']')
            .ok_or(ParseErrorKind::UnterminatedIpLiteral)?;
        let host = &input[..=close];
        let rest = &input[close + 1..];
        if rest.is_empty() {
            return Ok((host, None));
        }
        match rest.strip_prefix(':') {
            Some(port) => Ok((host, Some(port))),
            None => {
                let char = rest.chars().next().unwrap_or(']');
                Err(ParseErrorKind::UnexpectedChar {
                    char,
                    position: offset + close + 1,
                })
            }
        }
    }

    fn parse_port(input: &str) -> Option<u16> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        input.parse().ok()
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user) = &self.user {
            write!(f, "{user}@")?;
        }
        if let Some(host) = &self.host {
            f.write_str(host)?;
        }
        match self.port {
            Some(port) => write!(f, ":{port}")?,
            // An empty port keeps "a:b" from re-parsing as host "a", port "b"
            None if self.host.as_deref().is_some_and(|h| !h.starts_with('[') && h.contains(':')) => {
                f.write_str(":")?;
            }
            None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_host_only() {
        let auth = Authority::parse("example.com", 0).unwrap();
        assert_eq!(auth.host(), Some("example.com"));
        assert_eq!(auth.user(), None);
        assert_eq!(auth.port(), None);
    }

    #[test]
    fn parse_full() {
        let auth = Authority::parse("user:pw@example.com:8080", 0).unwrap();
        assert_eq!(auth.user(), Some("user:pw"));
        assert_eq!(auth.host(), Some("example.com"));
        assert_eq!(auth.port(), Some(8080));
        assert_eq!(auth.to_string(), "user:pw@example.com:8080");
    }

    #[test]
    fn parse_empty_is_all_none() {
        let auth = Authority::parse("", 0).unwrap();
        assert_eq!(auth, Authority::default());
        assert_eq!(auth.to_string(), "");
    }

    #[test]
    fn parse_ipv6_literal() {
        let auth = Authority::parse("[::1]:443", 0).unwrap();
        assert_eq!(auth.host(), Some("[::1]"));
        assert_eq!(auth.port(), Some(443));
    }

    #[test]
    fn parse_unterminated_ipv6_fails() {
        assert_eq!(
            Authority::parse("[::1", 0),
            Err(ParseErrorKind::UnterminatedIpLiteral)
        );
    }

    #[test]
    fn parse_junk_after_ip_literal_fails() {
        assert_eq!(
            Authority::parse("[::1]x", 2),
            Err(ParseErrorKind::UnexpectedChar { char: 'x', position: 7 })
        );
    }

    #[test]
    fn invalid_port_is_dropped() {
        for input in ["host:", "host:http", "host:65536", "host:+80"] {
            let auth = Authority::parse(input, 0).unwrap();
            assert_eq!(auth.host(), Some("host"), "input {input}");
            assert_eq!(auth.port(), None, "input {input}");
        }
    }

    #[test]
    fn port_bounds() {
        assert_eq!(Authority::parse("h:0", 0).unwrap().port(), Some(0));
        assert_eq!(Authority::parse("h:65535", 0).unwrap().port(), Some(65535));
    }

    #[test]
    fn host_with_colon_keeps_empty_port() {
        let auth = Authority::parse("a:b:x", 0).unwrap();
        assert_eq!(auth.host(), Some("a:b"));
        assert_eq!(auth.port(), None);
        assert_eq!(auth.to_string(), "a:b:");
        assert_eq!(Authority::parse(&auth.to_string(), 0).unwrap(), auth);
    }

    #[test]
    fn empty_user_is_kept() {
        let auth = Authority::parse("@host", 0).unwrap();
        assert_eq!(auth.user(), Some(""));
        assert_eq!(auth.to_string(), "@host");
    }

    #[test]
    fn same_origin_ignores_host_case() {
        let a = Authority::parse("Example.COM:80", 0).unwrap();
        let b = Authority::parse("example.com:80", 0).unwrap();
        let c = Authority::parse("example.com:81", 0).unwrap();
        assert!(a.same_origin(&b));
        assert!(!a.same_origin(&c));
    }
}
