//! Constants for URI parsing and percent-encoding.

/// Punctuation that belongs to the unreserved set alongside ASCII letters and digits.
pub const UNRESERVED_MARKS: &str = "-_.~";

/// Separator between the scheme and the rest of a URI.
pub const SCHEME_DELIMITER: char = ':';

/// Prefix that introduces an authority component.
pub const AUTHORITY_PREFIX: &str = "//";

/// Separator between path segments.
pub const SEGMENT_DELIMITER: char = '/';

/// Introduces the query component.
pub const QUERY_DELIMITER: char = '?';

/// Introduces the fragment component.
pub const FRAGMENT_DELIMITER: char = '#';

/// The single-dot path segment ("current directory").
pub const DOT_SEGMENT: &str = ".";

/// The double-dot path segment ("parent directory").
pub const DOUBLE_DOT_SEGMENT: &str = "..";

/// Uppercase hexadecimal digits used when percent-encoding.
pub(crate) const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
