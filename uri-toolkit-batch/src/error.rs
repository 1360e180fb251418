//! Custom error types for batch operations.

use std::fmt;

/// Errors that abort a whole batch call.
///
/// Problems with a single element never produce a `BatchError`; they show
/// up as a missing value at that element's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// A parameter that must hold a single value was given some other number.
    InvalidArgument {
        /// Name of the parameter
        name: &'static str,
        /// Description of the accepted number of values
        expected: &'static str,
        /// Number of values supplied
        actual: usize,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                name,
                expected,
                actual,
            } => write!(
                f,
                "`{name}` must be {expected}, got {actual} values; call once per distinct `{name}`"
            ),
        }
    }
}

impl std::error::Error for BatchError {}
