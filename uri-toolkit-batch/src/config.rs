//! Configuration for batch operations.

/// Configuration for [`UriBatch`](crate::UriBatch).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchConfig {
    /// Minimum number of elements before a call is spread over the rayon
    /// thread pool.
    ///
    /// Only used with the `parallel` feature; smaller inputs are mapped on
    /// the calling thread.
    /// Default: 4096
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
        }
    }
}

impl BatchConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parallel threshold.
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if an input of `len` elements should be mapped in parallel.
    #[must_use]
    pub const fn runs_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && len >= self.parallel_threshold
    }
}
