// ReverseConfig — execution knobs for the dense kernel
//
// The element copy loop is embarrassingly parallel. Small arrays are copied
// on the calling thread; once an array reaches `parallel_threshold` elements
// the output is filled through rayon's global pool. Results are identical
// either way.

/// Execution configuration for reverse kernels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseConfig {
    /// Whether large arrays may be split across rayon workers (default: true).
    pub parallel: bool,
    /// Minimum element count before the parallel path is taken (default: 32768).
    pub parallel_threshold: usize,
}

impl Default for ReverseConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 32 * 1024,
        }
    }
}

impl ReverseConfig {
    /// A config that always copies on the calling thread.
    pub fn sequential() -> Self {
        Self::default().with_parallel(false)
    }

    /// Enable or disable the parallel path.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the element count at which the parallel path kicks in.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether an array of `elem_count` elements should be copied in parallel.
    pub fn use_parallel(&self, elem_count: usize) -> bool {
        self.parallel && elem_count >= self.parallel_threshold
    }
}
