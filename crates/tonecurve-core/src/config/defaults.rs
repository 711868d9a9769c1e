//! Default pipeline values and their sanitization.

use serde::Deserialize;

/// Values a configuration file may override. Command-line flags take
/// precedence over anything loaded here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransformDefaults {
    /// Run the normalizer stage after building the curve
    pub normalize: bool,
    /// Size of the global worker pool (None = one per core)
    pub threads: Option<usize>,
    /// Minimum row count before rows are fanned out to the pool
    pub parallel_min_rows: usize,
}

impl Default for TransformDefaults {
    fn default() -> Self {
        Self {
            normalize: false,
            threads: None,
            parallel_min_rows: 2,
        }
    }
}

impl TransformDefaults {
    pub(crate) fn sanitize(&mut self) {
        if self.threads == Some(0) {
            self.threads = None;
        }

        if self.parallel_min_rows == 0 {
            self.parallel_min_rows = 1;
        }
    }
}
