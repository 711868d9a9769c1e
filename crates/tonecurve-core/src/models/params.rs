//! Parameters for a single transform invocation.

use std::path::{Path, PathBuf};

use crate::config::TransformDefaults;

/// Inputs of one transform: where to read, where to write, and the curve
/// parameters. Immutable once built; validation happens in the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformParameters {
    input: PathBuf,
    output: PathBuf,
    threshold: f64,
    gamma: f64,
}

impl TransformParameters {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        threshold: f64,
        gamma: f64,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            threshold,
            gamma,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Threshold `t` between the linear and power-law segments
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Exponent `g` of the power-law segment
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

/// Pipeline switches that are not part of the curve itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Rescale the table to [0, 255] before applying it
    pub normalize: bool,

    /// Buffers with fewer rows than this are processed on the calling thread
    pub parallel_min_rows: usize,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self::from(&TransformDefaults::default())
    }
}

impl From<&TransformDefaults> for TransformOptions {
    fn from(defaults: &TransformDefaults) -> Self {
        Self {
            normalize: defaults.normalize,
            parallel_min_rows: defaults.parallel_min_rows,
        }
    }
}
