//! Tone curve lookup tables
//!
//! This module builds 256-entry tone curves, rescales them into the 8-bit
//! output range, and applies them to pixel buffers:
//! - `curves`: the linear / power-law / piecewise curve shapes
//! - `table`: the lookup table itself
//! - `normalize`: min/max rescaling to [0, 255]
//! - `apply`: row-parallel table application

mod apply;
mod curves;
mod normalize;
mod table;

#[cfg(test)]
mod tests;

// Re-export public API
pub use apply::{apply, apply_sequential, apply_with_min_rows};
pub use curves::{build, ToneCurve};
pub use normalize::normalize;
pub use table::{ToneCurveTable, LUT_SIZE};

/// Largest representable output intensity.
pub const MAX_INTENSITY: f64 = 255.0;

/// Buffers with fewer rows than this are processed without the thread pool.
pub const PARALLEL_MIN_ROWS: usize = 2;
