//! The 256-entry lookup table

use std::ops::Index;

use super::MAX_INTENSITY;

/// Number of entries in a lookup table, one per 8-bit input value.
pub const LUT_SIZE: usize = 256;

/// Mapped output value for every input intensity 0..=255.
///
/// Entries are real-valued and may fall outside [0, 255] until the table is
/// normalized; only in-range tables can be applied to an image.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneCurveTable {
    entries: [f64; LUT_SIZE],
}

impl ToneCurveTable {
    /// Build a table by evaluating `f` at every index.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        Self {
            entries: std::array::from_fn(f),
        }
    }

    /// `table[i] = i`
    pub fn identity() -> Self {
        Self::from_fn(|i| i as f64)
    }

    pub fn entries(&self) -> &[f64; LUT_SIZE] {
        &self.entries
    }

    /// Entry for input intensity `index`, or None past the end of the table.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.entries.get(index).copied()
    }

    pub fn entries_mut(&mut self) -> &mut [f64; LUT_SIZE] {
        &mut self.entries
    }

    /// Smallest and largest entry. NaN entries are skipped.
    pub fn min_max(&self) -> (f64, f64) {
        self.entries
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// First entry that is non-finite or outside [0, 255].
    pub fn out_of_range_entry(&self) -> Option<(usize, f64)> {
        self.entries
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, v)| !(0.0..=MAX_INTENSITY).contains(&v))
    }

    pub fn is_in_output_range(&self) -> bool {
        self.out_of_range_entry().is_none()
    }

    /// Byte lookup table used on the hot path.
    ///
    /// Fractional entries are truncated toward zero; out-of-range entries
    /// saturate, but callers are expected to reject them first.
    pub fn to_u8_lut(&self) -> [u8; LUT_SIZE] {
        debug_assert!(
            self.is_in_output_range(),
            "tone curve table has entries outside [0, 255]"
        );
        std::array::from_fn(|i| self.entries[i] as u8)
    }
}

impl Index<usize> for ToneCurveTable {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.entries[index]
    }
}

impl Default for ToneCurveTable {
    fn default() -> Self {
        Self::identity()
    }
}
