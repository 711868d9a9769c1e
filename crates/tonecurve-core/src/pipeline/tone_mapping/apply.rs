//! Table application
//!
//! Rows are independent: each worker owns one row slice and reads the shared
//! byte table, so no synchronization is needed beyond rayon's final join.

use rayon::prelude::*;

use crate::models::PixelBuffer;

use super::table::{ToneCurveTable, LUT_SIZE};
use super::PARALLEL_MIN_ROWS;

/// Replace every sample `s` of `image` with `table[s]`, in parallel across rows.
///
/// Dimensions and channel layout are unchanged. The table must already be
/// within [0, 255].
pub fn apply(table: &ToneCurveTable, image: &mut PixelBuffer) {
    apply_with_min_rows(table, image, PARALLEL_MIN_ROWS);
}

/// [`apply`] with an explicit row count below which the work stays on the
/// calling thread.
pub fn apply_with_min_rows(table: &ToneCurveTable, image: &mut PixelBuffer, min_rows: usize) {
    if image.is_empty() {
        return;
    }

    let lut = table.to_u8_lut();
    let row_len = image.row_len();

    if (image.height() as usize) >= min_rows {
        image
            .as_bytes_mut()
            .par_chunks_mut(row_len)
            .for_each(|row| apply_row(&lut, row));
    } else {
        apply_row(&lut, image.as_bytes_mut());
    }
}

/// Row-by-row application on the calling thread.
pub fn apply_sequential(table: &ToneCurveTable, image: &mut PixelBuffer) {
    if image.is_empty() {
        return;
    }

    let lut = table.to_u8_lut();
    let row_len = image.row_len();
    for row in image.as_bytes_mut().chunks_mut(row_len) {
        apply_row(&lut, row);
    }
}

#[inline]
fn apply_row(lut: &[u8; LUT_SIZE], row: &mut [u8]) {
    for sample in row.iter_mut() {
        *sample = lut[*sample as usize];
    }
}
