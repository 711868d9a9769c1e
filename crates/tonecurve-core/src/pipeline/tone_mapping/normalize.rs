//! Rescaling a table into the output range

use log::debug;

use crate::error::{Error, Result};

use super::table::ToneCurveTable;
use super::MAX_INTENSITY;

/// Stretch the table in place so its minimum becomes 0 and its maximum 255,
/// rounding every entry to the nearest integer.
///
/// Constant tables, and tables holding NaN or infinite entries, cannot be
/// stretched and yield [`Error::DegenerateCurve`]; the table is left
/// untouched in that case.
pub fn normalize(table: &mut ToneCurveTable) -> Result<()> {
    let (min, max) = table.min_max();
    let has_non_finite = table.entries().iter().any(|v| !v.is_finite());

    if has_non_finite || max <= min {
        return Err(Error::DegenerateCurve { min, max });
    }

    let range = max - min;
    for value in table.entries_mut().iter_mut() {
        *value = ((*value - min) / range * MAX_INTENSITY).round();
    }

    debug!("Normalized tone curve from [{}, {}] to [0, 255]", min, max);
    Ok(())
}
