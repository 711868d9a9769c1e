//! Tone curve shapes
//!
//! Two segments make up the standard curve: a straight line through the
//! origin below the threshold and a power law above it. Keeping the dark end
//! linear avoids the infinite slope a pure power law has at zero when
//! gamma < 1.

use super::table::ToneCurveTable;
use super::MAX_INTENSITY;

/// A curve that can be sampled at every 8-bit input value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneCurve {
    /// `slope * i`
    Linear { slope: f64 },

    /// `255^(1-g) * i^g`, mapping 0 to 0 and 255 to 255
    PowerLaw { gamma: f64 },

    /// Linear below `floor(threshold)`, power law from there up. The linear
    /// slope `(t/255)^(g-1)` makes both segments meet at `i = t`.
    Piecewise { threshold: f64, gamma: f64 },
}

impl ToneCurve {
    pub fn piecewise(threshold: f64, gamma: f64) -> Self {
        ToneCurve::Piecewise { threshold, gamma }
    }

    /// Output value for input intensity `index`.
    pub fn evaluate(&self, index: usize) -> f64 {
        let x = index as f64;
        match *self {
            ToneCurve::Linear { slope } => slope * x,
            ToneCurve::PowerLaw { gamma } => power_law(x, gamma),
            ToneCurve::Piecewise { threshold, gamma } => {
                if index < threshold_index(threshold) {
                    linear_slope(threshold, gamma) * x
                } else {
                    power_law(x, gamma)
                }
            }
        }
    }

    /// Sample the curve into a lookup table.
    pub fn to_table(&self) -> ToneCurveTable {
        match *self {
            // Hoist the slope out of the per-entry loop.
            ToneCurve::Piecewise { threshold, gamma } => {
                let split = threshold_index(threshold);
                let slope = linear_slope(threshold, gamma);
                ToneCurveTable::from_fn(|i| {
                    if i < split {
                        slope * i as f64
                    } else {
                        power_law(i as f64, gamma)
                    }
                })
            }
            curve => ToneCurveTable::from_fn(|i| curve.evaluate(i)),
        }
    }
}

/// Build the piecewise table for threshold `t` and gamma `g`.
///
/// Both are expected to be non-negative; validation is the caller's job.
pub fn build(t: f64, g: f64) -> ToneCurveTable {
    ToneCurve::piecewise(t, g).to_table()
}

/// Index of the first entry on the power-law segment, `clamp(floor(t), 0, 256)`.
pub(crate) fn threshold_index(threshold: f64) -> usize {
    let floored = threshold.floor();
    if floored.is_nan() || floored <= 0.0 {
        0
    } else if floored >= 256.0 {
        256
    } else {
        floored as usize
    }
}

/// `c1 = (t/255)^(g-1)`
pub(crate) fn linear_slope(threshold: f64, gamma: f64) -> f64 {
    (threshold / MAX_INTENSITY).powf(gamma - 1.0)
}

/// `c2 * x^g` with `c2 = 255^(1-g)`, written as `255 * (x/255)^g` so large
/// gammas underflow to 0 instead of producing `0 * inf`. `0^0` is 1.
pub(crate) fn power_law(x: f64, gamma: f64) -> f64 {
    MAX_INTENSITY * (x / MAX_INTENSITY).powf(gamma)
}
