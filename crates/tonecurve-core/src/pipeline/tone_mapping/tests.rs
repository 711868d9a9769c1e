//! Tests for tone curve tables

use super::curves::{linear_slope, power_law, threshold_index};
use super::*;
use crate::error::Error;
use crate::models::{ColorLayout, PixelBuffer};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, context: &str) {
    let tolerance = EPSILON * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}

/// Deterministic pseudo-random bytes (xorshift) for larger buffers
fn noise_buffer(width: u32, height: u32, layout: ColorLayout) -> PixelBuffer {
    let len = width as usize * height as usize * layout.channels();
    let mut state = 0x2545_f491_u32;
    let data = (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect();
    PixelBuffer::new(width, height, layout, data).unwrap()
}

// ========================================================================
// Curve Builder Tests
// ========================================================================

#[test]
fn test_zero_threshold_is_pure_power_law() {
    for &g in &[0.25, 0.5, 1.0, 1.8, 2.2, 4.0] {
        let table = build(0.0, g);
        for i in 0..LUT_SIZE {
            let expected = 255f64.powf(1.0 - g) * (i as f64).powf(g);
            assert_close(table[i], expected, &format!("g={} i={}", g, i));
        }
    }
}

#[test]
fn test_threshold_past_range_is_pure_linear() {
    for &(t, g) in &[(256.0, 2.0), (300.0, 0.5), (1000.0, 1.5), (256.9, 0.0)] {
        let table = build(t, g);
        let slope = (t / 255.0).powf(g - 1.0);
        for i in 0..LUT_SIZE {
            assert_close(table[i], slope * i as f64, &format!("t={} g={} i={}", t, g, i));
        }
    }
}

#[test]
fn test_segments_meet_at_threshold() {
    for &t in &[1.0, 16.0, 64.0, 128.0, 200.0, 255.0] {
        for &g in &[0.3, 0.45, 1.0, 2.2, 3.0] {
            let at = threshold_index(t);
            let linear = linear_slope(t, g) * at as f64;
            let power = power_law(at as f64, g);
            assert!(
                (linear - power).abs() < 1e-6,
                "Segments should meet at t={} g={}: {} vs {}",
                t,
                g,
                linear,
                power
            );
        }
    }
}

#[test]
fn test_unit_gamma_is_identity() {
    let table = build(128.0, 1.0);
    for i in 0..LUT_SIZE {
        assert_close(table[i], i as f64, &format!("i={}", i));
    }
}

#[test]
fn test_zero_gamma_zero_threshold_is_constant() {
    // 0^0 is treated as 1, so every entry is 255
    let table = build(0.0, 0.0);
    assert!(table.entries().iter().all(|&v| v == 255.0));
}

#[test]
fn test_threshold_index_clamps() {
    assert_eq!(threshold_index(0.0), 0);
    assert_eq!(threshold_index(0.99), 0);
    assert_eq!(threshold_index(12.7), 12);
    assert_eq!(threshold_index(255.5), 255);
    assert_eq!(threshold_index(256.0), 256);
    assert_eq!(threshold_index(1e9), 256);
    assert_eq!(threshold_index(f64::NAN), 0);
}

#[test]
fn test_huge_gamma_stays_finite() {
    let table = build(0.0, 1000.0);
    assert!(table.entries().iter().all(|v| v.is_finite()));
    assert_eq!(table[0], 0.0);
    assert_close(table[255], 255.0, "top entry");
}

#[test]
fn test_evaluate_matches_table() {
    let curves = [
        ToneCurve::Linear { slope: 0.5 },
        ToneCurve::PowerLaw { gamma: 2.2 },
        ToneCurve::piecewise(40.0, 0.45),
    ];
    for curve in curves {
        let table = curve.to_table();
        for i in 0..LUT_SIZE {
            assert_close(table[i], curve.evaluate(i), &format!("{:?} i={}", curve, i));
        }
    }
}

#[test]
fn test_from_fn_accepts_arbitrary_curve() {
    let inverted = ToneCurveTable::from_fn(|i| 255.0 - i as f64);
    assert_eq!(inverted[0], 255.0);
    assert_eq!(inverted[255], 0.0);
    assert!(inverted.is_in_output_range());
}

#[test]
fn test_get_is_bounds_checked() {
    let table = build(0.0, 2.0);
    assert_eq!(table.get(0), Some(0.0));
    assert_eq!(table.get(255), Some(table[255]));
    assert_eq!(table.get(LUT_SIZE), None);
}

#[test]
fn test_out_of_range_detection() {
    // Linear slope (300/255)^1 pushes the top of the table past 255
    let table = build(300.0, 2.0);
    let (index, value) = table.out_of_range_entry().unwrap();
    assert!(value > 255.0);
    assert!(table[index] > 255.0);

    let with_nan = ToneCurveTable::from_fn(|i| if i == 7 { f64::NAN } else { 0.0 });
    assert_eq!(with_nan.out_of_range_entry().map(|(i, _)| i), Some(7));

    assert!(ToneCurveTable::identity().is_in_output_range());
}

// ========================================================================
// Normalizer Tests
// ========================================================================

#[test]
fn test_normalize_spans_full_range() {
    let mut table = build(300.0, 2.0);
    normalize(&mut table).unwrap();

    let (min, max) = table.min_max();
    assert_eq!(min, 0.0);
    assert_eq!(max, 255.0);
    assert!(table.entries().iter().all(|v| v.fract() == 0.0));
}

#[test]
fn test_normalize_negative_and_offset_values() {
    let mut table = ToneCurveTable::from_fn(|i| i as f64 * 2.0 - 100.0);
    normalize(&mut table).unwrap();

    assert_eq!(table[0], 0.0);
    assert_eq!(table[255], 255.0);
    assert_eq!(table[128], 128.0);
}

#[test]
fn test_normalize_is_idempotent() {
    let mut once = build(64.0, 0.45);
    normalize(&mut once).unwrap();

    let mut twice = once.clone();
    normalize(&mut twice).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_normalize_constant_table_fails() {
    let mut table = ToneCurveTable::from_fn(|_| 42.0);
    let result = normalize(&mut table);

    assert!(matches!(
        result,
        Err(Error::DegenerateCurve { min, max }) if min == 42.0 && max == 42.0
    ));
    assert!(table.entries().iter().all(|&v| v == 42.0), "Table must be left unchanged");
}

#[test]
fn test_normalize_non_finite_table_fails() {
    let mut table = ToneCurveTable::from_fn(|i| if i == 3 { f64::INFINITY } else { i as f64 });
    assert!(matches!(
        normalize(&mut table),
        Err(Error::DegenerateCurve { .. })
    ));
}

#[test]
fn test_normalize_rounds_to_nearest() {
    // Entry 10 lands on 10.6 after rescaling
    let mut table = ToneCurveTable::from_fn(|i| if i == 10 { 21.2 } else { i as f64 * 2.0 });
    normalize(&mut table).unwrap();
    assert_eq!(table[10], 11.0);
}

// ========================================================================
// Applicator Tests
// ========================================================================

#[test]
fn test_identity_leaves_buffer_unchanged() {
    for layout in [ColorLayout::Gray, ColorLayout::Rgb, ColorLayout::Rgba] {
        let original = noise_buffer(33, 17, layout);
        let mut image = original.clone();

        apply(&ToneCurveTable::identity(), &mut image);

        assert_eq!(image, original);
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let mut table = build(48.0, 0.45);
    normalize(&mut table).unwrap();

    let original = noise_buffer(257, 129, ColorLayout::Rgb);
    let mut parallel = original.clone();
    let mut sequential = original.clone();

    apply(&table, &mut parallel);
    apply_sequential(&table, &mut sequential);

    assert_eq!(parallel, sequential);
    assert_ne!(parallel, original);
}

#[test]
fn test_apply_maps_every_value() {
    let data: Vec<u8> = (0..=255).collect();
    let mut image = PixelBuffer::new(16, 16, ColorLayout::Gray, data).unwrap();
    let inverted = ToneCurveTable::from_fn(|i| 255.0 - i as f64);

    apply(&inverted, &mut image);

    for (i, &v) in image.as_bytes().iter().enumerate() {
        assert_eq!(v as usize, 255 - i);
    }
}

#[test]
fn test_apply_truncates_fractional_entries() {
    let mut image = PixelBuffer::filled(4, 4, ColorLayout::Gray, 10);
    let table = ToneCurveTable::from_fn(|i| i as f64 * 0.55);

    apply(&table, &mut image);

    assert!(image.as_bytes().iter().all(|&v| v == 5));
}

#[test]
fn test_apply_touches_alpha_channel() {
    let mut image = PixelBuffer::filled(3, 3, ColorLayout::Rgba, 100);
    let table = ToneCurveTable::from_fn(|_| 7.0);

    apply(&table, &mut image);

    assert!(image.as_bytes().iter().all(|&v| v == 7));
}

#[test]
fn test_apply_single_row_and_min_rows_threshold() {
    let table = build(0.0, 2.0);
    let original = noise_buffer(1000, 1, ColorLayout::Rgb);

    let mut single_row = original.clone();
    apply(&table, &mut single_row);

    let mut forced_sequential = noise_buffer(1000, 1, ColorLayout::Rgb);
    apply_with_min_rows(&table, &mut forced_sequential, usize::MAX);

    let mut reference = original;
    apply_sequential(&table, &mut reference);

    assert_eq!(single_row, reference);
    assert_eq!(forced_sequential, reference);
}

#[test]
fn test_apply_empty_buffer_is_noop() {
    let mut image = PixelBuffer::filled(0, 5, ColorLayout::Rgb, 0);
    apply(&ToneCurveTable::identity(), &mut image);
    assert!(image.is_empty());
    assert_eq!(image.height(), 5);
}
