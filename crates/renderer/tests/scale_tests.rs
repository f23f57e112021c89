//! Tests for color scale interpolation.

use renderer::{Color, ColorScale, ColorScaleError};
use test_utils::{assert_approx_eq, assert_color_approx_eq, linspace};

fn cape_scale() -> ColorScale {
    ColorScale::new(vec![
        (0.0, Color::rgb(0xf0, 0xf0, 0xff)),
        (500.0, Color::rgb(0x96, 0xc8, 0xff)),
        (1000.0, Color::rgb(0x64, 0xff, 0x96)),
        (1500.0, Color::rgb(0xff, 0xff, 0x64)),
        (2000.0, Color::rgb(0xff, 0x96, 0x32)),
        (3000.0, Color::rgb(0xc8, 0x32, 0x32)),
    ])
    .unwrap()
}

/// Channel-wise linear blend without rounding.
fn expected_channel(c0: u8, c1: u8, t: f64) -> f64 {
    f64::from(c0) + (f64::from(c1) - f64::from(c0)) * t
}

// ============================================================================
// Boundary clamping
// ============================================================================

#[test]
fn test_values_below_first_threshold_clamp() {
    let scale = cape_scale();
    let first = Color::rgb(0xf0, 0xf0, 0xff);
    for value in [0.0, -0.001, -500.0, -1e12, f64::NEG_INFINITY] {
        assert_eq!(scale.interpolate(value), first, "value {}", value);
    }
}

#[test]
fn test_values_above_last_threshold_clamp() {
    let scale = cape_scale();
    let last = Color::rgb(0xc8, 0x32, 0x32);
    for value in [3000.0, 3000.001, 5000.0, 1e12, f64::INFINITY] {
        assert_eq!(scale.interpolate(value), last, "value {}", value);
    }
}

// ============================================================================
// Breakpoint fidelity
// ============================================================================

#[test]
fn test_exact_breakpoints_return_breakpoint_color() {
    let scale = cape_scale();
    for bp in scale.legend_stops() {
        assert_eq!(scale.interpolate(bp.threshold), bp.color);
    }
}

#[test]
fn test_uneven_spacing_breakpoints() {
    let scale = ColorScale::new(vec![
        (-10.0, Color::new(10, 20, 30, 0.2)),
        (-9.5, Color::new(200, 0, 7, 1.0)),
        (42.0, Color::new(0, 255, 64, 0.6)),
    ])
    .unwrap();
    assert_eq!(scale.interpolate(-9.5), Color::new(200, 0, 7, 1.0));
    assert_eq!(scale.interpolate(42.0), Color::new(0, 255, 64, 0.6));
}

// ============================================================================
// Linearity between breakpoints
// ============================================================================

#[test]
fn test_linear_between_breakpoints() {
    let scale = cape_scale();
    let stops = scale.legend_stops().to_vec();

    for pair in stops.windows(2) {
        let (low, high) = (pair[0], pair[1]);
        for value in linspace(low.threshold, high.threshold, 17) {
            let t = (value - low.threshold) / (high.threshold - low.threshold);
            let color = scale.interpolate(value);

            assert_approx_eq!(color.r, expected_channel(low.color.r, high.color.r, t), 0.500_001);
            assert_approx_eq!(color.g, expected_channel(low.color.g, high.color.g, t), 0.500_001);
            assert_approx_eq!(color.b, expected_channel(low.color.b, high.color.b, t), 0.500_001);
        }
    }
}

#[test]
fn test_alpha_interpolates_unrounded() {
    let scale = ColorScale::new(vec![
        (0.0, Color::new(0, 0, 0, 0.0)),
        (4.0, Color::new(0, 0, 0, 1.0)),
    ])
    .unwrap();
    assert_approx_eq!(scale.interpolate(1.0).a, 0.25, 1e-12);
    assert_approx_eq!(scale.interpolate(3.0).a, 0.75, 1e-12);
}

#[test]
fn test_interpolation_is_monotonic_within_segment() {
    let scale = ColorScale::new(vec![(0.0, Color::BLACK), (100.0, Color::WHITE)]).unwrap();
    let mut previous = 0u8;
    for value in linspace(0.0, 100.0, 101) {
        let c = scale.interpolate(value);
        assert!(c.r >= previous);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
        previous = c.r;
    }
    assert_eq!(previous, 255);
}

// ============================================================================
// CAPE scenario
// ============================================================================

#[test]
fn test_cape_midpoint_blend() {
    let scale = cape_scale();
    let color = scale.interpolate(750.0);

    // Halfway between #96c8ff and #64ff96: (125, 227.5, 202.5), rounded
    assert_eq!(color, Color::rgb(125, 228, 203));
    assert_eq!(color.to_hex(), "#7de4cb");

    let blend = Color::rgb(0x96, 0xc8, 0xff).interpolate(&Color::rgb(0x64, 0xff, 0x96), 0.5);
    assert_eq!(color, blend);
}

#[test]
fn test_cape_boundaries() {
    let scale = cape_scale();
    assert_eq!(scale.interpolate(0.0).to_hex(), "#f0f0ff");
    assert_eq!(scale.interpolate(5000.0).to_hex(), "#c83232");
}

#[test]
fn test_cape_upper_segment() {
    let scale = cape_scale();
    // 2500 is halfway between #ff9632 and #c83232
    let color = scale.interpolate(2500.0);
    assert_color_approx_eq!(color, Color::rgb(228, 100, 50), 1);
}

// ============================================================================
// Single breakpoint
// ============================================================================

#[test]
fn test_single_breakpoint_scale() {
    let only = Color::new(12, 34, 56, 0.7);
    let scale = ColorScale::new(vec![(100.0, only)]).unwrap();
    for value in [-1e9, -1.0, 0.0, 99.999, 100.0, 100.001, 1e9] {
        assert_eq!(scale.interpolate(value), only);
    }
    assert_eq!(scale.domain(), (100.0, 100.0));
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construction_rejects_invalid_tables() {
    assert_eq!(
        ColorScale::new(Vec::<(f64, Color)>::new()).unwrap_err(),
        ColorScaleError::Empty
    );

    let err = ColorScale::new(vec![(10.0, Color::BLACK), (5.0, Color::WHITE)]).unwrap_err();
    assert_eq!(
        err,
        ColorScaleError::NotIncreasing {
            index: 1,
            previous: 10.0,
            threshold: 5.0,
        }
    );

    let err = ColorScale::new(vec![(0.0, Color::BLACK), (f64::INFINITY, Color::WHITE)])
        .unwrap_err();
    assert!(matches!(err, ColorScaleError::NonFinite { index: 1, .. }));
}

#[test]
fn test_legend_stops_preserve_input() {
    let scale = cape_scale();
    let thresholds: Vec<f64> = scale.legend_stops().iter().map(|bp| bp.threshold).collect();
    assert_eq!(thresholds, vec![0.0, 500.0, 1000.0, 1500.0, 2000.0, 3000.0]);
    assert_eq!(scale.len(), 6);
    assert!(!scale.is_empty());
}

#[test]
fn test_try_from_vec() {
    let scale = ColorScale::try_from(vec![(0.0, Color::BLACK), (1.0, Color::WHITE)]).unwrap();
    assert_eq!(scale.domain(), (0.0, 1.0));
}
