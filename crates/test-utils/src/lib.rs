//! Shared test utilities for the soaring layers workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Forecast fixtures (metadata, zones, location forecasts)
//! - Detailed forecast generators
//! - Temporary JSON files for loader tests
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Compare two colors channel by channel, allowing `tolerance` on RGB and
/// `tolerance / 255` on alpha.
///
/// Works with any type exposing `r`, `g`, `b` (integers) and `a` (float).
#[macro_export]
macro_rules! assert_color_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left = $left;
        let right = $right;
        let tolerance: i32 = $tolerance;
        for (name, l, r) in [
            ("r", left.r as i32, right.r as i32),
            ("g", left.g as i32, right.g as i32),
            ("b", left.b as i32, right.b as i32),
        ] {
            if (l - r).abs() > tolerance {
                panic!(
                    "assertion failed: channel `{}` differs\n  left: `{:?}`,\n right: `{:?}`",
                    name, left, right
                );
            }
        }
        $crate::assert_approx_eq!(left.a, right.a, tolerance as f64 / 255.0);
    }};
}
