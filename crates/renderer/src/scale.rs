//! Piecewise-linear color scales.
//!
//! A [`ColorScale`] maps a scalar forecast value to a [`Color`] through an
//! ordered table of breakpoints. The same scale drives the map legend and
//! the tile coloring step, so both always agree.

use serde::Serialize;

use crate::Color;

/// A `(threshold, color)` anchor of a color scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoint {
    pub threshold: f64,
    pub color: Color,
}

/// Ordered breakpoints with strictly increasing, finite thresholds.
///
/// Always holds at least one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    breakpoints: Vec<Breakpoint>,
}

impl ColorScale {
    /// Build a scale from `(threshold, color)` pairs in ascending order.
    ///
    /// Pairs are stored as given: out-of-order or duplicate thresholds are
    /// rejected, never sorted.
    pub fn new(
        breakpoints: impl IntoIterator<Item = (f64, Color)>,
    ) -> Result<Self, ColorScaleError> {
        let breakpoints: Vec<Breakpoint> = breakpoints
            .into_iter()
            .map(|(threshold, color)| Breakpoint { threshold, color })
            .collect();

        if breakpoints.is_empty() {
            return Err(ColorScaleError::Empty);
        }

        for (index, bp) in breakpoints.iter().enumerate() {
            if !bp.threshold.is_finite() {
                return Err(ColorScaleError::NonFinite {
                    index,
                    threshold: bp.threshold,
                });
            }
        }

        for (index, pair) in breakpoints.windows(2).enumerate() {
            if pair[1].threshold <= pair[0].threshold {
                return Err(ColorScaleError::NotIncreasing {
                    index: index + 1,
                    previous: pair[0].threshold,
                    threshold: pair[1].threshold,
                });
            }
        }

        Ok(Self { breakpoints })
    }

    /// Map `value` to a color.
    ///
    /// Values at or beyond either end clamp to the boundary color; NaN maps
    /// to the first color. Between two breakpoints the color is blended
    /// linearly, and an exact threshold returns its breakpoint color.
    pub fn interpolate(&self, value: f64) -> Color {
        let first = &self.breakpoints[0];
        if value.is_nan() || value <= first.threshold {
            return first.color;
        }

        let last = &self.breakpoints[self.breakpoints.len() - 1];
        if value >= last.threshold {
            return last.color;
        }

        // first < value < last, so 1 <= upper <= len - 1
        let upper = self.breakpoints.partition_point(|bp| bp.threshold <= value);
        let low = &self.breakpoints[upper - 1];
        let high = &self.breakpoints[upper];
        let fraction = (value - low.threshold) / (high.threshold - low.threshold);

        low.color.interpolate(&high.color, fraction)
    }

    /// Breakpoints in ascending threshold order, for legends.
    pub fn legend_stops(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// `(min, max)` threshold values.
    pub fn domain(&self) -> (f64, f64) {
        (
            self.breakpoints[0].threshold,
            self.breakpoints[self.breakpoints.len() - 1].threshold,
        )
    }
}

impl TryFrom<Vec<(f64, Color)>> for ColorScale {
    type Error = ColorScaleError;

    fn try_from(breakpoints: Vec<(f64, Color)>) -> Result<Self, Self::Error> {
        ColorScale::new(breakpoints)
    }
}

/// Invalid breakpoint table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorScaleError {
    #[error("Color scale must have at least 1 breakpoint")]
    Empty,

    #[error("Breakpoint {index} has a non-finite threshold: {threshold}")]
    NonFinite { index: usize, threshold: f64 },

    #[error("Breakpoint {index} threshold {threshold} does not exceed previous threshold {previous}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        threshold: f64,
    },
}
