//! Legend descriptions built from color scales.
//!
//! A [`Legend`] is plain data: stop positions, colors and tick labels. The
//! map shell decides how to draw it.

use serde::{Deserialize, Serialize};

use crate::{Color, ColorScale};

/// How legend stops are spread along the strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendSpacing {
    /// Position proportional to the threshold value
    #[default]
    Proportional,
    /// Evenly spaced by breakpoint index
    Even,
}

/// One tick of a legend strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendStop {
    /// Position along the strip, in `[0, 1]`
    pub position: f64,
    pub threshold: f64,
    pub color: Color,
    pub label: String,
}

/// A gradient legend strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Option<String>,
    pub stops: Vec<LegendStop>,
}

impl Legend {
    /// CSS `linear-gradient` matching the strip, left to right.
    pub fn to_css_gradient(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|s| format!("{} {:.1}%", s.color.to_css(), s.position * 100.0))
            .collect();
        format!("linear-gradient(to right, {})", stops.join(", "))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|s| s.label.as_str())
    }
}

impl ColorScale {
    /// Describe this scale as a legend strip.
    ///
    /// `format` renders each threshold into its tick label (usually adding
    /// the unit). A single-breakpoint scale puts its only stop at 0.
    pub fn legend<F>(&self, title: Option<String>, spacing: LegendSpacing, format: F) -> Legend
    where
        F: Fn(f64) -> String,
    {
        let stops = self.legend_stops();
        let (min, max) = self.domain();
        let last_index = stops.len().saturating_sub(1);

        let stops = stops
            .iter()
            .enumerate()
            .map(|(i, bp)| {
                let position = match spacing {
                    _ if last_index == 0 => 0.0,
                    LegendSpacing::Proportional => (bp.threshold - min) / (max - min),
                    LegendSpacing::Even => i as f64 / last_index as f64,
                };
                LegendStop {
                    position,
                    threshold: bp.threshold,
                    color: bp.color,
                    label: format(bp.threshold),
                }
            })
            .collect();

        Legend { title, stops }
    }
}
