//! Color scale engine for forecast map layers.
//!
//! Provides:
//! - RGBA colors with linear blending
//! - Piecewise-linear color scales
//! - Legend descriptions derived from a scale
//! - JSON style files that build validated scales

pub mod color;
pub mod legend;
pub mod scale;
pub mod style;

pub use color::{Color, ColorParseError};
pub use legend::{Legend, LegendSpacing, LegendStop};
pub use scale::{Breakpoint, ColorScale, ColorScaleError};
pub use style::{ColorSpec, ColorStop, StyleConfig, StyleDefinition, StyleError};
