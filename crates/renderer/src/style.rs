//! Style files describing color scales.
//!
//! A style file is JSON with named style definitions:
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "styles": {
//!     "cape": {
//!       "name": "CAPE",
//!       "units": "J/kg",
//!       "stops": [
//!         {"value": 0, "color": "#f0f0ff"},
//!         {"value": 3000, "color": "#c83232", "label": "3000+"}
//!       ],
//!       "legend": {"title": "CAPE (J/kg)", "spacing": "even"}
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::{Color, ColorParseError, ColorScale, ColorScaleError, Legend, LegendSpacing};

/// Root style configuration - can contain multiple named styles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Version of the style schema
    #[serde(default = "default_version")]
    pub version: String,

    /// Named style definitions
    pub styles: HashMap<String, StyleDefinition>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl StyleConfig {
    /// Load style configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| StyleError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), styles = config.styles.len(), "Loaded style file");
        Ok(config)
    }

    /// Parse style configuration from JSON string.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        serde_json::from_str(json).map_err(|e| StyleError::Parse(e.to_string()))
    }

    /// Get a style by name.
    pub fn get(&self, name: &str) -> Result<&StyleDefinition, StyleError> {
        self.styles
            .get(name)
            .ok_or_else(|| StyleError::NotFound(name.to_string()))
    }

    /// Style names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Validate all styles in the configuration.
    pub fn validate(&self) -> Result<(), StyleError> {
        for name in self.names() {
            self.styles[name].color_scale_named(name)?;
        }
        Ok(())
    }
}

/// A single named color scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleDefinition {
    /// Human-readable name
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Unit label for display
    #[serde(default)]
    pub units: Option<String>,

    /// Breakpoints in ascending value order
    pub stops: Vec<ColorStop>,

    #[serde(default)]
    pub legend: Option<LegendConfig>,
}

impl StyleDefinition {
    /// Build the validated color scale.
    pub fn color_scale(&self) -> Result<ColorScale, StyleError> {
        self.color_scale_named(&self.name)
    }

    fn color_scale_named(&self, style: &str) -> Result<ColorScale, StyleError> {
        let breakpoints = self
            .stops
            .iter()
            .map(|stop| {
                stop.color
                    .to_color()
                    .map(|color| (stop.value, color))
                    .map_err(|source| StyleError::Color {
                        style: style.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        ColorScale::new(breakpoints).map_err(|source| StyleError::Scale {
            style: style.to_string(),
            source,
        })
    }

    /// Build a legend, using stop labels where given and
    /// `"<value> <units>"` otherwise.
    pub fn legend(&self) -> Result<Legend, StyleError> {
        let scale = self.color_scale()?;
        let config = self.legend.clone().unwrap_or_default();
        let title = config.title.or_else(|| Some(self.name.clone()));

        let mut legend = scale.legend(title, config.spacing, |value| match &self.units {
            Some(units) => format!("{} {}", value, units),
            None => value.to_string(),
        });

        for (legend_stop, stop) in legend.stops.iter_mut().zip(&self.stops) {
            if let Some(label) = &stop.label {
                legend_stop.label = label.clone();
            }
        }

        Ok(legend)
    }
}

/// A color stop in a style file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorStop {
    /// The data value at this stop
    pub value: f64,

    /// The color at this stop
    pub color: ColorSpec,

    /// Optional label for legend
    #[serde(default)]
    pub label: Option<String>,
}

/// Color notations accepted in style files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Hex string ("#RRGGBB" / "#RRGGBBAA") or a named color
    Text(String),

    /// RGB array: [r, g, b] or [r, g, b, a] with a in 0-255
    Array(Vec<u8>),

    /// Explicit RGBA with alpha in [0, 1]
    Rgba {
        r: u8,
        g: u8,
        b: u8,
        #[serde(default = "opaque")]
        a: f64,
    },
}

fn opaque() -> f64 {
    1.0
}

impl ColorSpec {
    pub fn to_color(&self) -> Result<Color, ColorParseError> {
        match self {
            ColorSpec::Text(s) if s.starts_with('#') => Color::from_hex(s),
            ColorSpec::Text(s) => {
                named_color(s).ok_or_else(|| ColorParseError::Unknown(s.clone()))
            }
            ColorSpec::Array(arr) => match arr.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Color::new(*r, *g, *b, f64::from(*a) / 255.0)),
                _ => Err(ColorParseError::InvalidLength(format!("{:?}", arr))),
            },
            ColorSpec::Rgba { r, g, b, a } => Ok(Color::new(*r, *g, *b, a.clamp(0.0, 1.0))),
        }
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_lowercase().as_str() {
        "transparent" => Color::TRANSPARENT,
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "red" => Color::rgb(255, 0, 0),
        "green" => Color::rgb(0, 255, 0),
        "blue" => Color::rgb(0, 0, 255),
        "yellow" => Color::rgb(255, 255, 0),
        "cyan" => Color::rgb(0, 255, 255),
        "magenta" => Color::rgb(255, 0, 255),
        "orange" => Color::rgb(255, 165, 0),
        "purple" => Color::rgb(128, 0, 128),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        _ => return None,
    };
    Some(color)
}

/// Legend options for a style.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub spacing: LegendSpacing,
}

/// Style-related errors.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Style '{0}' not found")]
    NotFound(String),

    #[error("Style '{style}': {source}")]
    Color {
        style: String,
        source: ColorParseError,
    },

    #[error("Style '{style}': {source}")]
    Scale {
        style: String,
        source: ColorScaleError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_spec_variants() {
        let hex: ColorSpec = serde_json::from_str(r##""#FF5500""##).unwrap();
        assert_eq!(hex.to_color().unwrap(), Color::rgb(255, 85, 0));

        let arr: ColorSpec = serde_json::from_str("[100, 150, 200]").unwrap();
        assert_eq!(arr.to_color().unwrap(), Color::rgb(100, 150, 200));

        let named: ColorSpec = serde_json::from_str(r#""Red""#).unwrap();
        assert_eq!(named.to_color().unwrap(), Color::rgb(255, 0, 0));

        let rgba: ColorSpec = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3, "a": 0.5}"#).unwrap();
        assert_eq!(rgba.to_color().unwrap(), Color::new(1, 2, 3, 0.5));
    }

    #[test]
    fn test_unknown_named_color() {
        let unknown = ColorSpec::Text("chartreuse-ish".to_string());
        assert!(matches!(unknown.to_color(), Err(ColorParseError::Unknown(_))));
    }
}
