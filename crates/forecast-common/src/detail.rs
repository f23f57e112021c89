//! Per-location detailed forecasts.
//!
//! Every scalar is optional: payloads omit fields for hours or zones where
//! the model does not provide them. Consumers apply their own defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ForecastResult;

/// Horizontal wind vector, components in km/h.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// West-to-east component
    pub u: f64,
    /// South-to-north component
    pub v: f64,
}

impl Wind {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Speed in km/h.
    pub fn speed(&self) -> f64 {
        self.u.hypot(self.v)
    }

    /// Direction the wind blows from, in degrees clockwise from north, in
    /// `[0, 360)`. Calm wind reports 0.
    pub fn direction(&self) -> f64 {
        if self.u == 0.0 && self.v == 0.0 {
            return 0.0;
        }
        let degrees = 270.0 - self.v.atan2(self.u).to_degrees();
        degrees.rem_euclid(360.0)
    }
}

/// Forecast values at one location and one valid time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedForecast {
    /// Valid time; `None` for a synthesized empty record
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,

    /// Convective available potential energy, J/kg
    #[serde(default)]
    pub cape: Option<f64>,

    /// Thermal updraft velocity (W*), m/s
    #[serde(default)]
    pub thermal_velocity: Option<f64>,

    /// Planetary boundary layer depth above ground, m
    #[serde(default)]
    pub boundary_layer_depth: Option<f64>,

    /// Wind 10 m above ground
    #[serde(default)]
    pub surface_wind: Option<Wind>,

    /// Wind around 2000 m AMSL (800 hPa)
    #[serde(default, rename = "wind2000m")]
    pub wind_2000m: Option<Wind>,

    /// Accumulated rain over the preceding period, mm
    #[serde(default)]
    pub rain: Option<f64>,

    /// Temperature 2 m above ground, °C
    #[serde(default)]
    pub surface_temperature: Option<f64>,

    /// Dew point 2 m above ground, °C
    #[serde(default)]
    pub surface_dew_point: Option<f64>,

    /// Total cloud cover, %
    #[serde(default)]
    pub total_cloud_cover: Option<f64>,
}

impl DetailedForecast {
    /// An empty record valid at `time`, every value missing.
    pub fn empty_at(time: DateTime<Utc>) -> Self {
        Self {
            time: Some(time),
            ..Self::default()
        }
    }
}

/// The full detailed forecast time series at one location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationForecasts {
    /// Ground elevation of the grid point, m AMSL
    #[serde(default)]
    pub elevation: f64,

    /// Entries in ascending valid-time order
    #[serde(default)]
    pub forecasts: Vec<DetailedForecast>,
}

impl LocationForecasts {
    pub fn from_json(json: &str) -> ForecastResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ForecastResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The entry valid exactly at `time`, if present.
    pub fn at(&self, time: DateTime<Utc>) -> Option<&DetailedForecast> {
        self.forecasts.iter().find(|f| f.time == Some(time))
    }
}
