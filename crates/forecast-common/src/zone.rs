//! Forecast zones.

use serde::{Deserialize, Serialize};

use crate::BoundingBox;

/// A geographic area covered by a forecast run.
///
/// Layers receive the zone untouched; the color engine never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Stable identifier (e.g. "pays-basque")
    pub id: String,

    /// Human-readable label
    pub label: String,

    /// Covered extent
    pub bbox: BoundingBox,

    /// Horizontal grid resolution in kilometers
    pub resolution_km: f64,
}

impl Zone {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        bbox: BoundingBox,
        resolution_km: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            bbox,
            resolution_km,
        }
    }
}
