//! Common test fixtures for forecast layer tests.
//!
//! This module provides pre-defined inputs that represent the situations
//! layers are rendered for.

use chrono::{DateTime, TimeZone, Utc};
use forecast_common::{BoundingBox, ForecastMetadata, LocationForecasts, Zone};
use std::io::Write;
use tempfile::NamedTempFile;

use crate::generators::{full_detail, location_series};

/// Common bounding box definitions for testing.
pub mod bbox {
    /// Pays Basque forecast domain
    pub const PAYS_BASQUE: (f64, f64, f64, f64) = (-2.2, 42.8, 0.2, 43.6);

    /// Western Alps forecast domain
    pub const ALPS: (f64, f64, f64, f64) = (5.0, 43.5, 8.0, 46.5);
}

/// Model initialization time used by all fixtures.
pub fn init_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 0, 0, 0).unwrap()
}

/// Valid time of hour offset 0 in [`sample_metadata`].
pub fn first_time_step() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 6, 0, 0).unwrap()
}

pub fn pays_basque_zone() -> Zone {
    let (w, s, e, n) = bbox::PAYS_BASQUE;
    Zone::new("pays-basque", "Pays Basque", BoundingBox::new(w, s, e, n), 2.5)
}

pub fn alps_zone() -> Zone {
    let (w, s, e, n) = bbox::ALPS;
    Zone::new("alps", "Alpes", BoundingBox::new(w, s, e, n), 2.5)
}

/// A 48-hour run over two zones publishing every soaring variable.
pub fn sample_metadata() -> ForecastMetadata {
    ForecastMetadata {
        init_time: init_time(),
        first_time_step: first_time_step(),
        latest_hour_offset: 48,
        zones: vec![pays_basque_zone(), alps_zone()],
        variables: [
            "cape",
            "thermal-velocity",
            "boundary-layer-depth",
            "surface-wind",
            "wind-2000m",
            "rain",
            "surface-temperature",
            "cloud-cover",
        ]
        .iter()
        .map(|v| v.to_string())
        .collect(),
    }
}

/// Hourly forecasts for the first `hours` offsets with every field set.
pub fn full_location_forecasts(hours: u32) -> LocationForecasts {
    let metadata = sample_metadata();
    location_series(&metadata, hours, 350.0, |_, time| full_detail(time))
}

/// Write `contents` to a temporary `.json` file kept alive by the handle.
pub fn temp_json_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

/// JSON rendering of [`sample_metadata`].
pub fn sample_metadata_json() -> String {
    serde_json::to_string(&sample_metadata()).expect("serialize metadata")
}
