//! Forecast run metadata.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{ForecastError, ForecastResult, Zone};

/// Description of one available forecast run.
///
/// Hour offsets count from `first_time_step`, not from `init_time`: a run
/// initialized at 00Z usually publishes its first usable step a few hours
/// later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMetadata {
    /// Model initialization (reference) time
    pub init_time: DateTime<Utc>,

    /// Valid time of hour offset 0
    pub first_time_step: DateTime<Utc>,

    /// Last published hour offset (inclusive)
    pub latest_hour_offset: u32,

    /// Zones covered by this run
    #[serde(default)]
    pub zones: Vec<Zone>,

    /// Variables available in this run, by data path
    #[serde(default)]
    pub variables: Vec<String>,
}

impl ForecastMetadata {
    /// Parse metadata from a JSON string.
    pub fn from_json(json: &str) -> ForecastResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load metadata from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ForecastResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Valid time of the given hour offset.
    pub fn valid_time(&self, hour_offset: u32) -> DateTime<Utc> {
        self.first_time_step + Duration::hours(i64::from(hour_offset))
    }

    /// Whether the hour offset is within the published range.
    ///
    /// Layers do not call this; hour validation belongs to whoever selects
    /// the hour.
    pub fn contains_hour_offset(&self, hour_offset: u32) -> bool {
        hour_offset <= self.latest_hour_offset
    }

    /// Whether the run publishes the given data path.
    pub fn has_variable(&self, data_path: &str) -> bool {
        self.variables.iter().any(|v| v == data_path)
    }

    pub fn zone(&self, id: &str) -> ForecastResult<&Zone> {
        self.zones
            .iter()
            .find(|z| z.id == id)
            .ok_or_else(|| ForecastError::ZoneNotFound(id.to_string()))
    }
}
