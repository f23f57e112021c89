//! Forecast data model shared by the soaring layer crates.
//!
//! These are the read-only inputs handed to layers by the map shell:
//! the forecast run description, the geographic zone being displayed and
//! the per-location detailed forecast.

pub mod bbox;
pub mod detail;
pub mod error;
pub mod metadata;
pub mod zone;

pub use bbox::BoundingBox;
pub use detail::{DetailedForecast, LocationForecasts, Wind};
pub use error::{ForecastError, ForecastResult};
pub use metadata::ForecastMetadata;
pub use zone::Zone;
