//! Generators for synthetic detailed forecasts.
//!
//! Values are chosen so each field is easy to recognize in assertions.

use chrono::{DateTime, Utc};
use forecast_common::{DetailedForecast, ForecastMetadata, LocationForecasts, Wind};

/// A detailed forecast with every field populated.
///
/// | field | value |
/// |---|---|
/// | cape | 750 J/kg |
/// | thermal_velocity | 1.8 m/s |
/// | boundary_layer_depth | 1450 m |
/// | surface_wind | u=-6, v=-8 (10 km/h from the north-east) |
/// | wind_2000m | u=20, v=0 (20 km/h from the west) |
/// | rain | 0.4 mm |
/// | surface_temperature | 21.5 °C |
/// | surface_dew_point | 9.3 °C |
/// | total_cloud_cover | 35 % |
pub fn full_detail(time: DateTime<Utc>) -> DetailedForecast {
    DetailedForecast {
        time: Some(time),
        cape: Some(750.0),
        thermal_velocity: Some(1.8),
        boundary_layer_depth: Some(1450.0),
        surface_wind: Some(Wind::new(-6.0, -8.0)),
        wind_2000m: Some(Wind::new(20.0, 0.0)),
        rain: Some(0.4),
        surface_temperature: Some(21.5),
        surface_dew_point: Some(9.3),
        total_cloud_cover: Some(35.0),
    }
}

/// Build an hourly series for offsets `0..hours` of `metadata`.
///
/// `make` receives the hour offset and its valid time.
pub fn location_series<F>(
    metadata: &ForecastMetadata,
    hours: u32,
    elevation: f64,
    mut make: F,
) -> LocationForecasts
where
    F: FnMut(u32, DateTime<Utc>) -> DetailedForecast,
{
    let forecasts = (0..hours)
        .map(|hour| {
            let time = metadata.valid_time(hour);
            let mut detail = make(hour, time);
            detail.time = Some(time);
            detail
        })
        .collect();

    LocationForecasts {
        elevation,
        forecasts,
    }
}

/// A series where CAPE grows by `step` J/kg every hour and nothing else is set.
pub fn cape_ramp(metadata: &ForecastMetadata, hours: u32, step: f64) -> LocationForecasts {
    location_series(metadata, hours, 0.0, |hour, time| DetailedForecast {
        cape: Some(f64::from(hour) * step),
        ..DetailedForecast::empty_at(time)
    })
}

/// `count` evenly spaced values from `min` to `max` inclusive.
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count).map(|i| min + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_metadata;

    #[test]
    fn test_location_series_times_follow_metadata() {
        let metadata = sample_metadata();
        let series = cape_ramp(&metadata, 4, 100.0);
        assert_eq!(series.forecasts.len(), 4);
        assert_eq!(series.forecasts[2].time, Some(metadata.valid_time(2)));
        assert_eq!(series.forecasts[3].cape, Some(300.0));
        assert_eq!(series.forecasts[3].rain, None);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
