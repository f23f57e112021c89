//! Tests for the concrete layers and their reactive components.

use forecast_common::{DetailedForecast, LocationForecasts, Wind};
use layers::variables::{
    BoundaryLayerDepthLayer, CapeLayer, CloudCoverLayer, RainLayer, SurfaceTemperatureLayer,
    ThermalVelocityLayer, WindLayer, CAPE_COLOR_SCALE, WIND_COLOR_SCALE,
};
use layers::{registry, Lang, Layer, LayerContext, Markup};
use renderer::Color;
use test_utils::{full_location_forecasts, location_series, pays_basque_zone, sample_metadata};

/// Summary rows of `layer` at hour 1 of the full fixture, as plain text.
fn summary(layer: &dyn Layer, lang: Lang) -> Vec<(String, String)> {
    let metadata = sample_metadata();
    let zone = pays_basque_zone();
    let ctx = LayerContext::new(&metadata, &zone, 1, &lang);
    let components = layer.reactive_components(&ctx);
    components
        .summarizer
        .summarize(&full_location_forecasts(6), &lang)
        .into_iter()
        .map(|row| (row.label, row.value.to_plain_text()))
        .collect()
}

fn rows(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(l, v)| (l.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Summary rows
// ============================================================================

#[test]
fn test_cape_summary() {
    assert_eq!(summary(&CapeLayer, Lang::En), rows(&[("CAPE", "750 J/kg")]));
}

#[test]
fn test_thermal_velocity_summary() {
    assert_eq!(
        summary(&ThermalVelocityLayer, Lang::En),
        rows(&[("Thermal velocity", "1.8 m/s")])
    );
}

#[test]
fn test_boundary_layer_summary_adds_elevation() {
    // Fixture elevation is 350 m, depth 1450 m
    assert_eq!(
        summary(&BoundaryLayerDepthLayer, Lang::En),
        rows(&[
            ("Boundary layer depth", "1450 m"),
            ("Boundary layer top", "1800 m"),
        ])
    );
}

#[test]
fn test_wind_summaries() {
    assert_eq!(
        summary(&WindLayer::SURFACE, Lang::En),
        rows(&[("Wind speed", "10 km/h"), ("Wind direction", "37°")])
    );
    assert_eq!(
        summary(&WindLayer::AT_2000M, Lang::Fr),
        rows(&[("Vitesse du vent", "20 km/h"), ("Direction du vent", "270°")])
    );
}

#[test]
fn test_wind_direction_near_north_rounds_to_zero() {
    let metadata = sample_metadata();
    let zone = pays_basque_zone();
    let ctx = LayerContext::new(&metadata, &zone, 0, &Lang::En);
    // Blowing from 359.7°
    let wind = Wind::new(0.05, -10.0);
    let forecasts = location_series(&metadata, 1, 0.0, |_, time| DetailedForecast {
        surface_wind: Some(wind),
        ..DetailedForecast::empty_at(time)
    });

    let rows = WindLayer::SURFACE
        .reactive_components(&ctx)
        .summarizer
        .summarize(&forecasts, &Lang::En);
    assert_eq!(rows[1].value.to_plain_text(), "0°");
}

#[test]
fn test_temperature_summary() {
    assert_eq!(
        summary(&SurfaceTemperatureLayer, Lang::En),
        rows(&[("Temperature", "21.5 °C"), ("Dew point", "9.3 °C")])
    );
}

#[test]
fn test_rain_and_clouds_summaries() {
    assert_eq!(summary(&RainLayer, Lang::Fr), rows(&[("Pluie", "0.4 mm")]));
    assert_eq!(
        summary(&CloudCoverLayer, Lang::En),
        rows(&[("Cloud cover", "35 %")])
    );
}

#[test]
fn test_missing_values_default_to_zero() {
    let metadata = sample_metadata();
    let zone = pays_basque_zone();
    let ctx = LayerContext::new(&metadata, &zone, 0, &Lang::En);
    let empty = LocationForecasts {
        elevation: 1200.0,
        forecasts: Vec::new(),
    };

    let summarize = |layer: &dyn Layer| -> Vec<String> {
        layer
            .reactive_components(&ctx)
            .summarizer
            .summarize(&empty, &Lang::En)
            .into_iter()
            .map(|row| row.value.to_plain_text())
            .collect()
    };

    assert_eq!(summarize(&CapeLayer), vec!["0 J/kg"]);
    assert_eq!(summarize(&WindLayer::SURFACE), vec!["0 km/h", "0°"]);
    // Top falls back to the ground itself
    assert_eq!(summarize(&BoundaryLayerDepthLayer), vec!["0 m", "1200 m"]);
    assert_eq!(summarize(&SurfaceTemperatureLayer), vec!["0.0 °C", "0.0 °C"]);
}

#[test]
fn test_every_layer_defaults_missing_values_to_zero() {
    let metadata = sample_metadata();
    let zone = pays_basque_zone();
    let ctx = LayerContext::new(&metadata, &zone, 0, &Lang::En);
    // Ground level, so the boundary layer top is zero as well
    let empty = LocationForecasts {
        elevation: 0.0,
        forecasts: Vec::new(),
    };

    for layer in registry().iter() {
        let rows = layer
            .reactive_components(&ctx)
            .summarizer
            .summarize(&empty, &Lang::En);
        assert!(!rows.is_empty(), "{} has no summary rows", layer.key());
        for row in rows {
            let text = row.value.to_plain_text();
            let number: String = text
                .chars()
                .take_while(|c: &char| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            assert_eq!(
                number.parse::<f64>().ok(),
                Some(0.0),
                "{} row {:?} rendered {:?}",
                layer.key(),
                row.label,
                text
            );
            assert!(text.len() > number.len(), "{} row without unit", layer.key());
        }
    }
}

// ============================================================================
// Legends and help
// ============================================================================

#[test]
fn test_cape_map_key() {
    let metadata = sample_metadata();
    let zone = pays_basque_zone();
    let ctx = LayerContext::new(&metadata, &zone, 0, &Lang::En);
    let legend = CapeLayer.reactive_components(&ctx).map_key;

    assert_eq!(legend.title.as_deref(), Some("CAPE (J/kg)"));
    let labels: Vec<&str> = legend.labels().collect();
    assert_eq!(
        labels,
        vec!["0 J/kg", "500 J/kg", "1000 J/kg", "1500 J/kg", "2000 J/kg", "3000 J/kg"]
    );
    assert_eq!(legend.stops[0].position, 0.0);
    assert_eq!(legend.stops[5].position, 1.0);
    assert_eq!(legend.stops[1].color, Color::rgb(0x96, 0xc8, 0xff));
}

#[test]
fn test_help_is_localized_paragraph() {
    let metadata = sample_metadata();
    let zone = pays_basque_zone();

    let en = CapeLayer.reactive_components(&LayerContext::new(&metadata, &zone, 0, &Lang::En));
    let fr = CapeLayer.reactive_components(&LayerContext::new(&metadata, &zone, 0, &Lang::Fr));

    assert!(matches!(en.help, Markup::Paragraph(_)));
    assert!(en.help.to_plain_text().starts_with("Convective available"));
    assert!(fr.help.to_plain_text().starts_with("Énergie potentielle"));
}

#[test]
fn test_titles_and_names_localized() {
    let layer = &RainLayer;
    assert_eq!(layer.name(Lang::En.messages()), "Rain");
    assert_eq!(layer.name(Lang::Fr.messages()), "Pluie");
    assert_eq!(layer.title(Lang::Fr.messages()), "Pluie totale (mm)");
}

// ============================================================================
// Color scales
// ============================================================================

#[test]
fn test_cape_scale_table() {
    let thresholds: Vec<f64> = CAPE_COLOR_SCALE
        .legend_stops()
        .iter()
        .map(|bp| bp.threshold)
        .collect();
    assert_eq!(thresholds, vec![0.0, 500.0, 1000.0, 1500.0, 2000.0, 3000.0]);
    assert_eq!(CapeLayer.color_scale().interpolate(750.0).to_hex(), "#7de4cb");
}

#[test]
fn test_wind_layers_share_scale() {
    let surface = WindLayer::SURFACE.color_scale();
    let aloft = WindLayer::AT_2000M.color_scale();
    assert!(std::ptr::eq(surface, aloft));
    assert!(std::ptr::eq(surface, &*WIND_COLOR_SCALE));
}

#[test]
fn test_every_builtin_scale_is_usable() {
    for layer in registry().iter() {
        let scale = layer.color_scale();
        let (min, max) = scale.domain();
        assert!(min < max, "{} has a degenerate domain", layer.key());
        assert_eq!(scale.interpolate(f64::NAN), scale.interpolate(min));
    }
}

// ============================================================================
// Heterogeneous dispatch
// ============================================================================

#[test]
fn test_heterogeneous_collection_dispatch() {
    let layers: Vec<Box<dyn Layer>> = vec![
        Box::new(CapeLayer),
        Box::new(WindLayer::AT_2000M),
        Box::new(RainLayer),
    ];
    let metadata = sample_metadata();
    let zone = pays_basque_zone();
    let ctx = LayerContext::new(&metadata, &zone, 0, &Lang::En);
    let forecasts = full_location_forecasts(2);

    let row_counts: Vec<usize> = layers
        .iter()
        .map(|layer| {
            layer
                .reactive_components(&ctx)
                .summarizer
                .summarize(&forecasts, &Lang::En)
                .len()
        })
        .collect();
    assert_eq!(row_counts, vec![1, 2, 1]);

    let paths: Vec<String> = layers.iter().map(|l| l.data_path().to_string()).collect();
    assert_eq!(paths, vec!["cape", "wind-2000m", "rain"]);
}

#[test]
fn test_context_free_parts_match_components() {
    let metadata = sample_metadata();
    let zone = pays_basque_zone();
    let ctx = LayerContext::new(&metadata, &zone, 3, &Lang::Fr);

    for layer in registry().iter() {
        let components = layer.reactive_components(&ctx);
        assert_eq!(components.map_key, layer.map_key(Lang::Fr.messages()));
        assert_eq!(components.help, layer.help(Lang::Fr.messages()));
        assert_eq!(components.map_key.stops.len(), layer.color_scale().len());
    }
}
