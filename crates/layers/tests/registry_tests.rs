//! Tests for the built-in layer catalog.

use forecast_common::ForecastError;
use layers::{registry, Lang, LayerContext, LayerRegistry};
use std::collections::HashSet;
use test_utils::{alps_zone, full_location_forecasts, sample_metadata};

#[test]
fn test_standard_catalog_order() {
    let keys: Vec<&str> = registry().keys().collect();
    assert_eq!(
        keys,
        vec![
            "thermal-velocity",
            "boundary-layer-depth",
            "cape",
            "surface-wind",
            "wind-2000m",
            "surface-temperature",
            "cloud-cover",
            "rain",
        ]
    );
    assert_eq!(registry().len(), 8);
}

#[test]
fn test_keys_are_unique() {
    let keys: HashSet<&str> = registry().keys().collect();
    assert_eq!(keys.len(), registry().len());
}

#[test]
fn test_standard_builds_fresh_registry() {
    let fresh = LayerRegistry::standard().unwrap();
    assert_eq!(fresh.keys().collect::<Vec<_>>(), registry().keys().collect::<Vec<_>>());
}

#[test]
fn test_every_data_path_is_published() {
    let metadata = sample_metadata();
    for layer in registry().iter() {
        assert!(
            metadata.has_variable(layer.data_path().as_str()),
            "{} is not in the sample run",
            layer.data_path()
        );
    }
}

#[test]
fn test_lookup() {
    let layer = registry().get("rain").unwrap();
    assert_eq!(layer.key(), "rain");
    assert!(registry().get("snow").is_none());

    match registry().require("snow") {
        Err(ForecastError::LayerNotFound(key)) => assert_eq!(key, "snow"),
        other => panic!("Expected LayerNotFound, got {:?}", other.map(|l| l.key())),
    }
}

#[test]
fn test_components_by_key() {
    let metadata = sample_metadata();
    let zone = alps_zone();
    let ctx = LayerContext::new(&metadata, &zone, 0, &Lang::Fr);

    let components = registry().components("cloud-cover", &ctx).unwrap();
    let rows = components
        .summarizer
        .summarize(&full_location_forecasts(1), &Lang::Fr);
    assert_eq!(rows[0].label, "Nébulosité");
    assert_eq!(rows[0].value.to_plain_text(), "35 %");

    assert!(registry().components("nope", &ctx).is_err());
}

#[test]
fn test_every_layer_has_labels_in_every_language() {
    for lang in Lang::ALL {
        let messages = lang.messages();
        for layer in registry().iter() {
            assert!(!layer.name(messages).is_empty(), "{} {}", lang, layer.key());
            assert!(!layer.title(messages).is_empty(), "{} {}", lang, layer.key());
        }
    }
}
