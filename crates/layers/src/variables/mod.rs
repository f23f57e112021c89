//! The concrete forecast layers.

mod boundary_layer;
mod cape;
mod clouds;
mod rain;
mod temperature;
mod thermals;
mod wind;

pub use boundary_layer::{BoundaryLayerDepthLayer, BOUNDARY_LAYER_DEPTH_COLOR_SCALE};
pub use cape::{CapeLayer, CAPE_COLOR_SCALE};
pub use clouds::{CloudCoverLayer, CLOUD_COVER_COLOR_SCALE};
pub use rain::{RainLayer, RAIN_COLOR_SCALE};
pub use temperature::{SurfaceTemperatureLayer, SURFACE_TEMPERATURE_COLOR_SCALE};
pub use thermals::{ThermalVelocityLayer, THERMAL_VELOCITY_COLOR_SCALE};
pub use wind::{WindLayer, WIND_COLOR_SCALE};

use forecast_common::DetailedForecast;
use renderer::{Color, ColorScale};

use crate::layer::{Layer, LayerContext, ReactiveComponents};
use crate::markup::Markup;
use crate::summarizer::{summarizer_from_location_details, Extractor, LabelFn};
use crate::units::Unit;

/// Build a built-in palette. The tables are constants, so a failure here is
/// a programming error.
pub(crate) fn palette(name: &str, stops: &[(f64, Color)]) -> ColorScale {
    ColorScale::new(stops.iter().copied())
        .unwrap_or_else(|e| panic!("Built-in {} palette is invalid: {}", name, e))
}

/// A row showing one optional scalar, 0 when missing.
pub(crate) fn scalar_row(
    label: LabelFn,
    value: fn(&DetailedForecast) -> Option<f64>,
    unit: Unit,
) -> Extractor {
    Extractor::new(label, move |detail| {
        Markup::span(unit.format(value(detail.forecast).unwrap_or(0.0)))
    })
}

/// Assemble the components every layer exposes: summary rows, its legend
/// and its help paragraph.
pub(crate) fn standard_components(
    layer: &dyn Layer,
    ctx: &LayerContext<'_>,
    extractors: Vec<Extractor>,
) -> ReactiveComponents {
    let messages = ctx.messages();
    ReactiveComponents {
        summarizer: summarizer_from_location_details(ctx, extractors),
        map_key: layer.map_key(messages),
        help: layer.help(messages),
    }
}
