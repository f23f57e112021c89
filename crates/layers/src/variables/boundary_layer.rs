//! Planetary boundary layer depth.
//!
//! The map shows depth above ground. The summary also reports the top of
//! the layer above mean sea level, which is what pilots compare against
//! the terrain.

use once_cell::sync::Lazy;
use renderer::{Color, ColorScale};

use super::{palette, scalar_row, standard_components};
use crate::i18n::Messages;
use crate::layer::{DataPath, Layer, LayerContext, ReactiveComponents};
use crate::markup::Markup;
use crate::summarizer::Extractor;
use crate::units::{Unit, METERS};

/// Boundary layer depth palette, m AGL.
pub static BOUNDARY_LAYER_DEPTH_COLOR_SCALE: Lazy<ColorScale> = Lazy::new(|| {
    palette(
        "boundary layer depth",
        &[
            (0.0, Color::rgb(200, 50, 50)),
            (500.0, Color::rgb(255, 150, 50)),
            (1000.0, Color::rgb(255, 255, 100)),
            (1500.0, Color::rgb(100, 255, 150)),
            (2000.0, Color::rgb(150, 200, 255)),
            (3000.0, Color::rgb(240, 240, 255)),
        ],
    )
});

#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryLayerDepthLayer;

impl Layer for BoundaryLayerDepthLayer {
    fn key(&self) -> &'static str {
        "boundary-layer-depth"
    }

    fn name(&self, messages: &Messages) -> &'static str {
        messages.layer_boundary_layer_depth
    }

    fn title(&self, messages: &Messages) -> &'static str {
        messages.layer_boundary_layer_depth_legend
    }

    fn data_path(&self) -> DataPath {
        DataPath("boundary-layer-depth")
    }

    fn color_scale(&self) -> &'static ColorScale {
        &BOUNDARY_LAYER_DEPTH_COLOR_SCALE
    }

    fn unit(&self) -> Unit {
        METERS
    }

    fn help_text(&self, messages: &Messages) -> &'static str {
        messages.help_layer_boundary_layer_depth
    }

    fn reactive_components(&self, ctx: &LayerContext<'_>) -> ReactiveComponents {
        let depth = scalar_row(
            |m| m.summary_boundary_layer_depth,
            |f| f.boundary_layer_depth,
            METERS,
        );
        let top = Extractor::new(
            |m| m.summary_boundary_layer_top,
            |detail| {
                let depth = detail.forecast.boundary_layer_depth.unwrap_or(0.0);
                Markup::span(METERS.format(detail.elevation + depth))
            },
        );

        standard_components(self, ctx, vec![depth, top])
    }
}
