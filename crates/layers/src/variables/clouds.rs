use once_cell::sync::Lazy;
use renderer::{Color, ColorScale};

use super::{palette, scalar_row, standard_components};
use crate::i18n::Messages;
use crate::layer::{DataPath, Layer, LayerContext, ReactiveComponents};
use crate::units::{Unit, PERCENT};

/// Total cloud cover palette, %. Clear sky is transparent.
pub static CLOUD_COVER_COLOR_SCALE: Lazy<ColorScale> = Lazy::new(|| {
    palette(
        "cloud cover",
        &[
            (0.0, Color::new(255, 255, 255, 0.0)),
            (50.0, Color::new(160, 160, 160, 0.5)),
            (100.0, Color::new(60, 60, 60, 0.9)),
        ],
    )
});

#[derive(Debug, Clone, Copy, Default)]
pub struct CloudCoverLayer;

impl Layer for CloudCoverLayer {
    fn key(&self) -> &'static str {
        "cloud-cover"
    }

    fn name(&self, messages: &Messages) -> &'static str {
        messages.layer_cloud_cover
    }

    fn title(&self, messages: &Messages) -> &'static str {
        messages.layer_cloud_cover_legend
    }

    fn data_path(&self) -> DataPath {
        DataPath("cloud-cover")
    }

    fn color_scale(&self) -> &'static ColorScale {
        &CLOUD_COVER_COLOR_SCALE
    }

    fn unit(&self) -> Unit {
        PERCENT
    }

    fn help_text(&self, messages: &Messages) -> &'static str {
        messages.help_layer_cloud_cover
    }

    fn reactive_components(&self, ctx: &LayerContext<'_>) -> ReactiveComponents {
        standard_components(
            self,
            ctx,
            vec![scalar_row(
                |m| m.summary_cloud_cover,
                |f| f.total_cloud_cover,
                PERCENT,
            )],
        )
    }
}
