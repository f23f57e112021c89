use once_cell::sync::Lazy;
use renderer::{Color, ColorScale};

use super::{palette, scalar_row, standard_components};
use crate::i18n::Messages;
use crate::layer::{DataPath, Layer, LayerContext, ReactiveComponents};
use crate::units::{Unit, MILLIMETERS};

/// Rain palette, mm. Dry cells are fully transparent.
pub static RAIN_COLOR_SCALE: Lazy<ColorScale> = Lazy::new(|| {
    palette(
        "rain",
        &[
            (0.0, Color::new(0, 0, 255, 0.0)),
            (0.5, Color::new(0x9f, 0xc5, 0xff, 0.5)),
            (2.0, Color::new(0x5a, 0x96, 0xff, 0.7)),
            (5.0, Color::new(0x1e, 0x50, 0xdc, 0.8)),
            (10.0, Color::new(0x7a, 0x28, 0xc8, 0.9)),
            (20.0, Color::new(0xc8, 0x1e, 0x78, 1.0)),
        ],
    )
});

#[derive(Debug, Clone, Copy, Default)]
pub struct RainLayer;

impl Layer for RainLayer {
    fn key(&self) -> &'static str {
        "rain"
    }

    fn name(&self, messages: &Messages) -> &'static str {
        messages.layer_rain
    }

    fn title(&self, messages: &Messages) -> &'static str {
        messages.layer_rain_legend
    }

    fn data_path(&self) -> DataPath {
        DataPath("rain")
    }

    fn color_scale(&self) -> &'static ColorScale {
        &RAIN_COLOR_SCALE
    }

    fn unit(&self) -> Unit {
        MILLIMETERS
    }

    fn help_text(&self, messages: &Messages) -> &'static str {
        messages.help_layer_rain
    }

    fn reactive_components(&self, ctx: &LayerContext<'_>) -> ReactiveComponents {
        standard_components(
            self,
            ctx,
            vec![scalar_row(|m| m.summary_rain, |f| f.rain, MILLIMETERS)],
        )
    }
}
