use once_cell::sync::Lazy;
use renderer::{Color, ColorScale};

use super::{palette, scalar_row, standard_components};
use crate::i18n::Messages;
use crate::layer::{DataPath, Layer, LayerContext, ReactiveComponents};
use crate::units::{Unit, CELSIUS};

/// 2 m temperature palette, °C.
pub static SURFACE_TEMPERATURE_COLOR_SCALE: Lazy<ColorScale> = Lazy::new(|| {
    palette(
        "surface temperature",
        &[
            (-20.0, Color::rgb(0x64, 0x00, 0xc8)),
            (-10.0, Color::rgb(0x00, 0x64, 0xff)),
            (0.0, Color::rgb(0x00, 0xc8, 0xff)),
            (10.0, Color::rgb(0x64, 0xff, 0x96)),
            (20.0, Color::rgb(0xff, 0xff, 0x64)),
            (30.0, Color::rgb(0xff, 0x96, 0x32)),
            (40.0, Color::rgb(0xc8, 0x32, 0x32)),
        ],
    )
});

/// Temperature 2 m above ground. The summary adds the dew point.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceTemperatureLayer;

impl Layer for SurfaceTemperatureLayer {
    fn key(&self) -> &'static str {
        "surface-temperature"
    }

    fn name(&self, messages: &Messages) -> &'static str {
        messages.layer_surface_temperature
    }

    fn title(&self, messages: &Messages) -> &'static str {
        messages.layer_surface_temperature_legend
    }

    fn data_path(&self) -> DataPath {
        DataPath("surface-temperature")
    }

    fn color_scale(&self) -> &'static ColorScale {
        &SURFACE_TEMPERATURE_COLOR_SCALE
    }

    fn unit(&self) -> Unit {
        CELSIUS
    }

    fn help_text(&self, messages: &Messages) -> &'static str {
        messages.help_layer_surface_temperature
    }

    fn reactive_components(&self, ctx: &LayerContext<'_>) -> ReactiveComponents {
        standard_components(
            self,
            ctx,
            vec![
                scalar_row(|m| m.summary_temperature, |f| f.surface_temperature, CELSIUS),
                scalar_row(|m| m.summary_dew_point, |f| f.surface_dew_point, CELSIUS),
            ],
        )
    }
}
