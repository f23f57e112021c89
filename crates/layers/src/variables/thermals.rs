use once_cell::sync::Lazy;
use renderer::{Color, ColorScale};

use super::{palette, scalar_row, standard_components};
use crate::i18n::Messages;
use crate::layer::{DataPath, Layer, LayerContext, ReactiveComponents};
use crate::units::{Unit, METERS_PER_SECOND};

/// Thermal updraft velocity (W*) palette, m/s. Weak lift fades out.
pub static THERMAL_VELOCITY_COLOR_SCALE: Lazy<ColorScale> = Lazy::new(|| {
    palette(
        "thermal velocity",
        &[
            (0.0, Color::new(255, 255, 255, 0.0)),
            (0.5, Color::rgb(255, 0, 0)),
            (1.0, Color::rgb(255, 165, 0)),
            (1.5, Color::rgb(255, 255, 0)),
            (2.0, Color::rgb(0, 255, 0)),
            (3.0, Color::rgb(0, 255, 255)),
            (4.0, Color::rgb(100, 100, 255)),
        ],
    )
});

#[derive(Debug, Clone, Copy, Default)]
pub struct ThermalVelocityLayer;

impl Layer for ThermalVelocityLayer {
    fn key(&self) -> &'static str {
        "thermal-velocity"
    }

    fn name(&self, messages: &Messages) -> &'static str {
        messages.layer_thermal_velocity
    }

    fn title(&self, messages: &Messages) -> &'static str {
        messages.layer_thermal_velocity_legend
    }

    fn data_path(&self) -> DataPath {
        DataPath("thermal-velocity")
    }

    fn color_scale(&self) -> &'static ColorScale {
        &THERMAL_VELOCITY_COLOR_SCALE
    }

    fn unit(&self) -> Unit {
        METERS_PER_SECOND
    }

    fn help_text(&self, messages: &Messages) -> &'static str {
        messages.help_layer_thermal_velocity
    }

    fn reactive_components(&self, ctx: &LayerContext<'_>) -> ReactiveComponents {
        standard_components(
            self,
            ctx,
            vec![scalar_row(
                |m| m.summary_thermal_velocity,
                |f| f.thermal_velocity,
                METERS_PER_SECOND,
            )],
        )
    }
}
