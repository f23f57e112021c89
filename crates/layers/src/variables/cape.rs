//! Convective available potential energy.

use once_cell::sync::Lazy;
use renderer::{Color, ColorScale};

use super::{palette, scalar_row, standard_components};
use crate::i18n::Messages;
use crate::layer::{DataPath, Layer, LayerContext, ReactiveComponents};
use crate::units::{Unit, JOULES_PER_KG};

/// CAPE palette, J/kg.
pub static CAPE_COLOR_SCALE: Lazy<ColorScale> = Lazy::new(|| {
    palette(
        "CAPE",
        &[
            (0.0, Color::rgb(0xf0, 0xf0, 0xff)),
            (500.0, Color::rgb(0x96, 0xc8, 0xff)),
            (1000.0, Color::rgb(0x64, 0xff, 0x96)),
            (1500.0, Color::rgb(0xff, 0xff, 0x64)),
            (2000.0, Color::rgb(0xff, 0x96, 0x32)),
            (3000.0, Color::rgb(0xc8, 0x32, 0x32)),
        ],
    )
});

#[derive(Debug, Clone, Copy, Default)]
pub struct CapeLayer;

impl Layer for CapeLayer {
    fn key(&self) -> &'static str {
        "cape"
    }

    fn name(&self, messages: &Messages) -> &'static str {
        messages.layer_cape
    }

    fn title(&self, messages: &Messages) -> &'static str {
        messages.layer_cape_legend
    }

    fn data_path(&self) -> DataPath {
        DataPath("cape")
    }

    fn color_scale(&self) -> &'static ColorScale {
        &CAPE_COLOR_SCALE
    }

    fn unit(&self) -> Unit {
        JOULES_PER_KG
    }

    fn help_text(&self, messages: &Messages) -> &'static str {
        messages.help_layer_cape
    }

    fn reactive_components(&self, ctx: &LayerContext<'_>) -> ReactiveComponents {
        standard_components(
            self,
            ctx,
            vec![scalar_row(|m| m.summary_cape, |f| f.cape, JOULES_PER_KG)],
        )
    }
}
