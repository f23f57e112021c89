//! Wind layers.
//!
//! Surface wind and wind at 2000 m differ only in the field they read and
//! their labels, so one type covers both and they share a palette.

use forecast_common::{DetailedForecast, Wind};
use once_cell::sync::Lazy;
use renderer::{Color, ColorScale};

use super::{palette, standard_components};
use crate::i18n::Messages;
use crate::layer::{DataPath, Layer, LayerContext, ReactiveComponents};
use crate::markup::Markup;
use crate::summarizer::{Extractor, LabelFn};
use crate::units::{Unit, DEGREES, KM_PER_HOUR};

/// Wind speed palette, km/h.
pub static WIND_COLOR_SCALE: Lazy<ColorScale> = Lazy::new(|| {
    palette(
        "wind",
        &[
            (0.0, Color::rgb(240, 240, 255)),
            (10.0, Color::rgb(150, 200, 255)),
            (20.0, Color::rgb(100, 255, 150)),
            (30.0, Color::rgb(255, 255, 100)),
            (40.0, Color::rgb(255, 150, 50)),
            (60.0, Color::rgb(200, 50, 50)),
        ],
    )
});

#[derive(Debug, Clone, Copy)]
pub struct WindLayer {
    key: &'static str,
    name: LabelFn,
    title: LabelFn,
    help: LabelFn,
    wind: fn(&DetailedForecast) -> Option<Wind>,
}

impl WindLayer {
    /// Wind 10 m above ground.
    pub const SURFACE: WindLayer = WindLayer {
        key: "surface-wind",
        name: |m| m.layer_surface_wind,
        title: |m| m.layer_surface_wind_legend,
        help: |m| m.help_layer_surface_wind,
        wind: |f| f.surface_wind,
    };

    /// Wind around 2000 m AMSL.
    pub const AT_2000M: WindLayer = WindLayer {
        key: "wind-2000m",
        name: |m| m.layer_wind_2000m,
        title: |m| m.layer_wind_2000m_legend,
        help: |m| m.help_layer_wind_2000m,
        wind: |f| f.wind_2000m,
    };
}

impl Layer for WindLayer {
    fn key(&self) -> &'static str {
        self.key
    }

    fn name(&self, messages: &Messages) -> &'static str {
        (self.name)(messages)
    }

    fn title(&self, messages: &Messages) -> &'static str {
        (self.title)(messages)
    }

    fn data_path(&self) -> DataPath {
        DataPath(self.key)
    }

    fn color_scale(&self) -> &'static ColorScale {
        &WIND_COLOR_SCALE
    }

    fn unit(&self) -> Unit {
        KM_PER_HOUR
    }

    fn help_text(&self, messages: &Messages) -> &'static str {
        (self.help)(messages)
    }

    fn reactive_components(&self, ctx: &LayerContext<'_>) -> ReactiveComponents {
        let wind = self.wind;
        let speed = Extractor::new(
            |m| m.summary_wind_speed,
            move |detail| {
                let speed = wind(detail.forecast).map_or(0.0, |w| w.speed());
                Markup::span(KM_PER_HOUR.format(speed))
            },
        );
        let direction = Extractor::new(
            |m| m.summary_wind_direction,
            move |detail| {
                let direction = wind(detail.forecast).map_or(0.0, |w| w.direction());
                // 359.6 rounds to north, not to 360
                Markup::span(DEGREES.format(direction.round() % 360.0))
            },
        );

        standard_components(self, ctx, vec![speed, direction])
    }
}
