//! The uniform layer interface.

use forecast_common::{ForecastMetadata, Zone};
use renderer::{ColorScale, Legend, LegendSpacing};
use serde::Serialize;
use std::fmt;

use crate::i18n::{Localizer, Messages};
use crate::markup::Markup;
use crate::summarizer::Summarizer;
use crate::units::Unit;

/// Which field of the forecast payload a layer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DataPath(pub &'static str);

impl DataPath {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for DataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Per-request inputs for building a layer's presentation.
#[derive(Clone, Copy)]
pub struct LayerContext<'a> {
    pub metadata: &'a ForecastMetadata,
    pub zone: &'a Zone,
    pub hour_offset: u32,
    pub localizer: &'a dyn Localizer,
}

impl<'a> LayerContext<'a> {
    pub fn new(
        metadata: &'a ForecastMetadata,
        zone: &'a Zone,
        hour_offset: u32,
        localizer: &'a dyn Localizer,
    ) -> Self {
        Self {
            metadata,
            zone,
            hour_offset,
            localizer,
        }
    }

    pub fn messages(&self) -> &'a Messages {
        self.localizer.messages()
    }
}

impl fmt::Debug for LayerContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerContext")
            .field("init_time", &self.metadata.init_time)
            .field("zone", &self.zone.id)
            .field("hour_offset", &self.hour_offset)
            .finish()
    }
}

/// What the shell renders for one layer, for one context.
///
/// Rebuilt whenever the zone, hour or locale changes.
pub struct ReactiveComponents {
    /// Location detail to labeled rows
    pub summarizer: Summarizer,
    /// Legend strip
    pub map_key: Legend,
    /// Localized description
    pub help: Markup,
}

/// A forecast variable displayed as a map overlay.
///
/// Implementations are stateless descriptors sharing process-wide color
/// scales, so the registry can hand out `&dyn Layer` freely.
pub trait Layer: Send + Sync {
    /// Stable identifier used for selection and in URLs. Never change it.
    fn key(&self) -> &'static str;

    /// Menu label.
    fn name(&self, messages: &Messages) -> &'static str;

    /// Legend caption.
    fn title(&self, messages: &Messages) -> &'static str;

    fn data_path(&self) -> DataPath;

    /// Scale shared by the legend and the tile coloring step.
    fn color_scale(&self) -> &'static ColorScale;

    /// Unit of the mapped value, used for legend ticks.
    fn unit(&self) -> Unit;

    fn help_text(&self, messages: &Messages) -> &'static str;

    fn reactive_components(&self, ctx: &LayerContext<'_>) -> ReactiveComponents;

    /// Legend strip in the active language.
    fn map_key(&self, messages: &Messages) -> Legend {
        color_scale_legend(self.color_scale(), self.title(messages), self.unit())
    }

    fn help(&self, messages: &Messages) -> Markup {
        Markup::paragraph(self.help_text(messages))
    }
}

impl fmt::Debug for dyn Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("key", &self.key())
            .field("data_path", &self.data_path())
            .finish()
    }
}

/// A proportional legend of `scale`, ticks labeled with `unit`.
pub fn color_scale_legend(scale: &ColorScale, title: &str, unit: Unit) -> Legend {
    scale.legend(Some(title.to_string()), LegendSpacing::Proportional, |value| {
        unit.format(value)
    })
}
