//! Forecast layers for soaring pilots.
//!
//! Each [`Layer`] describes one forecast variable: its stable key, localized
//! labels, the color scale used on the map, and the components shown next to
//! it (a location summary, a legend and a help text). Layers are listed in a
//! [`LayerRegistry`] and dispatched through the trait.

pub mod i18n;
pub mod layer;
pub mod markup;
pub mod registry;
pub mod summarizer;
pub mod units;
pub mod variables;

pub use i18n::{Lang, Localizer, Messages, SwitchableLocale, UnknownLang};
pub use layer::{color_scale_legend, DataPath, Layer, LayerContext, ReactiveComponents};
pub use markup::Markup;
pub use registry::{registry, LayerRegistry, RegistryError};
pub use summarizer::{
    summarizer_from_location_details, Extractor, LabelFn, LocationDetail, Summarizer, SummaryRow,
};
pub use units::Unit;
