//! Turning a location forecast into labeled summary rows.

use chrono::{DateTime, Utc};
use forecast_common::{DetailedForecast, LocationForecasts};
use serde::Serialize;
use tracing::debug;

use crate::i18n::{Localizer, Messages};
use crate::layer::LayerContext;
use crate::markup::Markup;

/// Resolves a row label in the active language.
pub type LabelFn = fn(&Messages) -> &'static str;

/// The forecast for one time step at one location, with the ground
/// elevation rows may need to convert heights.
#[derive(Debug, Clone, Copy)]
pub struct LocationDetail<'a> {
    pub elevation: f64,
    pub forecast: &'a DetailedForecast,
}

/// One row of a summary: a label lookup and a value renderer.
pub struct Extractor {
    label: LabelFn,
    render: Box<dyn Fn(&LocationDetail<'_>) -> Markup + Send + Sync>,
}

impl Extractor {
    pub fn new<F>(label: LabelFn, render: F) -> Self
    where
        F: Fn(&LocationDetail<'_>) -> Markup + Send + Sync + 'static,
    {
        Self {
            label,
            render: Box::new(render),
        }
    }

    fn row(&self, messages: &Messages, detail: &LocationDetail<'_>) -> SummaryRow {
        SummaryRow {
            label: (self.label)(messages).to_string(),
            value: (self.render)(detail),
        }
    }
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("label", &(self.label)(&crate::i18n::EN))
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: Markup,
}

/// Extractors bound to the valid time of a [`LayerContext`].
///
/// Row labels are resolved on every call, so the same summarizer follows
/// locale switches.
#[derive(Debug)]
pub struct Summarizer {
    valid_time: DateTime<Utc>,
    extractors: Vec<Extractor>,
}

impl Summarizer {
    pub fn valid_time(&self) -> DateTime<Utc> {
        self.valid_time
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// Summarize the forecast valid at this summarizer's time.
    ///
    /// A location without a matching time step is summarized from an empty
    /// forecast, so every row shows its default value.
    pub fn summarize(
        &self,
        forecasts: &LocationForecasts,
        localizer: &dyn Localizer,
    ) -> Vec<SummaryRow> {
        match forecasts.at(self.valid_time) {
            Some(forecast) => self.summarize_detail(
                &LocationDetail {
                    elevation: forecasts.elevation,
                    forecast,
                },
                localizer,
            ),
            None => {
                debug!(
                    valid_time = %self.valid_time,
                    steps = forecasts.forecasts.len(),
                    "No forecast at valid time, summarizing defaults"
                );
                let empty = DetailedForecast::empty_at(self.valid_time);
                self.summarize_detail(
                    &LocationDetail {
                        elevation: forecasts.elevation,
                        forecast: &empty,
                    },
                    localizer,
                )
            }
        }
    }

    /// One row per extractor, in extractor order.
    pub fn summarize_detail(
        &self,
        detail: &LocationDetail<'_>,
        localizer: &dyn Localizer,
    ) -> Vec<SummaryRow> {
        let messages = localizer.messages();
        self.extractors
            .iter()
            .map(|extractor| extractor.row(messages, detail))
            .collect()
    }
}

/// Build a summarizer that renders `extractors` for the hour selected in
/// `ctx`.
pub fn summarizer_from_location_details(
    ctx: &LayerContext<'_>,
    extractors: Vec<Extractor>,
) -> Summarizer {
    Summarizer {
        valid_time: ctx.metadata.valid_time(ctx.hour_offset),
        extractors,
    }
}
