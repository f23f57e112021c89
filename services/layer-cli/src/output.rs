//! Text and JSON renderings of layer components.

use anyhow::Result;
use clap::ValueEnum;
use layers::{LayerRegistry, Markup, Messages, SummaryRow};
use renderer::{Color, Legend};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

pub fn layer_list(
    registry: &LayerRegistry,
    messages: &Messages,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(registry
            .iter()
            .map(|layer| format!("{:<22} {}", layer.key(), layer.name(messages)))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let layers: Vec<_> = registry
                .iter()
                .map(|layer| {
                    json!({
                        "key": layer.key(),
                        "name": layer.name(messages),
                        "title": layer.title(messages),
                        "dataPath": layer.data_path(),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&layers)?)
        }
    }
}

pub fn summary(rows: &[SummaryRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| format!("{}: {}", row.label, row.value.to_plain_text()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
    }
}

pub fn legend(legend: &Legend, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = Vec::with_capacity(legend.stops.len() + 1);
            if let Some(title) = &legend.title {
                lines.push(title.clone());
            }
            for stop in &legend.stops {
                lines.push(format!(
                    "  {:>5.1}%  {:<12} {}",
                    stop.position * 100.0,
                    stop.label,
                    stop.color.to_css()
                ));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "title": legend.title,
            "stops": legend.stops,
            "gradient": legend.to_css_gradient(),
        }))?),
    }
}

pub fn help(markup: &Markup, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(markup.to_plain_text()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "markup": markup,
            "html": markup.to_html(),
        }))?),
    }
}

pub fn color(value: f64, color: &Color, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{} -> {} ({})", value, color.to_hex(), color.to_css())),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "value": value,
            "color": color,
            "hex": color.to_hex(),
            "css": color.to_css(),
        }))?),
    }
}
