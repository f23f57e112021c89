//! Command-line front end for the soaring forecast layers.
//!
//! Lists the layer catalog and prints, for one layer:
//! - the summary rows of a location forecast
//! - the legend strip
//! - the help text
//!
//! It can also look up a value in a JSON style file.

mod config;
mod output;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use forecast_common::{ForecastError, ForecastMetadata, LocationForecasts};
use layers::{registry, Lang, LayerContext};
use renderer::StyleConfig;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::CliConfig;
use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "layer-cli")]
#[command(about = "Inspect soaring forecast layers")]
#[command(disable_help_subcommand = true)]
struct Args {
    /// Interface language (en, fr)
    #[arg(long, global = true, env = "LAYER_CLI_LANG")]
    lang: Option<Lang>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// YAML file with default settings
    #[arg(long, global = true, env = "LAYER_CLI_CONFIG")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List layer keys and names
    List,

    /// Summarize a location forecast for one layer
    Summary {
        /// Layer key
        #[arg(long)]
        layer: String,

        /// Location forecast JSON file
        #[arg(long)]
        forecast: PathBuf,

        /// Forecast run metadata JSON file
        #[arg(long)]
        metadata: PathBuf,

        /// Hour offset from the first time step
        #[arg(long)]
        hour: Option<u32>,

        /// Zone id (default: first zone of the run)
        #[arg(long)]
        zone: Option<String>,
    },

    /// Print the legend of a layer
    Legend {
        /// Layer key
        #[arg(long)]
        layer: String,
    },

    /// Print the help text of a layer
    Help {
        /// Layer key
        #[arg(long)]
        layer: String,
    },

    /// Color a value with a style file scale
    Style {
        /// Style JSON file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Style name within the file
        #[arg(long)]
        name: String,

        /// Value to color
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
    },
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // Logs go to stderr, stdout carries the command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = CliConfig::load(args.config.as_deref())?;
    let lang = args.lang.or(config.lang).unwrap_or_default();
    let format = args.format.or(config.format).unwrap_or_default();
    debug!(%lang, ?format, "Resolved settings");

    let text = run(args.command, &config, lang, format)?;
    println!("{}", text);
    Ok(())
}

fn run(command: Command, config: &CliConfig, lang: Lang, format: OutputFormat) -> Result<String> {
    let messages = lang.messages();

    match command {
        Command::List => output::layer_list(registry(), messages, format),

        Command::Summary {
            layer,
            forecast,
            metadata,
            hour,
            zone,
        } => {
            let metadata = ForecastMetadata::from_file(&metadata)
                .with_context(|| format!("Failed to load metadata: {:?}", metadata))?;
            let forecasts = LocationForecasts::from_file(&forecast)
                .with_context(|| format!("Failed to load forecast: {:?}", forecast))?;

            let hour_offset = hour.or(config.hour).unwrap_or(0);
            if !metadata.contains_hour_offset(hour_offset) {
                return Err(ForecastError::InvalidParameter {
                    param: "hour".to_string(),
                    message: format!(
                        "{} is past the latest published offset {}",
                        hour_offset, metadata.latest_hour_offset
                    ),
                }
                .into());
            }

            let zone = match zone.as_deref().or(config.zone.as_deref()) {
                Some(id) => metadata.zone(id)?,
                None => match metadata.zones.first() {
                    Some(zone) => zone,
                    None => bail!("Forecast run has no zones"),
                },
            };

            let layer = registry().require(&layer)?;
            if !metadata.has_variable(layer.data_path().as_str()) {
                warn!(
                    layer = layer.key(),
                    "Run does not list this variable, values will default"
                );
            }

            let ctx = LayerContext::new(&metadata, zone, hour_offset, &lang);
            info!(?ctx, layer = layer.key(), "Summarizing location forecast");
            let components = registry().components(layer.key(), &ctx)?;
            let rows = components.summarizer.summarize(&forecasts, &lang);
            output::summary(&rows, format)
        }

        Command::Legend { layer } => {
            let layer = registry().require(&layer)?;
            output::legend(&layer.map_key(messages), format)
        }

        Command::Help { layer } => {
            let layer = registry().require(&layer)?;
            output::help(&layer.help(messages), format)
        }

        Command::Style { file, name, value } => {
            let Some(path) = file.or_else(|| config.style_file.clone()) else {
                bail!("No style file given (use --file or style_file in the config)");
            };
            let styles = StyleConfig::from_file(&path)?;
            if let Err(e) = styles.validate() {
                warn!(error = %e, path = ?path, "Style file has invalid entries");
            }
            let scale = styles.get(&name)?.color_scale()?;
            output::color(value, &scale.interpolate(value), format)
        }
    }
}
