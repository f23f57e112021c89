//! Optional YAML defaults for the CLI.
//!
//! Command-line flags override anything set here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use layers::Lang;
use serde::Deserialize;
use tracing::{debug, info};

use crate::output::OutputFormat;

/// Contents of a `layer-cli.yaml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Interface language
    pub lang: Option<Lang>,
    /// Output format
    pub format: Option<OutputFormat>,
    /// Zone used when `--zone` is not given
    pub zone: Option<String>,
    /// Hour offset used when `--hour` is not given
    pub hour: Option<u32>,
    /// Style file used when `style --file` is not given
    pub style_file: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse CLI config")
    }

    /// Load a config file. A missing optional path yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No CLI config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        info!(path = ?path, "Loaded CLI config");
        Ok(config)
    }
}
