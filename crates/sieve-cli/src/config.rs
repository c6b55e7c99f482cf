use crate::cli::Cli;
use crate::error::{CliError, Result};
use pdbsieve::engine::config::FilterConfigBuilder;
use pdbsieve::workflows::extract::ExtractionConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Filter thresholds as they appear in an optional TOML config file.
///
/// Every field is optional; CLI flags override file values, and anything
/// still unset falls back to the built-in defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialFilterConfig {
    pub min_chain_length: Option<usize>,
    pub max_resolution: Option<f64>,
    pub max_gap_distance: Option<f64>,
}

impl PartialFilterConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::ConfigFile {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

/// Merges CLI arguments, the optional config file, and built-in defaults
/// into the final run configuration (flag > file > default).
pub fn resolve(cli: &Cli) -> Result<ExtractionConfig> {
    let file_config = match &cli.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            PartialFilterConfig::from_file(path)?
        }
        None => PartialFilterConfig::default(),
    };

    let mut builder = FilterConfigBuilder::new();
    if let Some(length) = cli.min_length.or(file_config.min_chain_length) {
        builder = builder.min_chain_length(length);
    }
    if let Some(ceiling) = cli.max_resolution.or(file_config.max_resolution) {
        builder = builder.max_resolution(ceiling);
    }
    if let Some(distance) = cli.max_gap_distance.or(file_config.max_gap_distance) {
        builder = builder.max_gap_distance(distance);
    }
    let filter = builder.build();

    if filter.max_resolution <= 0.0 {
        return Err(CliError::Config(format!(
            "max-resolution must be positive, got {}",
            filter.max_resolution
        )));
    }
    if filter.max_gap_distance <= 0.0 {
        return Err(CliError::Config(format!(
            "max-gap-distance must be positive, got {}",
            filter.max_gap_distance
        )));
    }

    Ok(ExtractionConfig {
        input_root: cli.input.clone(),
        output_path: cli.output.clone(),
        filter,
    })
}
