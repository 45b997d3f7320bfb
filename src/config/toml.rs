//! TOML configuration file parsing

use super::*;
use crate::config::cli::{Cli, FormatArg, ModeArg};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Load the config file named on the command line, or defaults
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => parse_toml_file(path),
        None => Ok(Config::default()),
    }
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(mode) = cli.mode {
        config.scan.mode = match mode {
            ModeArg::Sequential => ScanMode::Sequential,
            ModeArg::Parallel => ScanMode::Parallel,
        };
    }
    if let Some(workers) = cli.workers {
        config.scan.workers = Some(workers);
    }
    if let Some(chunk_size) = cli.chunk_size {
        config.scan.chunk_size = chunk_size;
    }

    if let Some(rounds) = cli.candidate_rounds {
        config.primality.candidate_rounds = rounds;
    }
    if let Some(rounds) = cli.complement_rounds {
        config.primality.complement_rounds = rounds;
    }

    if let Some(format) = cli.format {
        config.output.format = match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        };
    }

    config
}
