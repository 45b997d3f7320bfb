//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete run configuration
///
/// Every table is optional in a config file; missing fields take their
/// defaults. The scan bounds are never part of the file, they always come
/// from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub primality: PrimalityConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scanner selection and work distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Sequential or parallel scan
    #[serde(default)]
    pub mode: ScanMode,
    /// Worker threads (None = one per CPU)
    #[serde(default)]
    pub workers: Option<usize>,
    /// Offsets claimed per cursor fetch
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u64,
}

fn default_chunk_size() -> u64 {
    crate::scan::parallel::DEFAULT_CHUNK_SIZE
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: ScanMode::default(),
            workers: None,
            chunk_size: default_chunk_size(),
        }
    }
}

impl ScanConfig {
    /// Worker count to use, falling back to the CPU count
    pub fn resolved_workers(&self) -> usize {
        self.workers
            .unwrap_or_else(crate::util::resource::available_workers)
    }
}

/// Scan mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    Sequential,
    #[default]
    Parallel,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Sequential => write!(f, "sequential"),
            ScanMode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Miller-Rabin round counts
///
/// Candidate rounds drive the prime generator for the minor addend; complement
/// rounds decide whether `n - p` is prime and must be at least as strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimalityConfig {
    #[serde(default = "default_candidate_rounds")]
    pub candidate_rounds: u32,
    #[serde(default = "default_complement_rounds")]
    pub complement_rounds: u32,
}

fn default_candidate_rounds() -> u32 {
    1
}

fn default_complement_rounds() -> u32 {
    50
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        Self {
            candidate_rounds: default_candidate_rounds(),
            complement_rounds: default_complement_rounds(),
        }
    }
}

impl fmt::Display for PrimalityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "candidate={} rounds, complement={} rounds",
            self.candidate_rounds, self.complement_rounds
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Result rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<number> = <minor> + <major>`
    #[default]
    Text,
    /// Single JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
