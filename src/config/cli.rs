//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Usage text printed to stderr when the input is rejected
pub const USAGE: &str = "\
Usage: goldbach [OPTIONS] <lowerBound> <upperBound>
  <lowerBound> = lower bound (even, at least 4)
  <upperBound> = upper bound (even)
Remember: lower bound should not be greater than upper bound";

/// Scan mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Single pass on the calling thread
    Sequential,
    /// Dynamically scheduled worker threads
    Parallel,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// `<number> = <minor> + <major>`
    Text,
    /// JSON report
    Json,
}

/// Goldbach - find the even number whose minimal Goldbach prime is largest
#[derive(Parser, Debug)]
#[command(name = "goldbach")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Inclusive bounds: <lowerBound> <upperBound>
    ///
    /// Counted and validated by the scanner so every rejection gets the same
    /// usage message.
    #[arg(value_name = "BOUND")]
    pub bounds: Vec<String>,

    /// Scan mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Number of worker threads (default: one per CPU)
    #[arg(short = 't', long, env = "GOLDBACH_WORKERS")]
    pub workers: Option<usize>,

    /// Offsets each worker claims per fetch from the shared cursor
    #[arg(long)]
    pub chunk_size: Option<u64>,

    /// Miller-Rabin rounds for minor prime candidates
    #[arg(long)]
    pub candidate_rounds: Option<u32>,

    /// Miller-Rabin rounds for the major prime
    #[arg(long)]
    pub complement_rounds: Option<u32>,

    /// TOML configuration file (command-line options take precedence)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
