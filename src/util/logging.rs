//! Tracing subscriber setup for the CLI

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given verbosity
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "goldbach=debug"
    } else {
        "goldbach=warn"
    }
}

/// Install the global subscriber
///
/// Logs go to stderr; stdout carries only the scan result. `RUST_LOG`
/// replaces the default filter when set.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(verbose)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "goldbach=warn");
        assert_eq!(default_filter(true), "goldbach=debug");
    }

    #[test]
    fn test_filters_parse() {
        for verbose in [false, true] {
            assert!(default_filter(verbose).parse::<EnvFilter>().is_ok());
        }
    }
}
