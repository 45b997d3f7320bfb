//! Input and configuration validation
//!
//! Everything here runs before any scan starts. Failures are typed so the
//! driver can print the reason followed by the usage text.

use super::*;
use crate::error::InputValidationError;
use crate::scan::ScanRange;
use num_bigint::BigUint;

/// Validate the positional arguments and build the scan range
///
/// Expects exactly two values, `<lowerBound> <upperBound>`.
pub fn validate_args(args: &[String]) -> Result<ScanRange, InputValidationError> {
    match args {
        [lower, upper] => validate_bounds(lower, upper),
        _ => Err(InputValidationError::ArgumentCount(args.len())),
    }
}

/// Parse both bounds and check order, parity and minimum
pub fn validate_bounds(lower: &str, upper: &str) -> Result<ScanRange, InputValidationError> {
    let lower = parse_bound("Lower bound", lower)?;
    let upper = parse_bound("Upper bound", upper)?;
    ScanRange::new(lower, upper)
}

/// Plain ASCII digits only: no sign, no separators, no whitespace
fn parse_bound(name: &'static str, value: &str) -> Result<BigUint, InputValidationError> {
    let not_an_integer = || InputValidationError::NotAnInteger {
        name,
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_an_integer());
    }
    value.parse::<BigUint>().map_err(|_| not_an_integer())
}

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<(), InputValidationError> {
    validate_scan(&config.scan)?;
    validate_primality(&config.primality)?;
    Ok(())
}

/// Validate scan configuration
pub fn validate_scan(scan: &ScanConfig) -> Result<(), InputValidationError> {
    if scan.workers == Some(0) {
        return Err(InputValidationError::NoWorkers);
    }
    if scan.chunk_size == 0 {
        return Err(InputValidationError::ZeroChunkSize);
    }
    Ok(())
}

/// Validate primality round counts
pub fn validate_primality(primality: &PrimalityConfig) -> Result<(), InputValidationError> {
    let PrimalityConfig {
        candidate_rounds: candidate,
        complement_rounds: complement,
    } = *primality;

    if candidate == 0 || complement < candidate {
        return Err(InputValidationError::InvalidRounds { candidate, complement });
    }
    Ok(())
}
