//! Error types
//!
//! Two families: input problems caught before any scan starts, and fatal
//! computation errors raised while scanning.

use num_bigint::BigUint;
use thiserror::Error;

/// Rejected input, detected at the boundary before computation begins
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputValidationError {
    #[error("Number of input arguments should exactly be 2, got {0}")]
    ArgumentCount(usize),

    #[error("{name} is not a non-negative decimal integer: {value:?}")]
    NotAnInteger { name: &'static str, value: String },

    #[error("Lower bound can not be greater than upper bound")]
    LowerAboveUpper,

    #[error("Lower bound should be an even number")]
    LowerBoundOdd,

    #[error("Upper bound should be an even number")]
    UpperBoundOdd,

    #[error("{0} is not an even number")]
    NotEven(BigUint),

    #[error("{name} must be at least 4, got {value}")]
    BelowMinimum { name: &'static str, value: BigUint },

    #[error("Range span {span} is too wide for the parallel scanner (max {max})")]
    RangeTooWide { span: BigUint, max: u64 },

    #[error("Worker count must be at least 1")]
    NoWorkers,

    #[error("Chunk size must be at least 1")]
    ZeroChunkSize,

    #[error("Invalid primality rounds: candidate={candidate}, complement={complement} (both >= 1, complement >= candidate)")]
    InvalidRounds { candidate: u32, complement: u32 },
}

/// Errors surfaced by the scanners
#[derive(Error, Debug)]
pub enum GoldbachError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputValidationError),

    /// No prime pair with a minor addend >= 3 was found. Fatal for the scan.
    #[error("Invariant violated: no prime decomposition found for {number}")]
    InvariantViolation { number: BigUint },

    #[error("Worker {0} panicked")]
    WorkerPanicked(usize),
}

/// Result type used by the scanning library
pub type Result<T> = std::result::Result<T, GoldbachError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            InputValidationError::LowerBoundOdd.to_string(),
            "Lower bound should be an even number"
        );
        assert_eq!(
            InputValidationError::ArgumentCount(3).to_string(),
            "Number of input arguments should exactly be 2, got 3"
        );
    }

    #[test]
    fn test_invalid_input_conversion() {
        let err: GoldbachError = InputValidationError::NoWorkers.into();
        assert!(matches!(err, GoldbachError::InvalidInput(InputValidationError::NoWorkers)));
        assert_eq!(err.to_string(), "Invalid input: Worker count must be at least 1");
    }

    #[test]
    fn test_invariant_violation_message() {
        let err = GoldbachError::InvariantViolation { number: BigUint::from(4u32) };
        assert_eq!(err.to_string(), "Invariant violated: no prime decomposition found for 4");
    }
}
