//! Sequential scanner
//!
//! Walks the range in ascending order with a single accumulator. Used as the
//! reference result for the parallel scanner.

use super::ScanRange;
use crate::decompose::Decomposer;
use crate::error::Result;
use crate::result::{BestResult, BestResultAccumulator};
use std::time::Instant;
use tracing::debug;

/// Scan every even number in `range` and return the best result
///
/// # Errors
///
/// Stops at the first number that cannot be decomposed and returns that
/// error; no partial result is produced.
pub fn scan(range: &ScanRange, decomposer: &Decomposer) -> Result<BestResult> {
    let start = Instant::now();
    let mut accumulator = BestResultAccumulator::new();

    for number in range.numbers() {
        let pair = decomposer.decompose(&number)?;
        accumulator.offer(&number, pair);
    }

    debug!(
        range = %range,
        processed = accumulator.processed(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "sequential scan finished"
    );

    Ok(accumulator.into_best())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GoldbachError;
    use num_bigint::BigUint;

    fn scan_u32(lower: u32, upper: u32) -> Result<BestResult> {
        let range = ScanRange::new(lower.into(), upper.into())?;
        scan(&range, &Decomposer::default())
    }

    #[test]
    fn test_single_number() {
        assert_eq!(scan_u32(6, 6).unwrap().to_string(), "6 = 3 + 3");
        assert_eq!(scan_u32(100, 100).unwrap().to_string(), "100 = 3 + 97");
    }

    #[test]
    fn test_tie_goes_to_largest_number() {
        // 6, 8 and 10 all have minor prime 3
        assert_eq!(scan_u32(6, 10).unwrap().to_string(), "10 = 3 + 7");
    }

    #[test]
    fn test_largest_minor_wins() {
        // 98 = 19 + 79 has the largest minor prime below 100
        assert_eq!(scan_u32(6, 100).unwrap().to_string(), "98 = 19 + 79");
    }

    #[test]
    fn test_lower_bound_four_aborts() {
        match scan_u32(4, 10) {
            Err(GoldbachError::InvariantViolation { number }) => {
                assert_eq!(number, BigUint::from(4u32))
            }
            other => panic!("expected invariant violation, got {:?}", other),
        }
    }

    #[test]
    fn test_odd_lower_bound_rejected() {
        assert!(matches!(
            scan_u32(5, 10),
            Err(GoldbachError::InvalidInput(crate::error::InputValidationError::LowerBoundOdd))
        ));
    }
}
