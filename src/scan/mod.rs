//! Range scanners
//!
//! Both scanners walk a validated [`ScanRange`] of even numbers, decompose
//! each one and keep the best result:
//!
//! - [`sequential`]: one pass, one accumulator.
//! - [`parallel`]: workers claim chunks of offsets from a shared cursor, each
//!   fills a private accumulator, and the orchestrator folds them after the
//!   join.
//!
//! Both return the same [`BestResult`](crate::result::BestResult) for the
//! same range.
//!
//! # Example
//!
//! ```
//! use goldbach::decompose::Decomposer;
//! use goldbach::scan::{parallel::scan_parallel, sequential::scan, ScanRange};
//!
//! let range = ScanRange::new(6u32.into(), 10u32.into())?;
//! let decomposer = Decomposer::default();
//!
//! let best = scan(&range, &decomposer)?;
//! assert_eq!(best.to_string(), "10 = 3 + 7");
//! assert_eq!(scan_parallel(&range, 4, &decomposer)?, best);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod parallel;
pub mod sequential;

use crate::decompose::EvenNumber;
use crate::error::InputValidationError;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::ToPrimitive;
use std::fmt;

/// Inclusive range of even numbers, both bounds >= 4
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRange {
    lower: BigUint,
    upper: BigUint,
}

impl ScanRange {
    /// Validate and build a range
    ///
    /// Checks run in this order: bound order, lower parity, upper parity,
    /// lower minimum.
    pub fn new(lower: BigUint, upper: BigUint) -> Result<Self, InputValidationError> {
        if upper < lower {
            return Err(InputValidationError::LowerAboveUpper);
        }
        if lower.is_odd() {
            return Err(InputValidationError::LowerBoundOdd);
        }
        if upper.is_odd() {
            return Err(InputValidationError::UpperBoundOdd);
        }
        if lower < BigUint::from(EvenNumber::MIN) {
            return Err(InputValidationError::BelowMinimum {
                name: "Lower bound",
                value: lower,
            });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> &BigUint {
        &self.lower
    }

    pub fn upper(&self) -> &BigUint {
        &self.upper
    }

    /// Count of even numbers in the range
    pub fn count(&self) -> BigUint {
        (&self.upper - &self.lower) / 2u32 + 1u32
    }

    /// Even numbers from lower to upper, ascending
    pub fn numbers(&self) -> impl Iterator<Item = EvenNumber> + '_ {
        let mut next = Some(self.lower.clone());
        std::iter::from_fn(move || {
            let current = next.take()?;
            if current < self.upper {
                next = Some(&current + 2u32);
            }
            Some(EvenNumber::new_unchecked(current))
        })
    }

    /// Largest offset `upper - lower`, as used by the parallel work cursor
    pub fn offset_span(&self) -> Result<u64, InputValidationError> {
        let max = u64::MAX - 1;
        let span = &self.upper - &self.lower;
        match span.to_u64() {
            Some(offset) if offset <= max => Ok(offset),
            _ => Err(InputValidationError::RangeTooWide { span, max }),
        }
    }

    /// Number at `offset` from the lower bound; `None` for odd offsets
    pub fn number_at(&self, offset: u64) -> Option<EvenNumber> {
        if offset % 2 != 0 {
            return None;
        }
        Some(EvenNumber::new_unchecked(&self.lower + offset))
    }
}

impl fmt::Display for ScanRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
