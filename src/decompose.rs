//! Minimal-prime Goldbach decomposition
//!
//! The search walks candidate primes upward from 3 and stops at the first
//! `p` whose complement `n - p` passes the high-confidence primality check.
//! The pair `2 + (n - 2)` is never tried, so `4` has no decomposition here and
//! is reported as an invariant violation.
//!
//! # Example
//!
//! ```
//! use goldbach::config::PrimalityConfig;
//! use goldbach::decompose::{Decomposer, EvenNumber};
//!
//! let decomposer = Decomposer::new(PrimalityConfig::default());
//! let n = EvenNumber::new(100u32.into())?;
//! let pair = decomposer.decompose(&n)?;
//! assert_eq!(pair.to_string(), "3 + 97");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::config::PrimalityConfig;
use crate::error::{GoldbachError, InputValidationError, Result};
use crate::prime::{is_probable_prime, PrimeCandidates};
use num_bigint::BigUint;
use num_integer::Integer;
use std::fmt;
use tracing::trace;

/// Even integer >= 4
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EvenNumber(BigUint);

impl EvenNumber {
    /// Smallest value accepted
    pub const MIN: u32 = 4;

    pub fn new(value: BigUint) -> std::result::Result<Self, InputValidationError> {
        if value < BigUint::from(Self::MIN) {
            return Err(InputValidationError::BelowMinimum { name: "Number", value });
        }
        if value.is_odd() {
            return Err(InputValidationError::NotEven(value));
        }
        Ok(Self(value))
    }

    /// Wrap a value the caller already knows is even and >= 4
    pub(crate) fn new_unchecked(value: BigUint) -> Self {
        debug_assert!(value.is_even() && value >= BigUint::from(Self::MIN));
        Self(value)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

impl fmt::Display for EvenNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two primes summing to an even number, `minor <= major`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeDecomposition {
    pub minor: BigUint,
    pub major: BigUint,
}

impl fmt::Display for PrimeDecomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.minor, self.major)
    }
}

/// Finds minimal-prime decompositions
///
/// Stateless apart from its primality settings, so one instance is shared by
/// reference across all workers of a scan.
#[derive(Debug, Clone, Copy)]
pub struct Decomposer {
    primality: PrimalityConfig,
}

impl Decomposer {
    pub fn new(primality: PrimalityConfig) -> Self {
        Self { primality }
    }

    /// Decompose `n` as `p + q` with `p` the smallest prime >= 3 that works
    ///
    /// `p` comes from the cheap candidate generator; only `q` gets the
    /// high-confidence test.
    ///
    /// # Errors
    ///
    /// [`GoldbachError::InvariantViolation`] when no `p < n` has a prime
    /// complement.
    pub fn decompose(&self, n: &EvenNumber) -> Result<PrimeDecomposition> {
        let number = n.value();
        let start = BigUint::from(2u32);

        let found = PrimeCandidates::after(&start, self.primality.candidate_rounds)
            .take_while(|p| p < number)
            .find_map(|p| {
                let q = number - &p;
                is_probable_prime(&q, self.primality.complement_rounds)
                    .then(|| PrimeDecomposition { minor: p, major: q })
            });

        match found {
            Some(pair) => {
                trace!(number = %number, minor = %pair.minor, major = %pair.major, "decomposed");
                Ok(pair)
            }
            None => Err(GoldbachError::InvariantViolation {
                number: number.clone(),
            }),
        }
    }
}

impl Default for Decomposer {
    fn default() -> Self {
        Self::new(PrimalityConfig::default())
    }
}
