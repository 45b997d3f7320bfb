//! Best-result accumulation
//!
//! A [`BestResult`] is the running maximum over decomposed numbers, ordered
//! by `(minor, number)`: the largest minor prime wins and, among equal minor
//! primes, the largest number wins. [`merge`] is the maximum of that total
//! order, so it is associative, commutative and idempotent, and per-worker
//! accumulators can be folded in any order.
//!
//! # Example
//!
//! ```
//! use goldbach::result::{merge, BestResult};
//!
//! let a = BestResult::new(8u32.into(), 3u32.into(), 5u32.into());
//! let b = BestResult::new(12u32.into(), 5u32.into(), 7u32.into());
//!
//! assert_eq!(merge(a.clone(), b.clone()), b);
//! assert_eq!(merge(b.clone(), a), b);
//! assert_eq!(b.to_string(), "12 = 5 + 7");
//! ```

use crate::decompose::{EvenNumber, PrimeDecomposition};
use num_bigint::BigUint;
use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt;

/// A decomposed number and its prime pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResult {
    pub number: BigUint,
    pub minor: BigUint,
    pub major: BigUint,
}

impl BestResult {
    pub fn new(number: BigUint, minor: BigUint, major: BigUint) -> Self {
        Self { number, minor, major }
    }

    /// Starting value of every accumulator
    ///
    /// Minor prime 2 sits below every real decomposition (those start at 3),
    /// so the first offered number always replaces it.
    pub fn sentinel() -> Self {
        Self {
            number: BigUint::zero(),
            minor: BigUint::from(2u32),
            major: BigUint::zero(),
        }
    }

    pub fn from_decomposition(number: &EvenNumber, pair: PrimeDecomposition) -> Self {
        Self {
            number: number.value().clone(),
            minor: pair.minor,
            major: pair.major,
        }
    }

    /// Compare by `(minor, number)`
    pub fn rank(&self, other: &Self) -> Ordering {
        self.minor
            .cmp(&other.minor)
            .then_with(|| self.number.cmp(&other.number))
    }
}

impl fmt::Display for BestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} + {}", self.number, self.minor, self.major)
    }
}

/// Keep whichever result ranks higher; `a` on a full tie
pub fn merge(a: BestResult, b: BestResult) -> BestResult {
    match a.rank(&b) {
        Ordering::Less => b,
        Ordering::Equal | Ordering::Greater => a,
    }
}

/// Private "best so far" state owned by one scanner or worker
///
/// Counts how many numbers were offered alongside the best result, which the
/// scanners report in their logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestResultAccumulator {
    best: BestResult,
    processed: u64,
}

impl BestResultAccumulator {
    /// Create an accumulator seeded with the sentinel
    pub fn new() -> Self {
        Self {
            best: BestResult::sentinel(),
            processed: 0,
        }
    }

    /// Record the decomposition of one number
    pub fn offer(&mut self, number: &EvenNumber, pair: PrimeDecomposition) {
        self.offer_result(BestResult::from_decomposition(number, pair));
    }

    fn offer_result(&mut self, candidate: BestResult) {
        self.processed += 1;
        if candidate.rank(&self.best) == Ordering::Greater {
            self.best = candidate;
        }
    }

    /// Fold another accumulator into this one
    pub fn merge_from(&mut self, other: BestResultAccumulator) {
        let current = std::mem::replace(&mut self.best, BestResult::sentinel());
        self.best = merge(current, other.best);
        self.processed += other.processed;
    }

    pub fn best(&self) -> &BestResult {
        &self.best
    }

    /// Numbers offered so far, including those merged in
    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn into_best(self) -> BestResult {
        self.best
    }
}

impl Default for BestResultAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn result(number: u32, minor: u32) -> BestResult {
        BestResult::new(number.into(), minor.into(), (number - minor).into())
    }

    fn random_results(seed: u64, count: usize) -> Vec<BestResult> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        // Narrow ranges so ties on minor and on number both show up
        (0..count)
            .map(|_| {
                let minor = [3u32, 5, 7, 11][rng.gen_range(0..4)];
                let number = 2 * rng.gen_range(6u32..20);
                result(number, minor)
            })
            .collect()
    }

    #[test]
    fn test_larger_minor_wins() {
        let a = result(100, 3);
        let b = result(98, 19);
        assert_eq!(merge(a.clone(), b.clone()), b);
        assert_eq!(merge(b.clone(), a), b);
    }

    #[test]
    fn test_tie_on_minor_prefers_larger_number() {
        let a = result(8, 3);
        let b = result(10, 3);
        assert_eq!(merge(a.clone(), b.clone()), b);
        assert_eq!(merge(b.clone(), a), b);
    }

    #[test]
    fn test_major_does_not_break_ties() {
        // Same minor, smaller number but larger major must still lose
        let a = BestResult::new(20u32.into(), 7u32.into(), 13u32.into());
        let b = BestResult::new(22u32.into(), 7u32.into(), 1u32.into());
        assert_eq!(merge(a.clone(), b.clone()), b);
        assert_eq!(merge(b.clone(), a), b);
    }

    #[test]
    fn test_sentinel_is_identity() {
        let a = result(6, 3);
        assert_eq!(merge(BestResult::sentinel(), a.clone()), a);
        assert_eq!(merge(a.clone(), BestResult::sentinel()), a);
        assert_ne!(a, BestResult::sentinel());
    }

    #[test]
    fn test_idempotent() {
        for a in random_results(1, 50) {
            assert_eq!(merge(a.clone(), a.clone()), a);
        }
    }

    #[test]
    fn test_commutative() {
        let values = random_results(2, 40);
        for a in &values {
            for b in &values {
                assert_eq!(merge(a.clone(), b.clone()), merge(b.clone(), a.clone()));
            }
        }
    }

    #[test]
    fn test_associative() {
        let values = random_results(3, 16);
        for a in &values {
            for b in &values {
                for c in &values {
                    let left = merge(a.clone(), merge(b.clone(), c.clone()));
                    let right = merge(merge(a.clone(), b.clone()), c.clone());
                    let rotated = merge(merge(b.clone(), c.clone()), a.clone());
                    assert_eq!(left, right);
                    assert_eq!(left, rotated);
                }
            }
        }
    }

    #[test]
    fn test_accumulator_offer() {
        let mut acc = BestResultAccumulator::new();
        assert_eq!(acc.best(), &BestResult::sentinel());

        acc.offer_result(result(6, 3));
        acc.offer_result(result(8, 3));
        acc.offer_result(result(12, 5));
        acc.offer_result(result(14, 3));

        assert_eq!(acc.processed(), 4);
        assert_eq!(acc.best(), &result(12, 5));
        assert_eq!(acc.into_best().to_string(), "12 = 5 + 7");
    }

    #[test]
    fn test_accumulator_merge_order_independent() {
        let values = random_results(4, 60);

        let mut forward = BestResultAccumulator::new();
        for chunk in values.chunks(7) {
            let mut part = BestResultAccumulator::new();
            for value in chunk {
                part.offer_result(value.clone());
            }
            forward.merge_from(part);
        }

        let mut backward = BestResultAccumulator::new();
        for chunk in values.rchunks(5) {
            let mut part = BestResultAccumulator::new();
            for value in chunk.iter().rev() {
                part.offer_result(value.clone());
            }
            backward.merge_from(part);
        }

        assert_eq!(forward, backward);
        assert_eq!(forward.processed(), 60);
    }
}
