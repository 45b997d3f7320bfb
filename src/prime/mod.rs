//! Primality testing and prime generation
//!
//! Thin layer over `num_bigint_dig::prime::probably_prime`, which runs
//! Miller-Rabin with the requested number of bases followed by a Baillie-PSW
//! test. Two confidence levels are used by callers:
//!
//! - **Candidate rounds** (cheap): drive the ascending prime generator that
//!   produces the minor addend.
//! - **Complement rounds** (expensive): decide whether `n - p` is prime, which
//!   is what the reported answer depends on.
//!
//! The Miller-Rabin bases are derived from the tested value, so a given number
//! gets the same verdict regardless of which worker tests it. Baillie-PSW has
//! no known counterexample and is exact below 2^64.
//!
//! # Example
//!
//! ```
//! use goldbach::prime::{is_probable_prime, PrimeCandidates};
//! use num_bigint::BigUint;
//!
//! assert!(is_probable_prime(&BigUint::from(97u32), 1));
//! assert!(!is_probable_prime(&BigUint::from(91u32), 1));
//!
//! let first: Vec<BigUint> = PrimeCandidates::after(&BigUint::from(2u32), 1).take(4).collect();
//! assert_eq!(first, vec![3u32, 5, 7, 11].into_iter().map(BigUint::from).collect::<Vec<_>>());
//! ```

use num_bigint::BigUint;
use num_integer::Integer;

/// Test whether `n` is (probably) prime
///
/// `rounds` Miller-Rabin bases run before the Baillie-PSW test; above 64 bits
/// a composite passes the Miller-Rabin part with probability at most
/// `4^-rounds`.
pub fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
    let n = num_bigint_dig::BigUint::from_bytes_le(&n.to_bytes_le());
    num_bigint_dig::prime::probably_prime(&n, rounds as usize)
}

/// Smallest probable prime strictly greater than `n`
pub fn next_probable_prime(n: &BigUint, rounds: u32) -> BigUint {
    let two = BigUint::from(2u32);
    if *n < two {
        return two;
    }

    let mut candidate = n + 1u32;
    if candidate.is_even() {
        candidate += 1u32;
    }
    while !is_probable_prime(&candidate, rounds) {
        candidate += 2u32;
    }
    candidate
}

/// Ascending stream of probable primes
///
/// Each item is the next probable prime after the previous one, tested with
/// the configured (cheap) round count. The stream is unbounded; callers stop
/// it with `take_while`.
#[derive(Debug, Clone)]
pub struct PrimeCandidates {
    current: BigUint,
    rounds: u32,
}

impl PrimeCandidates {
    /// Start the stream at the first probable prime strictly greater than `start`
    pub fn after(start: &BigUint, rounds: u32) -> Self {
        Self {
            current: start.clone(),
            rounds,
        }
    }
}

impl Iterator for PrimeCandidates {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        self.current = next_probable_prime(&self.current, self.rounds);
        Some(self.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, ToPrimitive, Zero};

    fn is_prime_by_trial(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        let mut d = 2;
        while d * d <= n {
            if n % d == 0 {
                return false;
            }
            d += 1;
        }
        true
    }

    #[test]
    fn test_small_values() {
        assert!(!is_probable_prime(&BigUint::zero(), 1));
        assert!(!is_probable_prime(&BigUint::one(), 1));
        assert!(is_probable_prime(&BigUint::from(2u32), 1));
        assert!(is_probable_prime(&BigUint::from(3u32), 1));
        assert!(!is_probable_prime(&BigUint::from(4u32), 1));
    }

    #[test]
    fn test_matches_trial_division() {
        for n in 0..5000u64 {
            assert_eq!(
                is_probable_prime(&BigUint::from(n), 1),
                is_prime_by_trial(n),
                "mismatch at {}",
                n
            );
        }
    }

    #[test]
    fn test_carmichael_numbers_rejected() {
        for &n in &[561u64, 1105, 1729, 2465, 2821, 6601, 8911, 41041, 825265] {
            assert!(!is_probable_prime(&BigUint::from(n), 1), "{} is composite", n);
        }
    }

    #[test]
    fn test_strong_pseudoprimes_to_base_two() {
        // Pass a single base-2 Miller-Rabin round but are composite
        for &n in &[2047u64, 3277, 4033, 4681, 8321, 3_215_031_751] {
            assert!(!is_probable_prime(&BigUint::from(n), 1), "{} is composite", n);
        }
    }

    #[test]
    fn test_known_primes() {
        for &n in &[101u64, 7919, 1_000_000_007, 4_294_967_291, 2_305_843_009_213_693_951] {
            assert!(is_probable_prime(&BigUint::from(n), 1), "{} is prime", n);
        }
    }

    #[test]
    fn test_u64_boundary() {
        // Largest prime below 2^64
        assert!(is_probable_prime(&BigUint::from(18_446_744_073_709_551_557u64), 1));
        assert!(!is_probable_prime(&BigUint::from(u64::MAX), 1));
    }

    #[test]
    fn test_large_primes() {
        // 2^89 - 1 and 2^127 - 1 are Mersenne primes
        let m89 = (BigUint::one() << 89usize) - 1u32;
        let m127 = (BigUint::one() << 127usize) - 1u32;
        assert!(is_probable_prime(&m89, 1));
        assert!(is_probable_prime(&m127, 50));
    }

    #[test]
    fn test_large_composites() {
        // 2^67 - 1 = 193707721 * 761838257287
        let m67 = (BigUint::one() << 67usize) - 1u32;
        assert!(!is_probable_prime(&m67, 50));

        let p = BigUint::from(18_446_744_073_709_551_557u64);
        let square = &p * &p;
        assert!(!is_probable_prime(&square, 50));

        let even = BigUint::one() << 100usize;
        assert!(!is_probable_prime(&even, 50));
    }

    #[test]
    fn test_verdict_is_reproducible() {
        let m127 = (BigUint::one() << 127usize) - 1u32;
        let composite = &m127 * 3u32;
        for _ in 0..10 {
            assert!(is_probable_prime(&m127, 1));
            assert!(!is_probable_prime(&composite, 1));
        }
    }

    #[test]
    fn test_next_probable_prime() {
        assert_eq!(next_probable_prime(&BigUint::zero(), 1), BigUint::from(2u32));
        assert_eq!(next_probable_prime(&BigUint::from(2u32), 1), BigUint::from(3u32));
        assert_eq!(next_probable_prime(&BigUint::from(3u32), 1), BigUint::from(5u32));
        assert_eq!(next_probable_prime(&BigUint::from(89u32), 1), BigUint::from(97u32));
        assert_eq!(next_probable_prime(&BigUint::from(97u32), 1), BigUint::from(101u32));
    }

    #[test]
    fn test_next_probable_prime_beyond_u64() {
        // 2^64 + 13 is the smallest prime above 2^64
        let start = BigUint::one() << 64usize;
        let expected = &start + 13u32;
        assert_eq!(next_probable_prime(&start, 50), expected);
    }

    #[test]
    fn test_candidates_ascending() {
        let primes: Vec<u64> = PrimeCandidates::after(&BigUint::from(2u32), 1)
            .take_while(|p| *p < BigUint::from(100u32))
            .map(|p| p.to_u64().unwrap())
            .collect();

        let expected: Vec<u64> = (3..100).filter(|&n| is_prime_by_trial(n)).collect();
        assert_eq!(primes, expected);
    }
}
