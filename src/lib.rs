//! Goldbach - minimal-prime Goldbach decomposition scanner
//!
//! For every even number in a range, find the decomposition `n = p + q` with
//! the smallest prime `p >= 3`, then report the number whose minimal `p` is
//! largest (ties go to the larger number).
//!
//! # Architecture
//!
//! - **Primality**: deterministic Miller-Rabin below 2^64, seeded
//!   probabilistic Miller-Rabin above, over arbitrary-precision integers
//! - **Decomposition**: ascending prime candidates, first prime complement wins
//! - **Reduction**: associative, commutative merge of best results
//! - **Scanners**: sequential reference, and a parallel scanner with a shared
//!   claim-next cursor and per-worker accumulators

pub mod config;
pub mod decompose;
pub mod error;
pub mod output;
pub mod prime;
pub mod result;
pub mod runner;
pub mod scan;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use decompose::{Decomposer, EvenNumber, PrimeDecomposition};
pub use error::{GoldbachError, InputValidationError, Result};
pub use result::{merge, BestResult};
pub use scan::ScanRange;
