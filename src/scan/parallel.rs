//! Parallel scanner with dynamic scheduling
//!
//! Decomposition cost varies a lot from one number to the next (the search
//! length depends on where the first prime complement shows up), so work is
//! handed out on demand instead of being split up front:
//!
//! ```text
//!            WorkCursor (atomic, offsets 0..=span)
//!           /        |          \
//!     worker 0    worker 1 ... worker N-1     claim chunk, skip odd offsets,
//!   accumulator  accumulator   accumulator    decompose, offer locally
//!           \        |          /
//!            join (scope end)
//!                   |
//!        fold with merge() in worker order
//! ```
//!
//! Workers share only the cursor and an abort flag. If any decomposition
//! fails the flag is raised, the remaining workers stop claiming work, and the
//! scan returns the error rather than a partial best result.

use super::ScanRange;
use crate::decompose::Decomposer;
use crate::error::{GoldbachError, InputValidationError, Result};
use crate::result::{BestResult, BestResultAccumulator};
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Offsets claimed per cursor fetch when not configured
pub const DEFAULT_CHUNK_SIZE: u64 = 16;

/// Shared claim-next cursor over the offsets `0..=last`
///
/// Every offset is handed out exactly once across all callers. `last` must be
/// below `u64::MAX` so a saturated cursor reads as exhausted.
#[derive(Debug)]
pub struct WorkCursor {
    next: AtomicU64,
    last: u64,
}

impl WorkCursor {
    pub fn new(last: u64) -> Self {
        debug_assert!(last < u64::MAX);
        Self {
            next: AtomicU64::new(0),
            last,
        }
    }

    /// Claim up to `chunk` contiguous offsets, `None` once all are handed out
    pub fn claim(&self, chunk: u64) -> Option<RangeInclusive<u64>> {
        let chunk = chunk.max(1);
        let start = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                (next <= self.last).then(|| next.saturating_add(chunk))
            })
            .ok()?;

        let end = start.saturating_add(chunk - 1).min(self.last);
        Some(start..=end)
    }
}

/// What one worker hands back at the join
#[derive(Debug)]
struct WorkerReport {
    accumulator: BestResultAccumulator,
    chunks: u64,
    elapsed: Duration,
}

/// Parallel scanner configuration
#[derive(Debug, Clone, Copy)]
pub struct ParallelScanner {
    workers: usize,
    chunk_size: u64,
}

impl ParallelScanner {
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Scan `range` across the configured workers
    ///
    /// Returns the same result as [`super::sequential::scan`] for any worker
    /// count and chunk size.
    pub fn scan(&self, range: &ScanRange, decomposer: &Decomposer) -> Result<BestResult> {
        if self.workers == 0 {
            return Err(InputValidationError::NoWorkers.into());
        }
        if self.chunk_size == 0 {
            return Err(InputValidationError::ZeroChunkSize.into());
        }

        let last = range.offset_span()?;
        let cursor = WorkCursor::new(last);
        let abort = AtomicBool::new(false);
        let chunk = self.chunk_size;

        debug!(
            range = %range,
            workers = self.workers,
            chunk_size = chunk,
            "starting parallel scan"
        );

        let outcomes = crossbeam::thread::scope(|s| {
            let handles: Vec<_> = (0..self.workers)
                .map(|_| {
                    let cursor = &cursor;
                    let abort = &abort;
                    s.spawn(move |_| run_worker(range, cursor, chunk, decomposer, abort))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        })
        .map_err(|_| GoldbachError::WorkerPanicked(0))?;

        // Past the join: no worker is running, accumulators can be folded
        let mut total = BestResultAccumulator::new();
        let mut failure = None;

        for (worker_id, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(Ok(report)) => {
                    debug!(
                        worker = worker_id,
                        processed = report.accumulator.processed(),
                        chunks = report.chunks,
                        elapsed_ms = report.elapsed.as_millis() as u64,
                        best = %report.accumulator.best(),
                        "worker finished"
                    );
                    total.merge_from(report.accumulator);
                }
                Ok(Err(e)) => {
                    warn!(worker = worker_id, error = %e, "worker failed");
                    failure.get_or_insert(e);
                }
                Err(_) => {
                    warn!(worker = worker_id, "worker panicked");
                    failure.get_or_insert(GoldbachError::WorkerPanicked(worker_id));
                }
            }
        }

        if let Some(e) = failure {
            return Err(e);
        }

        debug!(processed = total.processed(), "parallel scan finished");
        Ok(total.into_best())
    }
}

/// Scan `range` with `worker_count` workers and the default chunk size
pub fn scan_parallel(
    range: &ScanRange,
    worker_count: usize,
    decomposer: &Decomposer,
) -> Result<BestResult> {
    ParallelScanner::new(worker_count).scan(range, decomposer)
}

/// Worker loop: claim, decompose, offer to the private accumulator
fn run_worker(
    range: &ScanRange,
    cursor: &WorkCursor,
    chunk: u64,
    decomposer: &Decomposer,
    abort: &AtomicBool,
) -> Result<WorkerReport> {
    let start = Instant::now();
    let mut accumulator = BestResultAccumulator::new();
    let mut chunks = 0u64;

    while !abort.load(Ordering::Relaxed) {
        let Some(offsets) = cursor.claim(chunk) else {
            break;
        };
        chunks += 1;

        for offset in offsets {
            let Some(number) = range.number_at(offset) else {
                continue;
            };
            match decomposer.decompose(&number) {
                Ok(pair) => accumulator.offer(&number, pair),
                Err(e) => {
                    abort.store(true, Ordering::Relaxed);
                    return Err(e);
                }
            }
        }
    }

    Ok(WorkerReport {
        accumulator,
        chunks,
        elapsed: start.elapsed(),
    })
}
