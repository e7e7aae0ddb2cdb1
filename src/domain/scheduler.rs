//! Parallel generation advance.
//!
//! Every cell of the next grid is one independent unit of work: it reads
//! only the current grid and writes only its own slot of the next grid.
//! Rayon hands each unit a disjoint `&mut Cell`, so no two units can ever
//! write the same coordinate and no locking is needed during the fan-out.
//! `try_for_each` is the join; the buffers are swapped only after it returns
//! `Ok`.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::{debug, trace};

use super::{rules, DoubleBuffer, Grid, StepError};

/// Fans out per-cell evaluation on a bounded, reusable worker pool.
pub struct StepScheduler {
    pool: ThreadPool,
}

impl StepScheduler {
    /// Build the worker pool. `None` lets rayon pick a width from the
    /// number of available cores.
    pub fn new(threads: Option<usize>) -> Result<Self, ThreadPoolBuildError> {
        let mut builder = ThreadPoolBuilder::new()
            .thread_name(|i| format!("life-step-{i}"));
        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;
        debug!(threads = pool.current_num_threads(), "step scheduler ready");
        Ok(Self { pool })
    }

    /// Number of worker threads in the pool
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Compute `next` from `current`, one unit per cell.
    /// On error `next` may be partially written and must not be committed.
    pub fn evaluate(&self, current: &Grid, next: &mut Grid) -> Result<(), StepError> {
        let size = current.size();
        if next.size() != size {
            return Err(StepError::SizeMismatch {
                current: size,
                next: next.size(),
            });
        }

        self.pool.install(|| {
            next.cells_mut()
                .par_iter_mut()
                .enumerate()
                .try_for_each(|(index, target)| {
                    let (x, y) = current.coords_of(index);
                    let cell = current
                        .get(x, y)
                        .ok_or(StepError::OutOfBounds { x, y, size })?;
                    let neighbors = rules::count_live_neighbors(current, x, y);
                    *target = rules::next_state(cell, neighbors);
                    Ok(())
                })
        })
    }

    /// Advance one generation: evaluate every cell, join, then swap.
    /// Returns the new generation number.
    pub fn advance_generation(&self, buffer: &mut DoubleBuffer) -> Result<u64, StepError> {
        let (current, next) = buffer.split();
        self.evaluate(current, next)?;
        let generation = buffer.commit();
        trace!(generation, "buffers swapped");
        Ok(generation)
    }
}
