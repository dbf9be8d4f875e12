//! Parallel utilities for row-block work splitting
//!
//! Work is split into contiguous blocks, one per worker, and run on a rayon
//! pool. Returning from [`for_each_block`] means every block has finished.

use crate::error::LuError;
use ndarray::{ArrayViewMut, Axis, Dimension};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Parallel execution configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Number of worker threads (None = use rayon default)
    pub num_threads: Option<usize>,
}

impl ParallelConfig {
    /// Use exactly `num_threads` workers
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: Some(num_threads),
        }
    }

    /// Run `op` with the configured number of workers.
    ///
    /// A dedicated pool is built when a thread count is set, otherwise the
    /// global rayon pool is used. `op` receives the worker count.
    pub fn install<R, F>(&self, op: F) -> Result<R, LuError>
    where
        R: Send,
        F: FnOnce(usize) -> R + Send,
    {
        match self.num_threads {
            Some(threads) if threads > 0 => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                Ok(pool.install(|| op(threads)))
            }
            _ => Ok(op(rayon::current_num_threads())),
        }
    }
}

/// Split `0..len` into `workers` contiguous ranges of `len / workers` items.
///
/// The last range absorbs the remainder. Empty ranges are dropped, so with
/// fewer items than workers a single range covers everything.
pub fn block_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = len / workers;

    (0..workers)
        .map(|w| {
            let start = w * chunk;
            let end = if w == workers - 1 { len } else { start + chunk };
            start..end
        })
        .filter(|range| !range.is_empty())
        .collect()
}

/// Split a view along its first axis into the given contiguous ranges.
///
/// `ranges` must start at 0, be contiguous and stay within the axis length.
/// Each block is paired with the index of its first row.
pub fn split_blocks<'a, D: Dimension>(
    mut view: ArrayViewMut<'a, f64, D>,
    ranges: &[Range<usize>],
) -> Vec<(usize, ArrayViewMut<'a, f64, D>)> {
    let mut blocks = Vec::with_capacity(ranges.len());
    let mut offset = 0;

    for range in ranges {
        debug_assert_eq!(range.start, offset);
        let (head, tail) = view.split_at(Axis(0), range.end - offset);
        blocks.push((range.start, head));
        view = tail;
        offset = range.end;
    }

    blocks
}

/// Run `f` on every block concurrently and wait for all of them
pub fn for_each_block<'a, D, F>(blocks: Vec<(usize, ArrayViewMut<'a, f64, D>)>, f: F)
where
    D: Dimension,
    F: Fn(usize, ArrayViewMut<'a, f64, D>) + Sync + Send,
{
    blocks
        .into_par_iter()
        .for_each(|(start, block)| f(start, block));
}
