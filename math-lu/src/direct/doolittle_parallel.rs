//! Row-block parallel Doolittle factorization
//!
//! Each pivot step `i` runs in two phases:
//!
//! 1. **U row**: the trailing entries `U[i][i..n]` are split into contiguous
//!    blocks and computed concurrently. They read only L row `i` and U rows
//!    `< i`, which are final.
//! 2. **L column**: rows `i+1..n` are split into contiguous row blocks, one per
//!    worker, and each worker fills `L[row][i]` for its own rows.
//!
//! Every phase ends with a fan-in barrier, so no worker ever reads a row that
//! another worker has not finished yet. Entries are accumulated in the same
//! order as the sequential path, so both agree bit for bit.

use super::doolittle::{LuFactors, reduce, upper_entry};
use crate::error::LuError;
use crate::matrix::Matrix;
use crate::parallel::{ParallelConfig, block_ranges, for_each_block, split_blocks};
use ndarray::{ArrayView2, ArrayViewMut2, Axis, s};

/// Factorize `a` with row-block parallelism
pub fn doolittle_parallel(a: &Matrix, config: &ParallelConfig) -> Result<LuFactors, LuError> {
    config.install(|workers| factorize_blocks(a, workers))?
}

fn factorize_blocks(a: &Matrix, workers: usize) -> Result<LuFactors, LuError> {
    let n = a.n();
    let mut lower = Matrix::lower(n);
    let mut upper = Matrix::upper(n);

    log::debug!(
        "Parallel Doolittle factorization of {}x{} on {} workers",
        n,
        n,
        workers
    );

    let a = a.view();
    {
        let mut l = lower.view_mut();
        let mut u = upper.view_mut();

        for i in 0..n {
            upper_row_phase(a, l.view(), u.view_mut(), i, workers);

            let pivot = u[[i, i]];
            if pivot == 0.0 {
                log::debug!("Zero pivot at row {} of {}", i, n);
                return Err(LuError::SingularPivot { index: i });
            }

            lower_column_phase(a, l.view_mut(), u.view(), i, pivot, workers);
        }
    }

    Ok(LuFactors { lower, upper })
}

fn upper_row_phase(
    a: ArrayView2<'_, f64>,
    l: ArrayView2<'_, f64>,
    u: ArrayViewMut2<'_, f64>,
    i: usize,
    workers: usize,
) {
    let n = a.nrows();
    let (done, mut rest) = u.split_at(Axis(0), i);
    let done = done.view();

    let trailing = rest.index_axis_mut(Axis(0), 0).slice_move(s![i..]);
    let blocks = split_blocks(trailing, &block_ranges(n - i, workers));

    for_each_block(blocks, |start, mut block| {
        for (offset, value) in block.iter_mut().enumerate() {
            *value = upper_entry(a, l, done, i, i + start + offset);
        }
    });
}

fn lower_column_phase(
    a: ArrayView2<'_, f64>,
    l: ArrayViewMut2<'_, f64>,
    u: ArrayView2<'_, f64>,
    i: usize,
    pivot: f64,
    workers: usize,
) {
    let n = a.nrows();
    let below = l.slice_move(s![i + 1.., ..]);
    let blocks = split_blocks(below, &block_ranges(n - i - 1, workers));
    let u_col = u.slice(s![..i, i]);

    for_each_block(blocks, |start, mut block| {
        for (offset, mut row) in block.rows_mut().into_iter().enumerate() {
            let j = i + 1 + start + offset;
            let residual = reduce(a[[j, i]], row.slice(s![..i]), u_col);
            row[i] = residual / pivot;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::doolittle;
    use ndarray::{Array2, array};

    fn diagonally_dominant(n: usize) -> Matrix {
        let a = Array2::from_shape_fn((n, n), |(i, j)| {
            if i == j {
                2.0 * n as f64 + 1.0
            } else {
                ((i * 7 + j * 3) % 5) as f64 - 2.0
            }
        });
        Matrix::from_array(a).unwrap()
    }

    #[test]
    fn test_golden_3x3() {
        let a = Matrix::from_array(array![[4.0, 3.0, 2.0], [2.0, 1.0, 1.0], [1.0, 1.0, 1.0]])
            .unwrap();
        let factors = doolittle_parallel(&a, &ParallelConfig::with_threads(2)).unwrap();

        assert_eq!(
            factors.lower.view(),
            array![[1.0, 0.0, 0.0], [0.5, 1.0, 0.0], [0.25, -0.5, 1.0]]
        );
        assert_eq!(
            factors.upper.view(),
            array![[4.0, 3.0, 2.0], [0.0, -0.5, 0.0], [0.0, 0.0, 0.5]]
        );
    }

    #[test]
    fn test_matches_sequential() {
        for &(n, threads) in &[(1, 4), (5, 8), (17, 4), (32, 3), (40, 1)] {
            let a = diagonally_dominant(n);
            let sequential = doolittle(&a).unwrap();
            let parallel = doolittle_parallel(&a, &ParallelConfig::with_threads(threads)).unwrap();
            assert_eq!(sequential, parallel, "n = {n}, threads = {threads}");
        }
    }

    #[test]
    fn test_zero_pivot() {
        let a = Matrix::from_array(array![[0.0, 1.0], [1.0, 1.0]]).unwrap();
        match doolittle_parallel(&a, &ParallelConfig::with_threads(4)) {
            Err(LuError::SingularPivot { index }) => assert_eq!(index, 0),
            other => panic!("expected SingularPivot, got {other:?}"),
        }
    }

    #[test]
    fn test_default_pool() {
        let a = diagonally_dominant(12);
        let factors = doolittle_parallel(&a, &ParallelConfig::default()).unwrap();
        assert!(factors.lower.is_unit_lower_triangular());
        assert!(factors.upper.is_upper_triangular());
    }
}
