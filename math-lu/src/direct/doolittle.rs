//! Doolittle LU factorization
//!
//! Computes A = L·U with L unit lower triangular and U upper triangular,
//! without row exchanges. A zero pivot stops the factorization.

use crate::error::LuError;
use crate::matrix::Matrix;
use ndarray::{ArrayView1, ArrayView2};

/// Result of a successful factorization
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    /// Unit lower triangular factor
    pub lower: Matrix,
    /// Upper triangular factor
    pub upper: Matrix,
}

/// `a_ij - Σ_{k<len} l_k·u_k`, accumulated in increasing k
///
/// Both factorizers go through this helper so their results agree bit for bit.
#[inline]
pub(crate) fn reduce(a_ij: f64, l: ArrayView1<'_, f64>, u: ArrayView1<'_, f64>) -> f64 {
    let mut sum = 0.0;
    for (&lk, &uk) in l.iter().zip(u.iter()) {
        sum += lk * uk;
    }
    a_ij - sum
}

/// `U[i][j] = A[i][j] - Σ_{k<i} L[i][k]·U[k][j]`
#[inline]
pub(crate) fn upper_entry(
    a: ArrayView2<'_, f64>,
    l: ArrayView2<'_, f64>,
    u: ArrayView2<'_, f64>,
    i: usize,
    j: usize,
) -> f64 {
    reduce(
        a[[i, j]],
        l.slice(ndarray::s![i, ..i]),
        u.slice(ndarray::s![..i, j]),
    )
}

/// Factorize `a` one row at a time on the current thread
pub fn doolittle(a: &Matrix) -> Result<LuFactors, LuError> {
    let n = a.n();
    let mut lower = Matrix::lower(n);
    let mut upper = Matrix::upper(n);

    let a = a.view();
    {
        let mut l = lower.view_mut();
        let mut u = upper.view_mut();

        for i in 0..n {
            // Row i of U only reads rows < i of L and U
            for j in i..n {
                let value = upper_entry(a, l.view(), u.view(), i, j);
                u[[i, j]] = value;
            }

            let pivot = u[[i, i]];
            if pivot == 0.0 {
                log::debug!("Zero pivot at row {} of {}", i, n);
                return Err(LuError::SingularPivot { index: i });
            }

            // Column i of L below the diagonal; L[i][i] stays 1
            for j in (i + 1)..n {
                let residual = reduce(
                    a[[j, i]],
                    l.slice(ndarray::s![j, ..i]),
                    u.slice(ndarray::s![..i, i]),
                );
                l[[j, i]] = residual / pivot;
            }
        }
    }

    log::debug!("Sequential Doolittle factorization of {}x{} done", n, n);
    Ok(LuFactors { lower, upper })
}
