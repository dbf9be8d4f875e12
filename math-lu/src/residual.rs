//! Residual of a factorization: D = A - L·U and its Frobenius norm

use crate::direct::LuFactors;
use crate::matrix::Matrix;
use ndarray::{Array2, ArrayView2};

/// Difference matrix together with its Frobenius norm
#[derive(Debug, Clone, PartialEq)]
pub struct Residual {
    /// A - L·U
    pub difference: Matrix,
    /// ‖A - L·U‖_F, reported as the factorization tolerance
    pub tolerance: f64,
}

/// Dense product of two square matrices with the plain triple loop
pub fn mat_mul_square(x: ArrayView2<'_, f64>, y: ArrayView2<'_, f64>) -> Array2<f64> {
    let n = x.nrows();
    debug_assert_eq!(x.dim(), (n, n));
    debug_assert_eq!(y.dim(), (n, n));

    let mut c = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += x[[i, k]] * y[[k, j]];
            }
            c[[i, j]] = sum;
        }
    }
    c
}

/// Compare `a` against the product of its factors
pub fn residual(a: &Matrix, factors: &LuFactors) -> Residual {
    let product = mat_mul_square(factors.lower.view(), factors.upper.view());
    let difference = Matrix::difference(&a.view() - &product);
    let tolerance = difference.frobenius_norm();

    log::debug!("Residual norm ||A - LU||_F = {:.6e}", tolerance);

    Residual {
        difference,
        tolerance,
    }
}
