//! Dense square matrix store
//!
//! One concrete buffer type backs the input matrix, both triangular factors
//! and the residual. The [`MatrixRole`] tag only changes how a matrix is
//! initialized and how many decimals it is rendered with.

use crate::decimal::format_half_up;
use crate::error::LuError;
use ndarray::{Array2, ArrayView2, ArrayViewMut2};
use std::fmt;

/// What a matrix stands for in a factorization run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixRole {
    /// Input matrix A
    General,
    /// Unit lower triangular factor L
    Lower,
    /// Upper triangular factor U
    Upper,
    /// Residual A - L*U
    Difference,
}

impl MatrixRole {
    /// Number of decimals used when rendering a matrix of this role
    pub fn precision(self) -> usize {
        match self {
            MatrixRole::Difference => 4,
            _ => 1,
        }
    }
}

/// Square n×n matrix stored row-major in one contiguous buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    role: MatrixRole,
    data: Array2<f64>,
}

impl Matrix {
    /// Zero-initialized general matrix
    pub fn zeros(n: usize) -> Self {
        Self {
            role: MatrixRole::General,
            data: Array2::zeros((n, n)),
        }
    }

    /// Identity-initialized lower factor
    pub fn lower(n: usize) -> Self {
        Self {
            role: MatrixRole::Lower,
            data: Array2::eye(n),
        }
    }

    /// Zero-initialized upper factor
    pub fn upper(n: usize) -> Self {
        Self {
            role: MatrixRole::Upper,
            data: Array2::zeros((n, n)),
        }
    }

    pub(crate) fn difference(data: Array2<f64>) -> Self {
        debug_assert!(data.is_square());
        Self {
            role: MatrixRole::Difference,
            data: data.as_standard_layout().into_owned(),
        }
    }

    /// Build a general matrix from its rows.
    ///
    /// Every row must hold exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LuError> {
        let n = rows.len();
        let mut data = Array2::zeros((n, n));

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(LuError::NotSquare {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
            for (j, value) in row.into_iter().enumerate() {
                data[[i, j]] = value;
            }
        }

        Ok(Self {
            role: MatrixRole::General,
            data,
        })
    }

    /// Wrap an existing array as a general matrix
    pub fn from_array(data: Array2<f64>) -> Result<Self, LuError> {
        let (rows, cols) = data.dim();
        if rows != cols {
            return Err(LuError::NotSquareArray { rows, cols });
        }
        Ok(Self {
            role: MatrixRole::General,
            data: data.as_standard_layout().into_owned(),
        })
    }

    /// Side length
    pub fn n(&self) -> usize {
        self.data.nrows()
    }

    pub fn role(&self) -> MatrixRole {
        self.role
    }

    /// Entry at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[[row, col]]
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub(crate) fn view_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.data.view_mut()
    }

    /// Row-major copy of the buffer
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// Frobenius norm: sqrt(Σ a_ij²)
    pub fn frobenius_norm(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// True when the diagonal is exactly one and everything above it is zero
    pub fn is_unit_lower_triangular(&self) -> bool {
        self.data
            .indexed_iter()
            .all(|((i, j), &v)| match i.cmp(&j) {
                std::cmp::Ordering::Less => v == 0.0,
                std::cmp::Ordering::Equal => v == 1.0,
                std::cmp::Ordering::Greater => true,
            })
    }

    /// True when everything below the diagonal is zero
    pub fn is_upper_triangular(&self) -> bool {
        self.data
            .indexed_iter()
            .all(|((i, j), &v)| i <= j || v == 0.0)
    }
}

/// One row per line, each value followed by a space, at the role's precision.
/// Decimal ties round half-up.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.role.precision();
        for row in self.data.rows() {
            for value in row.iter() {
                write!(f, "{} ", format_half_up(*value, precision))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_lower_starts_as_identity() {
        let l = Matrix::lower(3);
        assert_eq!(l.role(), MatrixRole::Lower);
        assert_eq!(l.view(), Array2::<f64>::eye(3).view());
        assert!(l.is_unit_lower_triangular());
    }

    #[test]
    fn test_upper_starts_as_zeros() {
        let u = Matrix::upper(4);
        assert_eq!(u.n(), 4);
        assert!(u.to_vec().iter().all(|&v| v == 0.0));
        assert!(u.is_upper_triangular());
    }

    #[test]
    fn test_from_rows_row_major() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.get(1, 0), 3.0);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0],
            vec![7.0, 8.0, 9.0],
        ]);
        match result {
            Err(LuError::NotSquare { row, expected, got }) => {
                assert_eq!((row, expected, got), (1, 3, 2));
            }
            other => panic!("expected NotSquare, got {other:?}"),
        }
    }

    #[test]
    fn test_from_array_rejects_rectangular() {
        let result = Matrix::from_array(Array2::zeros((2, 3)));
        assert!(matches!(
            result,
            Err(LuError::NotSquareArray { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_from_array_keeps_row_major_order() {
        let transposed = array![[1.0, 2.0], [3.0, 4.0]].reversed_axes();
        let m = Matrix::from_array(transposed).unwrap();
        assert_eq!(m.to_vec(), vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_frobenius_norm() {
        let m = Matrix::from_array(array![[3.0, 0.0], [0.0, 4.0]]).unwrap();
        assert_eq!(m.frobenius_norm(), 5.0);
        assert_eq!(Matrix::zeros(0).frobenius_norm(), 0.0);
    }

    #[test]
    fn test_display_precision_by_role() {
        let a = Matrix::from_array(array![[1.0, 2.5], [-3.26, 4.0]]).unwrap();
        assert_eq!(a.to_string(), "1.0 2.5 \n-3.3 4.0 \n");

        let d = Matrix::difference(array![[0.0, 1e-5], [-0.12346, 2.0]]);
        assert_eq!(d.to_string(), "0.0000 0.0000 \n-0.1235 2.0000 \n");

        let l = Matrix::from_array(array![[0.25, 0.15], [0.35, -0.25]]).unwrap();
        assert_eq!(l.to_string(), "0.3 0.2 \n0.4 -0.3 \n");
    }
}
