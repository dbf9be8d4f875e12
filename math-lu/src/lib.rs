//! Dense Doolittle LU factorization
//!
//! This crate factorizes a square matrix A into a unit lower triangular L and
//! an upper triangular U without pivoting, and checks the result through the
//! residual A - L·U.
//!
//! # Features
//!
//! - **Sequential factorizer**: row-by-row Doolittle recurrence
//! - **Parallel factorizer**: contiguous row blocks on a rayon pool, bitwise
//!   identical to the sequential path
//! - **Residual**: dense L·U product and Frobenius norm of A - L·U
//! - **Driver**: text matrix input, `config.txt` execution mode, text report
//!
//! # Example
//!
//! ```
//! use math_audio_lu::{ExecutionMode, Matrix, ParallelConfig, decompose};
//! use ndarray::array;
//!
//! let a = Matrix::from_array(array![[4.0, 3.0], [6.0, 3.0]]).unwrap();
//! let outcome = decompose(a, ExecutionMode::Parallel, &ParallelConfig::default()).unwrap();
//! assert_eq!(outcome.tolerance(), Some(0.0));
//! ```

pub mod config;
pub mod decimal;
pub mod direct;
pub mod driver;
pub mod error;
pub mod input;
pub mod matrix;
pub mod parallel;
pub mod report;
pub mod residual;

pub use config::RunConfig;
pub use decimal::format_half_up;
pub use direct::{ExecutionMode, LuFactors, doolittle, doolittle_parallel, factorize};
pub use driver::{Outcome, RunSettings, decompose, run, run_and_report};
pub use error::LuError;
pub use input::{parse_matrix, read_matrix};
pub use matrix::{Matrix, MatrixRole};
pub use parallel::ParallelConfig;
pub use report::{render_report, write_report};
pub use residual::{Residual, residual};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
