//! Direct LU factorizers
//!
//! This module provides the Doolittle factorization in two flavors:
//! - [`doolittle`]: sequential, one row at a time
//! - [`doolittle_parallel`]: contiguous row blocks on a rayon pool

mod doolittle;
mod doolittle_parallel;

pub use doolittle::{LuFactors, doolittle};
pub use doolittle_parallel::doolittle_parallel;

use crate::error::LuError;
use crate::matrix::Matrix;
use crate::parallel::ParallelConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which factorizer a run uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
}

impl ExecutionMode {
    pub fn from_parallel_flag(parallel: bool) -> Self {
        if parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Sequential => write!(f, "sequential"),
            ExecutionMode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Factorize `a` with the factorizer selected by `mode`
pub fn factorize(
    a: &Matrix,
    mode: ExecutionMode,
    parallel: &ParallelConfig,
) -> Result<LuFactors, LuError> {
    match mode {
        ExecutionMode::Sequential => doolittle(a),
        ExecutionMode::Parallel => doolittle_parallel(a, parallel),
    }
}
