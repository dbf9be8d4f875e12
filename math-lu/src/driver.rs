//! Run orchestration: load → factorize → residual → report
//!
//! A run ends in one of three [`Outcome`]s. A non-square input and a zero
//! pivot are terminal states that still produce a report. I/O, parse and
//! pool errors abort the run instead.

use crate::config::{DEFAULT_INPUT_FILE, RunConfig};
use crate::direct::{ExecutionMode, LuFactors, factorize};
use crate::error::LuError;
use crate::input::read_matrix;
use crate::matrix::Matrix;
use crate::parallel::ParallelConfig;
use crate::report::write_report;
use crate::residual::{Residual, residual};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Everything a run needs to know about its inputs and outputs
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub input_file: PathBuf,
    /// True when no input path was given and the default was used
    pub input_defaulted: bool,
    pub output_file: PathBuf,
    pub mode: ExecutionMode,
    pub parallel: ParallelConfig,
}

impl RunSettings {
    /// Combine an optional input path with the loaded configuration
    pub fn new(input_file: Option<PathBuf>, config: &RunConfig) -> Self {
        let input_defaulted = input_file.is_none();
        Self {
            input_file: input_file.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE)),
            input_defaulted,
            output_file: config.output_file.clone(),
            mode: config.mode(),
            parallel: config.parallel_config(),
        }
    }
}

/// Terminal state of a run
#[derive(Debug)]
pub enum Outcome {
    /// Factorization and residual are available
    Success {
        a: Matrix,
        factors: LuFactors,
        residual: Residual,
    },
    /// The input was not square; nothing was factorized
    InputError(LuError),
    /// A zero pivot stopped the factorization
    SingularError { a: Matrix, error: LuError },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Residual norm, only on success
    pub fn tolerance(&self) -> Option<f64> {
        match self {
            Outcome::Success { residual, .. } => Some(residual.tolerance),
            _ => None,
        }
    }
}

/// Factorize an in-memory matrix and evaluate the residual
pub fn decompose(
    a: Matrix,
    mode: ExecutionMode,
    parallel: &ParallelConfig,
) -> Result<Outcome, LuError> {
    log::info!("Factorizing {}x{} matrix ({} mode)", a.n(), a.n(), mode);

    let factors = match factorize(&a, mode, parallel) {
        Ok(factors) => factors,
        Err(error @ LuError::SingularPivot { .. }) => {
            log::warn!("{}", error);
            return Ok(Outcome::SingularError { a, error });
        }
        Err(other) => return Err(other),
    };

    let residual = residual(&a, &factors);
    log::info!("Tolerance (||A - LU||_F): {:.4e}", residual.tolerance);

    Ok(Outcome::Success {
        a,
        factors,
        residual,
    })
}

/// Load the input matrix and decompose it
pub fn run(settings: &RunSettings) -> Result<Outcome, LuError> {
    let a = match read_matrix(&settings.input_file) {
        Ok(a) => a,
        Err(error @ (LuError::NotSquare { .. } | LuError::NotSquareArray { .. })) => {
            log::warn!("{}", error);
            return Ok(Outcome::InputError(error));
        }
        Err(other) => return Err(other),
    };

    decompose(a, settings.mode, &settings.parallel)
}

/// Run and write the report to `settings.output_file`
pub fn run_and_report(settings: &RunSettings) -> Result<Outcome, LuError> {
    let outcome = run(settings)?;

    let mut writer = BufWriter::new(File::create(&settings.output_file)?);
    write_report(&mut writer, settings, &outcome)?;
    writer.into_inner().map_err(|e| e.into_error())?;

    log::info!("Report written to {}", settings.output_file.display());
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_settings_from_config() {
        let config = RunConfig::parse("parallel_execution=true\nthreads=2").unwrap();

        let settings = RunSettings::new(None, &config);
        assert!(settings.input_defaulted);
        assert_eq!(settings.input_file, PathBuf::from("input.txt"));
        assert_eq!(settings.mode, ExecutionMode::Parallel);
        assert_eq!(settings.parallel, ParallelConfig::with_threads(2));

        let settings = RunSettings::new(Some(PathBuf::from("m.txt")), &config);
        assert!(!settings.input_defaulted);
        assert_eq!(settings.input_file, PathBuf::from("m.txt"));
    }

    #[test]
    fn test_decompose_success() {
        let a = Matrix::from_array(array![[4.0, 3.0, 2.0], [2.0, 1.0, 1.0], [1.0, 1.0, 1.0]])
            .unwrap();
        let outcome = decompose(a, ExecutionMode::Sequential, &ParallelConfig::default()).unwrap();
        assert!(outcome.is_success());
        assert_eq!(outcome.tolerance(), Some(0.0));
    }

    #[test]
    fn test_decompose_singular() {
        let a = Matrix::from_array(array![[0.0, 1.0], [1.0, 1.0]]).unwrap();
        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            let outcome = decompose(a.clone(), mode, &ParallelConfig::with_threads(2)).unwrap();
            match outcome {
                Outcome::SingularError { a: kept, error } => {
                    assert_eq!(kept, a);
                    assert!(matches!(error, LuError::SingularPivot { index: 0 }));
                }
                other => panic!("expected SingularError, got {other:?}"),
            }
        }
    }
}
