//! Error types for loading, factorizing and reporting

use thiserror::Error;

/// Errors that can occur during an LU run
#[derive(Error, Debug)]
pub enum LuError {
    /// A row of the input does not have as many entries as there are rows
    #[error("Matrix must be square: row {row} has {got} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A dense array has a different number of rows and columns
    #[error("Matrix must be square: array is {rows}x{cols}")]
    NotSquareArray { rows: usize, cols: usize },
    /// A zero pivot was met at `U[index][index]`
    #[error("Matrix is singular, cannot perform decomposition (zero pivot at row {index})")]
    SingularPivot { index: usize },
    /// A token of the input matrix is not a number
    #[error("Invalid number {token:?} on line {line}")]
    Parse { line: usize, token: String },
    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl LuError {
    /// Message written to the report for the two terminal error states.
    ///
    /// Other variants never reach the report and fall back to their display text.
    pub fn report_message(&self) -> String {
        match self {
            LuError::NotSquare { .. } | LuError::NotSquareArray { .. } => {
                "\nError: Matrix must be square.".to_string()
            }
            LuError::SingularPivot { .. } => {
                "\nError: Matrix is singular, cannot perform decomposition.".to_string()
            }
            other => format!("\nError: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_messages() {
        let shape = LuError::NotSquare {
            row: 2,
            expected: 3,
            got: 2,
        };
        assert_eq!(shape.report_message(), "\nError: Matrix must be square.");

        let array = LuError::NotSquareArray { rows: 2, cols: 3 };
        assert_eq!(array.report_message(), "\nError: Matrix must be square.");
        assert!(array.to_string().ends_with("array is 2x3"));

        let singular = LuError::SingularPivot { index: 0 };
        assert_eq!(
            singular.report_message(),
            "\nError: Matrix is singular, cannot perform decomposition."
        );
    }

    #[test]
    fn test_display_carries_location() {
        let err = LuError::NotSquare {
            row: 1,
            expected: 3,
            got: 2,
        };
        assert!(err.to_string().contains("row 1 has 2 entries"));
    }
}
