//! Matrix text input
//!
//! One row per line, entries separated by whitespace. The number of lines
//! fixes `n` and every line must hold exactly `n` entries.

use crate::error::LuError;
use crate::matrix::Matrix;
use std::fs;
use std::path::Path;

/// Parse a matrix from text
pub fn parse_matrix(text: &str) -> Result<Matrix, LuError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let rows = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| parse_row(idx + 1, line))
        .collect::<Result<Vec<_>, _>>()?;

    Matrix::from_rows(rows)
}

fn parse_row(line_number: usize, line: &str) -> Result<Vec<f64>, LuError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| LuError::Parse {
                line: line_number,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Read and parse a matrix file
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Matrix, LuError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let matrix = parse_matrix(&text)?;
    log::info!("Loaded {}x{} matrix from {}", matrix.n(), matrix.n(), path.display());
    Ok(matrix)
}
