//! Text report of a run
//!
//! The layout is fixed: a header with the file names and execution mode,
//! followed by what the terminal state allows. A, L and U use one decimal,
//! the difference matrix and its norm use four.

use crate::decimal::format_half_up;
use crate::driver::{Outcome, RunSettings};
use std::io::{self, Write};

/// Write the report for `outcome`
pub fn write_report<W: Write>(
    writer: &mut W,
    settings: &RunSettings,
    outcome: &Outcome,
) -> io::Result<()> {
    if settings.input_defaulted {
        writeln!(
            writer,
            "No input file specified. Using default: {}",
            settings.input_file.display()
        )?;
    }

    write!(writer, "Input file: {}", settings.input_file.display())?;
    write!(writer, "\nOutput file: {}", settings.output_file.display())?;
    writeln!(writer, "\nExecution mode: {}", settings.mode)?;

    match outcome {
        Outcome::InputError(error) => {
            write!(writer, "{}", error.report_message())?;
        }
        Outcome::SingularError { a, error } => {
            write!(writer, "\nMatrix A:\n{a}")?;
            write!(writer, "{}", error.report_message())?;
        }
        Outcome::Success {
            a,
            factors,
            residual,
        } => {
            write!(writer, "\nMatrix A:\n{a}")?;
            write!(writer, "\nFinal Matrix L:\n{}", factors.lower)?;
            write!(writer, "\nFinal Matrix U:\n{}", factors.upper)?;
            write!(writer, "\nDifference Matrix (A - LU):\n{}", residual.difference)?;
            write!(
                writer,
                "\nTolerance (difference between A and LU): {}",
                format_half_up(residual.tolerance, 4)
            )?;
            write!(
                writer,
                "\n\nDecomposition complete. Results written to {}",
                settings.output_file.display()
            )?;
        }
    }

    Ok(())
}

/// Render the report into a string
pub fn render_report(settings: &RunSettings, outcome: &Outcome) -> io::Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, settings, outcome)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
