//! Doolittle LU factorization of a matrix file
//!
//! Reads the execution mode from `config.txt`, factorizes the matrix and
//! writes L, U and the residual to a text report.
//!
//! Usage:
//!   cargo run --release --bin doolittle -- matrix.txt
//!   cargo run --release --bin doolittle -- --parallel --threads 4 matrix.txt

use clap::Parser;
use math_audio_lu::config::{DEFAULT_CONFIG_FILE, RunConfig};
use math_audio_lu::{Outcome, RunSettings, format_half_up, run_and_report};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "doolittle")]
#[command(about = "Dense LU factorization with the Doolittle method", long_about = None)]
struct Args {
    /// Matrix input file (default: input.txt)
    input: Option<PathBuf>,

    /// Configuration file (key=value or .json)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Report path (overrides the configuration)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force the parallel factorizer
    #[arg(short, long)]
    parallel: bool,

    /// Number of worker threads (overrides the configuration, 0 = all cores)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = RunConfig::load_or_default(&args.config)?;
    if args.parallel {
        config.parallel_execution = true;
    }
    if let Some(threads) = args.threads {
        config.threads = threads;
    }
    if let Some(output) = args.output {
        config.output_file = output;
    }

    let settings = RunSettings::new(args.input, &config);
    if settings.input_defaulted {
        log::info!(
            "No input file specified, using default: {}",
            settings.input_file.display()
        );
    }

    let outcome = run_and_report(&settings)?;
    match &outcome {
        Outcome::Success { residual, .. } => println!(
            "Decomposition complete (tolerance {}). Results written to {}",
            format_half_up(residual.tolerance, 4),
            settings.output_file.display()
        ),
        Outcome::InputError(error) | Outcome::SingularError { error, .. } => {
            eprintln!("{error}");
            println!("Report written to {}", settings.output_file.display());
        }
    }

    Ok(())
}
