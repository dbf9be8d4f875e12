//! Run configuration
//!
//! Read from a `key=value` text file (`config.txt`) or from JSON when the
//! path ends in `.json`. Both map onto [`RunConfig`].
//!
//! ```text
//! parallel_execution=true
//! threads=4
//! output_file=output.txt
//! ```

use crate::direct::ExecutionMode;
use crate::error::LuError;
use crate::parallel::ParallelConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default matrix input path
pub const DEFAULT_INPUT_FILE: &str = "input.txt";
/// Default report path
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";
/// Default configuration path
pub const DEFAULT_CONFIG_FILE: &str = "config.txt";

/// Settings loaded from the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Use the parallel factorizer
    #[serde(default)]
    pub parallel_execution: bool,
    /// Worker threads for the parallel factorizer (0 = all cores)
    #[serde(default)]
    pub threads: usize,
    /// Report path
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            parallel_execution: false,
            threads: 0,
            output_file: default_output_file(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a text or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LuError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Ok(serde_json::from_str(&text)?)
        } else {
            Self::parse(&text)
        }
    }

    /// Load configuration, falling back to defaults when the file is missing
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, LuError> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!(
                "Configuration file {} not found, using sequential defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Parse `key=value` lines. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, LuError> {
        let mut config = Self::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(LuError::Config(format!("expected key=value, got {line:?}")));
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "parallel_execution" => {
                    if value != "true" && value != "false" {
                        log::warn!("parallel_execution={value} is not a boolean, running sequentially");
                    }
                    config.parallel_execution = value == "true";
                }
                "threads" => {
                    config.threads = value.parse().map_err(|_| {
                        LuError::Config(format!("threads must be a non-negative integer, got {value:?}"))
                    })?;
                }
                "output_file" => config.output_file = PathBuf::from(value),
                other => log::warn!("Ignoring unknown configuration key {other:?}"),
            }
        }

        Ok(config)
    }

    pub fn mode(&self) -> ExecutionMode {
        ExecutionMode::from_parallel_flag(self.parallel_execution)
    }

    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig {
            num_threads: (self.threads > 0).then_some(self.threads),
        }
    }
}
