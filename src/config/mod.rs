pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_INPUT: &str = "console.txt";
pub const DEFAULT_OUTPUT: &str = "console.csv";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "console-csv")]
#[command(about = "Convert a contract console log into CSV with token symbols and marker counts")]
pub struct CliConfig {
    /// Console log to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: String,

    /// CSV file to create or overwrite
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Directory that relative input/output paths are resolved against
    #[arg(long, default_value = ".")]
    pub work_dir: String,

    /// Count "input"/"output" marker lines without writing them as rows
    #[arg(long)]
    pub drop_marker_lines: bool,

    /// Print the conversion summary as JSON on stdout
    #[arg(long)]
    pub summary: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log CPU and memory usage after each phase
    #[arg(long)]
    pub monitor: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            work_dir: ".".to_string(),
            drop_marker_lines: false,
            summary: false,
            json_logs: false,
            verbose: false,
            monitor: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn drop_marker_lines(&self) -> bool {
        self.drop_marker_lines
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_path("work_dir", &self.work_dir)?;
        validate_distinct_paths(Path::new(&self.work_dir), &self.input, &self.output)
    }
}
