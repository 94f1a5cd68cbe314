pub mod cli;

use crate::domain::model::DEFAULT_DATA_PATH;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vehicle-validator")]
#[command(about = "Check a vehicles.json inventory file before it is published")]
pub struct CliConfig {
    /// Path to the vehicles JSON file
    #[arg(default_value = DEFAULT_DATA_PATH)]
    pub path: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log line format (logs are written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
