pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalFile, CliConfig};
pub use core::validator::{
    exit_code, outcome_message, validate_bytes, validate_file, ValidationSummary, Validator,
};
pub use domain::model::{Document, DEFAULT_DATA_PATH, REQUIRED_KEYS};
pub use utils::error::{ErrorKind, Result, ValidationError};
