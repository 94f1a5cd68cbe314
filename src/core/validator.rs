use crate::config::cli::LocalFile;
use crate::domain::model::Document;
use crate::domain::ports::DocumentSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::Serialize;
use std::path::Path;

pub const SUCCESS_MESSAGE: &str = "Success: vehicles.json is valid.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub records: usize,
    pub spec_entries: usize,
}

pub struct Validator<S: DocumentSource> {
    source: S,
}

impl<S: DocumentSource> Validator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads, parses and checks the document, stopping at the first problem.
    pub fn validate(&self) -> Result<ValidationSummary> {
        tracing::info!("Validating {}", self.source.location());

        let bytes = self.source.read()?;
        tracing::debug!("Read {} bytes", bytes.len());

        let summary = validate_bytes(&bytes)?;
        tracing::info!(
            "{} records, {} spec entries checked",
            summary.records,
            summary.spec_entries
        );
        Ok(summary)
    }
}

pub fn validate_file<P: AsRef<Path>>(path: P) -> Result<ValidationSummary> {
    Validator::new(LocalFile::new(path.as_ref())).validate()
}

/// Parse and structural checks only; no filesystem access.
pub fn validate_bytes(bytes: &[u8]) -> Result<ValidationSummary> {
    let document = Document::from_slice(bytes)?;
    document.validate()?;

    let spec_entries = document
        .records()
        .filter_map(|record| record.specs())
        .map(Iterator::count)
        .sum();

    Ok(ValidationSummary {
        records: document.len(),
        spec_entries,
    })
}

/// The one line shown to the user for a run.
pub fn outcome_message(outcome: &Result<ValidationSummary>) -> String {
    match outcome {
        Ok(_) => SUCCESS_MESSAGE.to_string(),
        Err(e) => e.to_string(),
    }
}

pub fn exit_code(outcome: &Result<ValidationSummary>) -> i32 {
    match outcome {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}
