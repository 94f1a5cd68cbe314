use crate::domain::ports::DocumentSource;
use crate::utils::error::{Result, ValidationError};
use std::fs;
use std::path::PathBuf;

/// A document stored on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    display: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

impl DocumentSource for LocalFile {
    fn location(&self) -> &str {
        &self.display
    }

    fn read(&self) -> Result<Vec<u8>> {
        if !self.path.exists() {
            return Err(ValidationError::FileNotFound {
                path: self.display.clone(),
            });
        }

        // fs::read closes the handle before returning, on success or error.
        fs::read(&self.path).map_err(|source| ValidationError::Unreadable {
            path: self.display.clone(),
            source,
        })
    }
}
