use crate::utils::error::Result;

/// Where a document's raw bytes come from.
pub trait DocumentSource {
    /// Human-readable location, used in messages and logs.
    fn location(&self) -> &str;

    /// Reads the whole document. Fails with `FileNotFound` when there is
    /// nothing at `location`.
    fn read(&self) -> Result<Vec<u8>>;
}

/// In-memory source, handy when the bytes are already loaded.
#[derive(Debug, Clone)]
pub struct BytesSource {
    name: String,
    data: Vec<u8>,
}

impl BytesSource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

impl DocumentSource for BytesSource {
    fn location(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Vec<u8>> {
        Ok(self.data.clone())
    }
}
