use std::fs;
use std::path::Path;

use tracing::debug;

use super::{DocumentSource, SourceError};

/// Document read in full from a file on open.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    label: String,
    bytes: Vec<u8>,
}

impl JsonFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let bytes = fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read document");
        Ok(Self {
            label: path.display().to_string(),
            bytes,
        })
    }
}

impl DocumentSource for JsonFileSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Document already in memory (stdin, tests, embedded examples).
#[derive(Debug, Clone)]
pub struct JsonBufferSource {
    label: String,
    bytes: Vec<u8>,
}

impl JsonBufferSource {
    pub fn new(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            bytes: bytes.into(),
        }
    }
}

impl DocumentSource for JsonBufferSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
