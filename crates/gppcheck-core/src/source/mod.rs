mod json;

pub use json::{JsonBufferSource, JsonFileSource};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// A JSON document held in memory, with a label naming where it came from.
pub trait DocumentSource {
    /// Path or pseudo-path shown in reports and errors.
    fn label(&self) -> &str;

    fn bytes(&self) -> &[u8];

    fn decode<T: DeserializeOwned>(&self) -> Result<T, SourceError> {
        serde_json::from_slice(self.bytes()).map_err(|source| SourceError::Json {
            label: self.label().to_string(),
            source,
        })
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON decode error in {label}: {source}")]
    Json {
        label: String,
        #[source]
        source: serde_json::Error,
    },
}
