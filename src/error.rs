//! Error types for Nibras

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NibrasError {
    /// The word list database is missing or could not be opened.
    /// Reported once at startup; the application keeps running without a store.
    #[error("Word list unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("{0}")]
    Other(String),
}

impl From<rusqlite::Error> for NibrasError {
    fn from(e: rusqlite::Error) -> Self {
        NibrasError::Store(e.to_string())
    }
}

impl From<std::io::Error> for NibrasError {
    fn from(e: std::io::Error) -> Self {
        NibrasError::Export(e.to_string())
    }
}

impl serde::Serialize for NibrasError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
