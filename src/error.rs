use std::io;
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Id conflict: {0}")]
    Conflict(String),
    #[error("No data to export")]
    EmptyExport,
    #[error("Invalid fixture: {0}")]
    InvalidFixture(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Export error: {0}")]
    ExportError(String),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidFixture(err.to_string())
    }
}

pub type Result<T> = StdResult<T, Error>;
