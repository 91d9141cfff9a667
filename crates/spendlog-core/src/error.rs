use thiserror::Error;

/// Error type shared by storage backends and the services above them.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
