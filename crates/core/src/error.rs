use std::io;

/// Errors that can occur during hotcopy operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Project resolution error: {0}")]
    ProjectError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for hotcopy operations
pub type Result<T> = std::result::Result<T, Error>;
