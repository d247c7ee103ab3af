//! Error types for DishaOrient

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// DishaOrient error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error (config file, sample replay input)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
