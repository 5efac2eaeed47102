use thiserror::Error;

/// Application-wide error type - single point of truth
///
/// Malformed on-chain data is NOT an error: the decoder and the classifier
/// degrade the affected field and keep processing the rest of the set.
/// `AppError` covers the CLI/config/file surface only.
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialisation
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Script parsing error
    #[error("Script parsing error: {0}")]
    ScriptParse(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
