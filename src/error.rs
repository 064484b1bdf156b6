use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Data file error: {0}")]
    DataFile(String),

    #[error("Malformed match record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
