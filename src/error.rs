use thiserror::Error;

pub type Result<T> = std::result::Result<T, DebtError>;

#[derive(Error, Debug)]
pub enum DebtError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
