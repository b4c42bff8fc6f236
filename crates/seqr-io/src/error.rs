use thiserror::Error;

/// Canonical result for the I/O layer.
pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("cannot parse '{value}' in column '{column}' as a number")]
    Parse { column: String, value: String },
}
