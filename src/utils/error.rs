use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate API returned HTTP {status}")]
    HttpError { status: reqwest::StatusCode },

    #[error("Malformed API response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("{0}")]
    ApiError(String),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, TrackerError>;
