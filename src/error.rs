use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Invalid date expression '{value}': expected {expected}")]
    Validation { value: String, expected: String },

    #[error("Station '{station_id}' was not found")]
    StationNotFound { station_id: String },

    #[error("No readings for station '{station_id}' matching {period}")]
    NoRecord { station_id: String, period: String },

    #[error("Invalid quality flag: {0}")]
    InvalidQualityFlag(u8),

    #[error("Station metadata validation error: {0}")]
    StationValidation(#[from] validator::ValidationErrors),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether this error is recovered at the request boundary and served
    /// as a plain-text response rather than terminating the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ApiError::Validation { .. }
                | ApiError::StationNotFound { .. }
                | ApiError::NoRecord { .. }
        )
    }
}
