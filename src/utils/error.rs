use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{stage} received no rows")]
    EmptyInput { stage: &'static str },
}

impl EtlError {
    /// Storage-side failures have no recovery path and must abort the run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EtlError::IoError(_) | EtlError::DatabaseError(_) | EtlError::SerializationError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
