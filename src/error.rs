use thiserror::Error;

pub type Result<T> = std::result::Result<T, KongError>;

#[derive(Error, Debug)]
pub enum KongError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Admin API returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl KongError {
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        KongError::HttpStatus {
            status,
            body: body.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        KongError::ConfigError(msg.into())
    }

    pub fn validation_error(msg: impl Into<String>) -> Self {
        KongError::ValidationError(msg.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            KongError::HttpStatus { status, .. } => Some(*status),
            KongError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
