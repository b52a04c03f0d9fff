// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SentimentError>;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential error: {0}")]
    Credentials(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Natural Language API error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Input text is empty")]
    EmptyInput,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl From<serde_json::Error> for SentimentError {
    fn from(err: serde_json::Error) -> Self {
        SentimentError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for SentimentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SentimentError::Serialization(err.to_string())
        } else {
            SentimentError::Transport(err.to_string())
        }
    }
}
