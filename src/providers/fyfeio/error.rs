use reqwest::StatusCode;
use thiserror::Error;

use crate::error::Error;

#[derive(Error, Debug)]
pub enum FyfeProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported by the zone API: {0}")]
    Unsupported(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

impl FyfeProviderError {
    /// Classifies a non-success response from the zone API.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                FyfeProviderError::Credential(message)
            }
            StatusCode::NOT_FOUND => FyfeProviderError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                FyfeProviderError::InvalidInput(message)
            }
            StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED => {
                FyfeProviderError::Unsupported(message)
            }
            _ => FyfeProviderError::Provider(format!("{status}: {message}")),
        }
    }
}

pub fn map_error(e: FyfeProviderError) -> Error {
    use FyfeProviderError::*;
    match e {
        Http(err) if err.is_decode() => Error::Serialization(err.to_string()),
        Http(err) => Error::Transport(err.to_string()),
        Json(err) => Error::Serialization(err.to_string()),
        Credential(msg) => Error::CredentialError(msg),
        NotFound(msg) => Error::NotFound(msg),
        InvalidInput(msg) => Error::InvalidInput(msg),
        Unsupported(msg) => Error::NotImplemented(msg),
        Provider(msg) => Error::ProviderError(msg),
    }
}
