use crate::core::batch::BatchReport;
use thiserror::Error;

#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum Error {
    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Credential error: {0}")]
    CredentialError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("{0}")]
    PartialFailure(BatchReport),
}
