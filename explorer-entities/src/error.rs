use explorer_common::EncodeError;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, ToSchema)]
pub enum InfraError {
    // A stored document could not be encoded or decoded
    #[error("could not encode stored document: {0}")]
    Encoding(String),
}

impl From<EncodeError> for InfraError {
    fn from(err: EncodeError) -> Self {
        Self::Encoding(err.to_string())
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encoding(err.to_string())
    }
}
