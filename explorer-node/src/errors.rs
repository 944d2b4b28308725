use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use explorer_common::EncodeError;
use explorer_entities::{ConfigError, InfraError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("could not encode response: {0}")]
    Encoding(#[from] EncodeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<InfraError> for AppError {
    fn from(error: InfraError) -> Self {
        Self::Config(ConfigError::from(error))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, err_msg) = match self {
            Self::Config(err) => return err.into_response(),
            Self::Encoding(err) => {
                tracing::error!("response encoding failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Could not encode response"),
                )
            }
        };
        (status, Json(json!({ "message": err_msg }))).into_response()
    }
}
