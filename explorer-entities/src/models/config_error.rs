use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use utoipa::ToSchema;

use crate::error::InfraError;

#[derive(Debug, thiserror::Error, ToSchema)]
pub enum ConfigError {
    // 400 Error - Bad Requests
    #[error("invalid config update: {0}")]
    InvalidUpdate(String),

    // 500 Error - Internal server error
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl From<InfraError> for ConfigError {
    fn from(error: InfraError) -> Self {
        Self::InternalServerError(error.to_string())
    }
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> axum::response::Response {
        let (status, err_msg) = match self {
            Self::InvalidUpdate(reason) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid config update: {reason}"),
            ),
            Self::InternalServerError(reason) => {
                tracing::error!("config request failed: {reason}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error"),
                )
            }
        };
        (status, Json(json!({ "message": err_msg }))).into_response()
    }
}
