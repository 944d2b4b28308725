use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

use explorer_entities::{ConfigError, ExplorerConfig};

use crate::errors::AppError;
use crate::infra::repositories::config_repository;
use crate::state::AppState;
use crate::utils::json_response;

#[utoipa::path(
    get,
    path = "/config",
    responses(
        (status = 200, description = "Current global explorer configuration", body = ExplorerConfig),
        (status = 500, description = "Configuration storage unavailable", body = ConfigError)
    ),
)]
#[tracing::instrument(skip(state))]
pub async fn get_config(State(state): State<AppState>) -> Result<Response, AppError> {
    let config = config_repository::get_config(&state)
        .await
        .map_err(ConfigError::from)?;

    json_response(&state.encoder, StatusCode::OK, &config)
}
