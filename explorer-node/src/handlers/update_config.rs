use axum::extract::{self, State};
use axum::http::StatusCode;
use axum::response::Response;

use explorer_entities::{ConfigError, ExplorerConfig, ExplorerConfigUpdate};

use crate::errors::AppError;
use crate::infra::repositories::config_repository;
use crate::state::AppState;
use crate::utils::json_response;

#[utoipa::path(
    post,
    path = "/config",
    request_body = ExplorerConfigUpdate,
    responses(
        (status = 200, description = "Configuration updated", body = ExplorerConfig),
        (status = 400, description = "Invalid update", body = ConfigError)
    ),
)]
#[tracing::instrument(skip(state))]
pub async fn update_config(
    State(state): State<AppState>,
    extract::Json(update): extract::Json<ExplorerConfigUpdate>,
) -> Result<Response, AppError> {
    tracing::info!("Received explorer config update: {:?}", update);

    update.validate()?;

    let config = config_repository::update_config(&state, update)
        .await
        .map_err(ConfigError::from)?;

    json_response(&state.encoder, StatusCode::OK, &config)
}
