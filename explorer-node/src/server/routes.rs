use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi as OpenApiT;

use crate::errors::AppError;
use crate::handlers::{dashboard_admin, explore, get_config, review, root, update_config};
use crate::state::AppState;
use crate::utils::json_response;

pub const OPENAPI_PATH: &str = "/docs/openapi.json";

pub fn app_router<T: OpenApiT + 'static>() -> Router<AppState> {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_document::<T>))
        .merge(page_routes())
        .route("/config", get(get_config).post(update_config))
        .fallback(handler_404)
}

async fn openapi_document<T: OpenApiT + 'static>(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    json_response(&state.encoder, StatusCode::OK, &T::openapi())
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "The requested resource was not found")
}

fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/explore", get(explore))
        .route("/review", get(review))
        .route("/dashboard-admin", get(dashboard_admin))
}
