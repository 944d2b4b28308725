use axum::extract::{RawQuery, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::errors::AppError;
use crate::infra::repositories::config_repository;
use crate::state::AppState;
use crate::utils::{render_page, render_redirect, Page};

pub const EXPLORE_PATH: &str = "/explore";

/// `/` has no content of its own.
#[tracing::instrument]
pub async fn root() -> Response {
    redirect_permanently(EXPLORE_PATH)
}

/// `/review` is the read-only entry point of older links; it now lands on the
/// explorer with the same query string.
#[tracing::instrument]
pub async fn review(RawQuery(query): RawQuery) -> Response {
    let target = match query.as_deref() {
        Some(query) if !query.is_empty() => format!("{EXPLORE_PATH}?{query}"),
        _ => EXPLORE_PATH.to_string(),
    };
    redirect_permanently(&target)
}

#[tracing::instrument(skip(state))]
pub async fn explore(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, Page::Explore).await
}

#[tracing::instrument(skip(state))]
pub async fn dashboard_admin(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render(&state, Page::DashboardAdmin).await
}

async fn render(state: &AppState, page: Page) -> Result<Html<String>, AppError> {
    let config = config_repository::get_config(state).await?;
    let initial_config = state.encoder.encode_serializable(&config)?;
    Ok(Html(render_page(page, &initial_config)))
}

fn redirect_permanently(target: &str) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, target.to_string())],
        Html(render_redirect(target)),
    )
        .into_response()
}
