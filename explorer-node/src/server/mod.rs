pub mod middlewares;
pub mod routes;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use utoipa::OpenApi;

use crate::constants::APP_NAME;
use crate::server::middlewares::TimingLayer;
use crate::{config::Config, handlers, server::routes::app_router, state::AppState};

#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_config::get_config, handlers::update_config::update_config),
    components(schemas(
        explorer_entities::ExplorerConfig,
        explorer_entities::ExplorerConfigUpdate,
        explorer_entities::ConfigError,
        explorer_common::Timestamp,
    )),
    tags(
        (name = "explorer-node", description = "PerfKit Explorer API")
    ),
)]
pub struct ApiDoc;

/// The full application: routes, state and the layers every request goes
/// through.
pub fn build_app(state: AppState) -> Router {
    app_router::<ApiDoc>()
        .with_state(state)
        .with_timing()
        // Logging so we can see whats going on
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        // Permissive CORS layer to allow all origins
        .layer(CorsLayer::permissive())
}

#[tracing::instrument(skip(state))]
pub async fn run_api_server(config: &Config, state: AppState) -> std::io::Result<()> {
    let app = build_app(state);

    let host = config.server_host();
    let port = config.server_port();
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!("🚀 {APP_NAME} started at http://{}", local_addr);

    axum::serve(listener, app).await
}
