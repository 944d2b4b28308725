use std::sync::Arc;

use explorer_common::tracing::{init_tracing, LogFormat};
use explorer_node::config::config;
use explorer_node::constants::APP_NAME;
use explorer_node::infra::repositories::InMemoryConfigRepository;
use explorer_node::{run_api_server, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config().await;
    let log_format = config.as_ref().map_or_else(
        |_| LogFormat::default(),
        |config| LogFormat::from_name(&config.explorer().log_format),
    );
    init_tracing(APP_NAME, log_format)?;
    let config = config.inspect_err(|e| tracing::error!("invalid configuration: {e}"))?;

    let state = AppState::new(
        config.explorer(),
        Arc::new(InMemoryConfigRepository::new()),
    );

    run_api_server(config, state).await?;

    Ok(())
}
