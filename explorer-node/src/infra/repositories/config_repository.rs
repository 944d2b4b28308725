use std::fmt::Debug;

use async_trait::async_trait;
use tokio::sync::RwLock;

use explorer_common::{JsonEncoder, Timestamp};
use explorer_entities::{ExplorerConfig, ExplorerConfigUpdate, InfraError};

use crate::constants::EXPLORER_CONFIG_KEY;
use crate::state::AppState;

/// Persistence of the global explorer configuration.
///
/// Handlers never reach for a process-wide store: the implementation is
/// injected through [`AppState`], which lets every test build its own.
#[async_trait]
pub trait ConfigRepository: Send + Sync + Debug {
    async fn load(&self) -> Result<Option<ExplorerConfig>, InfraError>;

    async fn save(&self, config: &ExplorerConfig) -> Result<(), InfraError>;
}

/// Keeps the configuration as an encoded JSON document in memory, the same
/// shape a document store would hold.
#[derive(Debug)]
pub struct InMemoryConfigRepository {
    document: RwLock<Option<String>>,
    encoder: JsonEncoder,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
            encoder: JsonEncoder::new().with_sort_keys(true),
        }
    }

    pub fn with_config(config: &ExplorerConfig) -> Result<Self, InfraError> {
        let encoder = JsonEncoder::new().with_sort_keys(true);
        let document = encoder.encode_serializable(config)?;
        Ok(Self {
            document: RwLock::new(Some(document)),
            encoder,
        })
    }
}

impl Default for InMemoryConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn load(&self) -> Result<Option<ExplorerConfig>, InfraError> {
        let document = self.document.read().await;
        document
            .as_deref()
            .map(|document| serde_json::from_str(document))
            .transpose()
            .map_err(InfraError::from)
    }

    async fn save(&self, config: &ExplorerConfig) -> Result<(), InfraError> {
        let document = self.encoder.encode_serializable(config)?;
        *self.document.write().await = Some(document);
        Ok(())
    }
}

/// Returns the current configuration: cached copy first, then the repository,
/// then the defaults coming from the settings.
pub async fn get_config(state: &AppState) -> Result<ExplorerConfig, InfraError> {
    let cache = state.caches.explorer_config();
    if let Some(config) = cache.get(EXPLORER_CONFIG_KEY).await {
        return Ok(config);
    }

    // Misses are filled under the update lock: a stale load must never
    // replace a config an update already cached.
    let _guard = state.config_lock.lock().await;
    if let Some(config) = cache.get(EXPLORER_CONFIG_KEY).await {
        return Ok(config);
    }

    let config = match state.config_repository.load().await? {
        Some(stored) => stored,
        None => {
            tracing::debug!("no stored explorer config, serving defaults");
            state.default_config.as_ref().clone()
        }
    };
    cache
        .insert(EXPLORER_CONFIG_KEY.to_string(), config.clone())
        .await;
    Ok(config)
}

/// Applies `update` on top of the stored configuration and persists it.
pub async fn update_config(
    state: &AppState,
    update: ExplorerConfigUpdate,
) -> Result<ExplorerConfig, InfraError> {
    let _guard = state.config_lock.lock().await;

    let mut config = state
        .config_repository
        .load()
        .await?
        .unwrap_or_else(|| state.default_config.as_ref().clone());
    config.apply(update, Timestamp::now());
    state.config_repository.save(&config).await?;

    state
        .caches
        .explorer_config()
        .insert(EXPLORER_CONFIG_KEY.to_string(), config.clone())
        .await;
    tracing::info!(updated_at = ?config.updated_at, "explorer config updated");
    Ok(config)
}
