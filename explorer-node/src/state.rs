use std::sync::Arc;

use tokio::sync::Mutex;

use explorer_common::JsonEncoder;
use explorer_entities::ExplorerConfig;

use crate::caches::CacheRegistry;
use crate::config::settings::ExplorerSettings;
use crate::infra::repositories::ConfigRepository;

#[derive(Clone)]
pub struct AppState {
    // Storage of the global explorer config
    pub config_repository: Arc<dyn ConfigRepository>,
    // Storage caches
    pub caches: Arc<CacheRegistry>,
    // Encoder used for every JSON payload we emit
    pub encoder: JsonEncoder,
    // Config served until one is saved
    pub default_config: Arc<ExplorerConfig>,
    // Held by updates and by cache fills
    pub config_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(settings: &ExplorerSettings, config_repository: Arc<dyn ConfigRepository>) -> Self {
        Self {
            config_repository,
            caches: Arc::new(CacheRegistry::new()),
            encoder: JsonEncoder::new().with_sort_keys(settings.json_sort_keys),
            default_config: Arc::new(settings.initial_config()),
            config_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config_repository", &self.config_repository)
            .field("caches", &self.caches)
            .field("encoder", &self.encoder)
            .finish_non_exhaustive()
    }
}
