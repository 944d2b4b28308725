use std::time::Duration;

use moka::future::Cache;

use explorer_entities::ExplorerConfig;

use crate::constants::caches::{
    EXPLORER_CONFIG_CACHE_TIME_TO_IDLE_IN_SECONDS, EXPLORER_CONFIG_CACHE_TIME_TO_LIVE_IN_SECONDS,
};

/// Structure responsible of holding our storage caches.
/// All the caches are initialized empty with their associated time to live in the
/// constants module.
#[derive(Clone, Debug)]
pub struct CacheRegistry {
    explorer_config: Cache<String, ExplorerConfig>,
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheRegistry {
    /// Initialize all of our caches empty.
    pub fn new() -> Self {
        let explorer_config = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(
                EXPLORER_CONFIG_CACHE_TIME_TO_LIVE_IN_SECONDS,
            ))
            .time_to_idle(Duration::from_secs(
                EXPLORER_CONFIG_CACHE_TIME_TO_IDLE_IN_SECONDS,
            ))
            .build();

        Self { explorer_config }
    }

    pub const fn explorer_config(&self) -> &Cache<String, ExplorerConfig> {
        &self.explorer_config
    }
}
