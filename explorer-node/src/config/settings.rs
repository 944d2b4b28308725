use serde::Deserialize;

use explorer_entities::ExplorerConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Settings read from the `EXPLORER_*` environment variables.
///
/// The `default_*`, `analytics_key`, `cache_duration` and `restrict_*` fields
/// seed the global [`ExplorerConfig`] until an administrator saves one.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    pub default_project: String,
    pub default_dataset: String,
    pub default_table: String,
    pub analytics_key: String,
    pub cache_duration: u64,
    pub restrict_view_to_admin: bool,
    pub restrict_save_to_admin: bool,
    pub restrict_query_to_admin: bool,
    /// Emit JSON object keys sorted.
    pub json_sort_keys: bool,
    /// `pretty` or `json`.
    pub log_format: String,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        let config = ExplorerConfig::default();
        Self {
            default_project: config.default_project,
            default_dataset: config.default_dataset,
            default_table: config.default_table,
            analytics_key: config.analytics_key,
            cache_duration: config.cache_duration,
            restrict_view_to_admin: config.restrict_view_to_admin,
            restrict_save_to_admin: config.restrict_save_to_admin,
            restrict_query_to_admin: config.restrict_query_to_admin,
            json_sort_keys: true,
            log_format: "pretty".to_string(),
        }
    }
}

impl ExplorerSettings {
    pub fn initial_config(&self) -> ExplorerConfig {
        ExplorerConfig {
            default_project: self.default_project.clone(),
            default_dataset: self.default_dataset.clone(),
            default_table: self.default_table.clone(),
            analytics_key: self.analytics_key.clone(),
            cache_duration: self.cache_duration,
            restrict_view_to_admin: self.restrict_view_to_admin,
            restrict_save_to_admin: self.restrict_save_to_admin,
            restrict_query_to_admin: self.restrict_query_to_admin,
            updated_at: None,
        }
    }
}
