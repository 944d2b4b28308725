use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use explorer_common::Timestamp;

use crate::models::config_error::ConfigError;

/// Global configuration of the Explorer, shared by every page and served to
/// the browser client as `INITIAL_CONFIG`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExplorerConfig {
    /// Project queried when a widget does not name one.
    #[schema(example = "my-perfkit-project")]
    pub default_project: String,
    #[schema(example = "samples_mart")]
    pub default_dataset: String,
    #[schema(example = "results")]
    pub default_table: String,
    /// Web analytics tracking key, empty when analytics are disabled.
    pub analytics_key: String,
    /// Lifetime of cached query results, in seconds.
    #[schema(example = 1800)]
    pub cache_duration: u64,
    pub restrict_view_to_admin: bool,
    pub restrict_save_to_admin: bool,
    pub restrict_query_to_admin: bool,
    /// Set by the server every time the configuration is updated.
    pub updated_at: Option<Timestamp>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_project: String::new(),
            default_dataset: "samples_mart".to_string(),
            default_table: "results".to_string(),
            analytics_key: String::new(),
            cache_duration: 30 * 60,
            restrict_view_to_admin: false,
            restrict_save_to_admin: false,
            restrict_query_to_admin: false,
            updated_at: None,
        }
    }
}

/// Partial update of an [`ExplorerConfig`]. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ExplorerConfigUpdate {
    pub default_project: Option<String>,
    pub default_dataset: Option<String>,
    pub default_table: Option<String>,
    pub analytics_key: Option<String>,
    pub cache_duration: Option<u64>,
    pub restrict_view_to_admin: Option<bool>,
    pub restrict_save_to_admin: Option<bool>,
    pub restrict_query_to_admin: Option<bool>,
}

impl ExplorerConfigUpdate {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_duration == Some(0) {
            return Err(ConfigError::InvalidUpdate(
                "cache_duration must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl ExplorerConfig {
    /// Applies `update` and stamps the result with `updated_at`.
    pub fn apply(&mut self, update: ExplorerConfigUpdate, updated_at: Timestamp) {
        let ExplorerConfigUpdate {
            default_project,
            default_dataset,
            default_table,
            analytics_key,
            cache_duration,
            restrict_view_to_admin,
            restrict_save_to_admin,
            restrict_query_to_admin,
        } = update;

        if let Some(v) = default_project {
            self.default_project = v;
        }
        if let Some(v) = default_dataset {
            self.default_dataset = v;
        }
        if let Some(v) = default_table {
            self.default_table = v;
        }
        if let Some(v) = analytics_key {
            self.analytics_key = v;
        }
        if let Some(v) = cache_duration {
            self.cache_duration = v;
        }
        if let Some(v) = restrict_view_to_admin {
            self.restrict_view_to_admin = v;
        }
        if let Some(v) = restrict_save_to_admin {
            self.restrict_save_to_admin = v;
        }
        if let Some(v) = restrict_query_to_admin {
            self.restrict_query_to_admin = v;
        }
        self.updated_at = Some(updated_at);
    }
}
