pub mod caches;

/// Key under which the single global [`ExplorerConfig`](explorer_entities::ExplorerConfig)
/// document is stored and cached.
pub const EXPLORER_CONFIG_KEY: &str = "explorer-config";

/// Name reported by tracing and used as the OpenAPI tag.
pub const APP_NAME: &str = "explorer-node";
