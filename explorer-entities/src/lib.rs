pub mod error;
pub mod models;

pub use error::InfraError;
pub use models::{
    config_error::ConfigError,
    explorer_config::{ExplorerConfig, ExplorerConfigUpdate},
};
