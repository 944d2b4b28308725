pub mod config_error;
pub mod explorer_config;
