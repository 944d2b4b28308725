pub mod get_config;
pub mod pages;
pub mod update_config;

pub use get_config::get_config;
pub use pages::{dashboard_admin, explore, review, root};
pub use update_config::update_config;
