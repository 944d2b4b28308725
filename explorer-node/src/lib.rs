pub mod caches;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod infra;
pub mod server;
pub mod state;
pub mod utils;

pub use server::{build_app, run_api_server, ApiDoc};
pub use state::AppState;
