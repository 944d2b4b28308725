pub mod logs;
pub mod setup;
