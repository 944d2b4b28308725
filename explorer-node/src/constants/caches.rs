// See:
// <https://docs.rs/moka/latest/moka/future/struct.Cache.html#example-time-based-expirations>

/// Cache of the global explorer configuration.
/// Every page render reads it, while it only changes when an administrator
/// saves it, in which case the cached entry is replaced immediately.
pub const EXPLORER_CONFIG_CACHE_TIME_TO_LIVE_IN_SECONDS: u64 = 10 * 60; // 10 minutes
pub const EXPLORER_CONFIG_CACHE_TIME_TO_IDLE_IN_SECONDS: u64 = 5 * 60; // 5 minutes
