use tracing_subscriber::EnvFilter;

/// Test logs go through the libtest capture; the first test to run wins.
#[rstest::fixture]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
