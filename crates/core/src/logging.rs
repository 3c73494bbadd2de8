use std::env;
use std::io::{stdout, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber: human-readable output on a terminal,
/// JSON lines otherwise. Call once from the host application.
pub fn setup_logging() {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    if stdout().is_terminal() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_target(true)
            .init();
    }

    tracing::info!(level = %log_level, "logging initialized");
}
