//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter from a `RUST_LOG`-style string.
///
/// WARN applies only when the string sets no directives at all, so a bare
/// `RUST_LOG=debug` still raises the global level.
pub fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives)
}

/// Install the global fmt subscriber, writing to stderr.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&directives))
        .init();
}
