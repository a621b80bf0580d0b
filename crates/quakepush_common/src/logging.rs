//! Logging utilities for quakepush.
//!
//! Every crate logs through the `tracing` macros; this module installs the
//! subscriber once at startup.

use quakepush_config::LoggingConfig;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber from the `[logging]` section.
///
/// An unrecognised level name falls back to INFO with a warning.
pub fn init_from_config(config: &LoggingConfig) {
    match parse_level(&config.level) {
        Some(level) => init_with_level(level),
        None => {
            init_with_level(Level::INFO);
            warn!("Unknown log level '{}', using info", config.level);
        }
    }
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives are honoured on top of `level`. Calling this more
/// than once is harmless; only the first call installs a subscriber.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Parse a level name case-insensitively.
pub fn parse_level(name: &str) -> Option<Level> {
    name.trim().parse().ok()
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    tracing::error!("{}: {}", context, error);
}
