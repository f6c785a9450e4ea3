//! Structured logging for shardkit.
//!
//! Centralized logging configuration using the `tracing` crate. Logs can be
//! configured via the `SHARDKIT_LOG` environment variable.
//!
//! # Environment Variables
//!
//! - `SHARDKIT_LOG=info` - Default log level (info)
//! - `SHARDKIT_LOG=debug` - Verbose logging, including per-key routing decisions
//! - `SHARDKIT_LOG=shardkit_routing::router=debug` - Module-specific logging

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber with default settings.
///
/// Uses the `SHARDKIT_LOG` environment variable for configuration.
/// Default level is `info` if not specified.
///
/// Call once at application startup; subsequent calls are ignored (tracing
/// only allows one subscriber).
pub fn init() {
    init_with_default("info");
}

/// Initializes the global tracing subscriber with a custom default level.
pub fn init_with_default(default_level: &str) {
    let filter =
        EnvFilter::try_from_env("SHARDKIT_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    // Try to set the global default - ignore if already set
    let _ = subscriber.try_init();
}

/// Initializes logging with JSON output format.
///
/// Useful for production environments where logs are processed by log
/// aggregators.
pub fn init_json() {
    let filter = EnvFilter::try_from_env("SHARDKIT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt().with_env_filter(filter).with_target(true).json();

    let _ = subscriber.try_init();
}
