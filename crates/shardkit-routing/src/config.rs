//! Configuration for the shard router.
//!
//! This module provides centralized configuration management with support for:
//! - Configuration files (TOML format)
//! - Environment variable overrides (prefix: `SHARDKIT__`)
//! - Properties-style option maps handed over by an embedding framework
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the
//! `SHARDKIT__` prefix:
//! - `SHARDKIT__SHARDING__SHARDING_COUNT=16`
//! - `SHARDKIT__SHARDING__TABLE_SHARDING_COUNT=4`
//! - `SHARDKIT__LOGGING__LEVEL=debug`
//!
//! # Required Options
//!
//! There are no defaults for the shard counts. Both `sharding-count` and
//! `table-sharding-count` must be present and numeric, or resolving a
//! [`ShardingConfig`] fails with a [`ConfigError`]. A router is never
//! usable in a partially-configured state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Option key for the total database shard count.
pub const SHARDING_COUNT_KEY: &str = "sharding-count";
/// Option key for the per-database table shard count.
pub const TABLE_SHARDING_COUNT_KEY: &str = "table-sharding-count";

/// Configuration errors. All are fatal at startup; none are retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Required sharding option `{0}` is missing")]
    MissingOption(&'static str),

    #[error("Sharding option `{key}` has invalid value `{value}`: {reason}")]
    InvalidOption {
        key: &'static str,
        value: String,
        reason: String,
    },
}

// =============================================================================
// Resolved sharding configuration
// =============================================================================

/// Validated, immutable shard layout owned by the router for its lifetime.
///
/// `sharding_count` physical tables are spread across databases holding
/// `table_sharding_count` tables each. Both counts are fixed for the lifetime
/// of the routing component; rebalancing is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardingConfig {
    /// Total database shard count.
    pub sharding_count: u32,
    /// Table shard count per database.
    pub table_sharding_count: u32,
}

impl ShardingConfig {
    /// Creates a validated sharding configuration.
    ///
    /// Both counts must be at least 1 and `sharding_count` must be at least
    /// `table_sharding_count`, otherwise the suffix formula can produce an
    /// index no physical table carries.
    pub fn new(sharding_count: u32, table_sharding_count: u32) -> Result<Self, ConfigError> {
        if sharding_count == 0 {
            return Err(ConfigError::InvalidOption {
                key: SHARDING_COUNT_KEY,
                value: sharding_count.to_string(),
                reason: "must be a positive integer".to_string(),
            });
        }
        if table_sharding_count == 0 {
            return Err(ConfigError::InvalidOption {
                key: TABLE_SHARDING_COUNT_KEY,
                value: table_sharding_count.to_string(),
                reason: "must be a positive integer".to_string(),
            });
        }
        if sharding_count < table_sharding_count {
            return Err(ConfigError::InvalidOption {
                key: TABLE_SHARDING_COUNT_KEY,
                value: table_sharding_count.to_string(),
                reason: format!(
                    "must not exceed `{}` ({})",
                    SHARDING_COUNT_KEY, sharding_count
                ),
            });
        }
        if sharding_count % table_sharding_count != 0 {
            // Legal but lopsided: some table indices become unreachable or
            // unevenly loaded under the hash-mod suffix formula.
            warn!(
                sharding_count,
                table_sharding_count,
                "table-sharding-count does not evenly divide sharding-count; \
                 shard load will be uneven"
            );
        }
        Ok(Self {
            sharding_count,
            table_sharding_count,
        })
    }

    /// Builds a configuration from a properties-style option map.
    ///
    /// This is the initialization path used when an embedding data-access
    /// framework hands over raw string options.
    pub fn from_props(props: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let sharding_count = parse_required(props, SHARDING_COUNT_KEY)?;
        let table_sharding_count = parse_required(props, TABLE_SHARDING_COUNT_KEY)?;
        Self::new(sharding_count, table_sharding_count)
    }

    /// Number of distinct table suffixes the routing formula can produce.
    pub fn table_index_space(&self) -> u32 {
        self.sharding_count.div_ceil(self.table_sharding_count)
    }
}

fn parse_required(props: &BTreeMap<String, String>, key: &'static str) -> Result<u32, ConfigError> {
    let raw = props.get(key).ok_or(ConfigError::MissingOption(key))?;
    raw.trim()
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidOption {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        })
}

// =============================================================================
// File-based configuration
// =============================================================================

/// Root configuration for shardkit, loadable from TOML with env overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShardkitConfig {
    /// Shard layout options.
    pub sharding: ShardingOptions,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Raw shard layout options before validation.
///
/// Fields are optional because the file may omit them; [`ShardkitConfig::sharding_config`]
/// enforces presence.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShardingOptions {
    /// Total database shard count.
    pub sharding_count: Option<u32>,
    /// Table shard count per database.
    pub table_sharding_count: Option<u32>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
    /// Use JSON format for log output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl ShardkitConfig {
    /// Loads configuration from an optional file path with environment
    /// variable overrides.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SHARDKIT__*)
    /// 2. Configuration file (if provided)
    /// 3. Built-in defaults (logging only; shard counts have none)
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(file_path) = path {
            if Path::new(file_path).exists() {
                let contents = std::fs::read_to_string(file_path)?;
                config = toml::from_str(&contents)?;
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// A present but non-numeric count is a hard error, not a silent skip;
    /// misconfigured routing must never start.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("SHARDKIT__SHARDING__SHARDING_COUNT") {
            self.sharding.sharding_count = Some(parse_env(SHARDING_COUNT_KEY, &val)?);
        }
        if let Ok(val) = std::env::var("SHARDKIT__SHARDING__TABLE_SHARDING_COUNT") {
            self.sharding.table_sharding_count = Some(parse_env(TABLE_SHARDING_COUNT_KEY, &val)?);
        }
        if let Ok(val) = std::env::var("SHARDKIT__LOGGING__LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("SHARDKIT__LOGGING__JSON") {
            self.logging.json = val.to_lowercase() == "true" || val == "1";
        }
        Ok(())
    }

    /// Resolves the validated shard layout, failing if either count is absent.
    pub fn sharding_config(&self) -> Result<ShardingConfig, ConfigError> {
        let sharding_count = self
            .sharding
            .sharding_count
            .ok_or(ConfigError::MissingOption(SHARDING_COUNT_KEY))?;
        let table_sharding_count = self
            .sharding
            .table_sharding_count
            .ok_or(ConfigError::MissingOption(TABLE_SHARDING_COUNT_KEY))?;
        ShardingConfig::new(sharding_count, table_sharding_count)
    }

    /// Serializes the configuration to TOML format.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn parse_env(key: &'static str, val: &str) -> Result<u32, ConfigError> {
    val.trim()
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidOption {
            key,
            value: val.to_string(),
            reason: e.to_string(),
        })
}

// =============================================================================
// Tests
// =============================================================================
