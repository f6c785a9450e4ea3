//! Hash-mod shard routing.
//!
//! Exact-match routing resolves the single physical table owning a key;
//! range routing declares every candidate eligible. Both are pure functions
//! of their arguments plus the immutable [`ShardingConfig`], so a router can
//! be shared across threads without synchronization.

use crate::config::{ConfigError, ShardingConfig};
use crate::datanode::DataNodeInfo;
use shardkit_core::ShardKey;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::Hasher;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while routing a single key.
///
/// Never retried internally: the inputs are deterministic, so a retry would
/// reproduce the identical failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoutingError {
    /// No candidate target carries the computed shard suffix.
    ///
    /// The caller must abort the operation for that key. Falling back to an
    /// arbitrary target would place the row where no reader looks for it.
    #[error("no target matches shard suffix `{suffix}` among {candidate_count} candidates")]
    NoMatchingTarget {
        /// The suffix the routing formula produced.
        suffix: String,
        /// How many candidates were searched.
        candidate_count: usize,
    },
}

/// Deterministic routing contract.
///
/// Implementations must be pure: for a fixed config, key, and candidate set
/// the same target comes back on every call, from any thread. Every reader
/// and writer of a key resolves its physical table through this trait, so
/// determinism here is the single-owner-per-key invariant the whole
/// placement scheme rests on.
pub trait ShardingAlgorithm: Send + Sync {
    /// Resolves the one physical target that owns `key`.
    fn route_exact<'a>(
        &self,
        targets: &[&'a str],
        key: &ShardKey,
        node: &DataNodeInfo,
    ) -> Result<&'a str, RoutingError>;

    /// Resolves the targets a range predicate must scan.
    fn route_range<'a>(
        &self,
        targets: &[&'a str],
        lower: Option<&ShardKey>,
        upper: Option<&ShardKey>,
    ) -> Vec<&'a str>;
}

/// Hash-mod router over a fixed shard layout.
///
/// The table suffix for a key is
/// `(hash(key) % sharding_count) / table_sharding_count`: the modulus picks
/// a slot among all physical tables, the division collapses slots into the
/// per-database table index. The hash stays unsigned `u64` end to end; there
/// is no signed absolute-value step, so the `i64::MIN` negation hazard of
/// naive implementations cannot occur.
#[derive(Debug, Clone)]
pub struct HashModRouter {
    config: ShardingConfig,
}

impl HashModRouter {
    /// Creates a router from a validated configuration.
    ///
    /// The router is handed to consumers explicitly; there is no global
    /// registry to look one up from.
    pub fn new(config: ShardingConfig) -> Self {
        Self { config }
    }

    /// Creates a router from a properties-style option map.
    ///
    /// Fails with [`ConfigError`] if `sharding-count` or
    /// `table-sharding-count` is missing or non-numeric.
    pub fn from_props(props: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        ShardingConfig::from_props(props).map(Self::new)
    }

    /// Returns the shard layout this router was built with.
    pub fn config(&self) -> &ShardingConfig {
        &self.config
    }

    /// Unsigned, well-distributed hash of the key's canonical bytes.
    fn hash_key(key: &ShardKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        hasher.write(&key.canonical_bytes());
        hasher.finish()
    }

    /// Which database shard slot owns `key` (`hash % sharding_count`).
    pub fn database_index(&self, key: &ShardKey) -> u64 {
        Self::hash_key(key) % u64::from(self.config.sharding_count)
    }

    /// Which physical table within the owning database holds `key`.
    pub fn table_index(&self, key: &ShardKey) -> u64 {
        self.database_index(key) / u64::from(self.config.table_sharding_count)
    }
}

impl ShardingAlgorithm for HashModRouter {
    fn route_exact<'a>(
        &self,
        targets: &[&'a str],
        key: &ShardKey,
        node: &DataNodeInfo,
    ) -> Result<&'a str, RoutingError> {
        let index = self.table_index(key);
        let suffix = node.format_suffix(index);

        match node.find_matched_target(targets.iter().copied(), &suffix) {
            Some(target) => {
                debug!(%key, %suffix, target, "routed exact-match key");
                Ok(target)
            }
            None => {
                warn!(
                    %key,
                    %suffix,
                    candidate_count = targets.len(),
                    "no candidate target carries the computed shard suffix"
                );
                Err(RoutingError::NoMatchingTarget {
                    suffix,
                    candidate_count: targets.len(),
                })
            }
        }
    }

    fn route_range<'a>(
        &self,
        targets: &[&'a str],
        _lower: Option<&ShardKey>,
        _upper: Option<&ShardKey>,
    ) -> Vec<&'a str> {
        // Range predicates are not shard-pruned: every candidate is scanned.
        // Correct for any bounds, and the dominant query-time cost of this
        // design.
        targets.to_vec()
    }
}

// =============================================================================
// Tests
// =============================================================================
