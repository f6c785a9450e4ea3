//! # Shardkit Routing
//!
//! Deterministic hash-mod shard routing for table-partitioned storage.
//!
//! Given a fixed shard layout ([`ShardingConfig`]) and a shard-key value,
//! the router selects which physical table of a caller-supplied candidate
//! set owns the row. Exact-match routing returns exactly one target or a
//! [`RoutingError`]; range routing returns the full candidate set (fan-out
//! is the accepted trade-off for range predicates).
//!
//! # Example
//!
//! ```
//! use shardkit_core::ShardKey;
//! use shardkit_routing::{DataNodeInfo, HashModRouter, ShardingAlgorithm, ShardingConfig};
//!
//! let config = ShardingConfig::new(4, 2).unwrap();
//! let router = HashModRouter::new(config);
//! let node = DataNodeInfo::new("t_order_");
//!
//! let targets = ["t_order_0", "t_order_1"];
//! let target = router
//!     .route_exact(&targets, &ShardKey::from(42u64), &node)
//!     .unwrap();
//! assert!(targets.contains(&target));
//! ```
//!
//! # Concurrency
//!
//! A router holds only immutable configuration. [`ShardingAlgorithm`] calls
//! are pure, never block, and may run from any number of threads without
//! synchronization; the only ordering requirement is that construction
//! happens-before the first routing call.

pub mod config;
pub mod datanode;
pub mod logging;
pub mod router;

// Re-exports
pub use config::{ConfigError, LoggingConfig, ShardingConfig, ShardkitConfig};
pub use datanode::DataNodeInfo;
pub use router::{HashModRouter, RoutingError, ShardingAlgorithm};
