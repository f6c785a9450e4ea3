//! Primary-key generation boundary.
//!
//! The unique-ID algorithm itself (snowflake or otherwise) lives in an
//! external service. This module only fixes the contract its consumers
//! depend on: 64-bit, non-negative, globally unique, roughly time-ordered.

use std::sync::atomic::{AtomicU64, Ordering};

/// Boundary to the unique-ID service.
///
/// Called once per new entity to populate its primary key. Implementations
/// must be thread-safe; callers hold a generator behind `Arc<dyn IdGenerator>`
/// and invoke it concurrently.
pub trait IdGenerator: Send + Sync {
    /// Returns the next globally-unique identifier.
    fn next_id(&self) -> u64;
}

/// Process-local monotonic generator for tests and embedded setups.
///
/// IDs are unique within one process only; production deployments plug in a
/// distributed generator behind the same trait.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    /// Creates a generator starting at `start`.
    pub fn new(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

// =============================================================================
// Tests
// =============================================================================
