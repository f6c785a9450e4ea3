//! # Shardkit Core
//!
//! Core types and collaborator boundaries for shardkit:
//! - [`ShardKey`] - The comparable value routing decisions are keyed on
//! - [`IdGenerator`] - Boundary to the external unique-ID service
//! - [`RowMeta`] / [`DelFlag`] - Entity auto-fill on insert and update
//! - [`PageRequest`] / [`PageResponse`] - Paging envelope conversion

pub mod entity;
pub mod id;
pub mod page;

// Re-exports
pub use entity::{DelFlag, RowMeta};
pub use id::{IdGenerator, SequenceIdGenerator};
pub use page::{PageRequest, PageResponse};

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Shard Key
// =============================================================================

/// A shard-key value extracted from a row or query predicate.
///
/// The router never retains a key; it is borrowed per call. Hashing happens
/// over [`ShardKey::canonical_bytes`], and that encoding is the stable
/// contract: the same logical value must encode identically across processes
/// and releases, or readers and writers of a key stop resolving to the same
/// physical table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShardKey {
    /// 64-bit signed integer key.
    Int(i64),
    /// 64-bit unsigned integer key (snowflake IDs and the like).
    Uint(u64),
    /// UTF-8 string key.
    Text(String),
}

impl ShardKey {
    /// Returns the canonical byte encoding used as the hash input.
    ///
    /// Layout is a one-byte tag followed by the value: `u` + big-endian u64
    /// for unsigned integers, `i` + big-endian i64 for negative integers,
    /// `s` + raw UTF-8 for text. Non-negative `Int` values share the
    /// unsigned encoding so an `i64` and a `u64` holding the same ID route
    /// to the same table.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        match self {
            ShardKey::Int(v) if *v >= 0 => Self::uint_bytes(*v as u64),
            ShardKey::Int(v) => {
                let mut out = Vec::with_capacity(9);
                out.push(b'i');
                out.extend_from_slice(&v.to_be_bytes());
                out
            }
            ShardKey::Uint(v) => Self::uint_bytes(*v),
            ShardKey::Text(s) => {
                let mut out = Vec::with_capacity(1 + s.len());
                out.push(b's');
                out.extend_from_slice(s.as_bytes());
                out
            }
        }
    }

    fn uint_bytes(v: u64) -> Vec<u8> {
        let mut out = Vec::with_capacity(9);
        out.push(b'u');
        out.extend_from_slice(&v.to_be_bytes());
        out
    }
}

impl fmt::Display for ShardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShardKey::Int(v) => write!(f, "{}", v),
            ShardKey::Uint(v) => write!(f, "{}", v),
            ShardKey::Text(s) => write!(f, "{}", s),
        }
    }
}

// Convenient From implementations
impl From<i64> for ShardKey {
    #[inline]
    fn from(v: i64) -> Self {
        ShardKey::Int(v)
    }
}

impl From<i32> for ShardKey {
    #[inline]
    fn from(v: i32) -> Self {
        ShardKey::Int(v as i64)
    }
}

impl From<u64> for ShardKey {
    #[inline]
    fn from(v: u64) -> Self {
        ShardKey::Uint(v)
    }
}

impl From<u32> for ShardKey {
    #[inline]
    fn from(v: u32) -> Self {
        ShardKey::Uint(v as u64)
    }
}

impl From<String> for ShardKey {
    fn from(v: String) -> Self {
        ShardKey::Text(v)
    }
}

impl From<&str> for ShardKey {
    fn from(v: &str) -> Self {
        ShardKey::Text(v.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
