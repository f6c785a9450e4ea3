//! Entity auto-fill on insert and update.
//!
//! Every persisted entity carries the same bookkeeping columns: a creation
//! timestamp, an update timestamp, and a soft-delete flag. The data-access
//! layer calls [`RowMeta::fill_on_insert`] before the first write and
//! [`RowMeta::fill_on_update`] before every later write.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Soft-delete flag stored alongside every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum DelFlag {
    /// Row is live.
    #[default]
    Active = 0,
    /// Row is logically deleted but still present on disk.
    Deleted = 1,
}

impl DelFlag {
    /// Returns the numeric code persisted to the database column.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Bookkeeping columns shared by every persisted entity.
///
/// Timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RowMeta {
    /// When the row was first inserted.
    pub create_time: u64,
    /// When the row was last written.
    pub update_time: u64,
    /// Soft-delete state.
    pub del_flag: DelFlag,
}

impl RowMeta {
    /// Populates both timestamps with the current time and marks the row active.
    pub fn fill_on_insert(&mut self) {
        self.fill_on_insert_at(now_millis());
    }

    /// Refreshes the update timestamp with the current time.
    pub fn fill_on_update(&mut self) {
        self.fill_on_update_at(now_millis());
    }

    /// Insert fill with an explicit timestamp.
    pub fn fill_on_insert_at(&mut self, now: u64) {
        self.create_time = now;
        self.update_time = now;
        self.del_flag = DelFlag::Active;
    }

    /// Update fill with an explicit timestamp.
    pub fn fill_on_update_at(&mut self, now: u64) {
        self.update_time = now;
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_fill_sets_all_columns() {
        let mut meta = RowMeta {
            del_flag: DelFlag::Deleted,
            ..RowMeta::default()
        };
        meta.fill_on_insert_at(1_700_000_000_000);

        assert_eq!(meta.create_time, 1_700_000_000_000);
        assert_eq!(meta.update_time, 1_700_000_000_000);
        assert_eq!(meta.del_flag, DelFlag::Active);
    }

    #[test]
    fn test_update_fill_leaves_create_time() {
        let mut meta = RowMeta::default();
        meta.fill_on_insert_at(1_000);
        meta.fill_on_update_at(2_000);

        assert_eq!(meta.create_time, 1_000);
        assert_eq!(meta.update_time, 2_000);
        assert_eq!(meta.del_flag, DelFlag::Active);
    }

    #[test]
    fn test_wall_clock_fill() {
        let mut meta = RowMeta::default();
        meta.fill_on_insert();
        assert!(meta.create_time > 0);
        assert_eq!(meta.create_time, meta.update_time);
    }

    #[test]
    fn test_del_flag_codes() {
        assert_eq!(DelFlag::Active.code(), 0);
        assert_eq!(DelFlag::Deleted.code(), 1);
        assert_eq!(DelFlag::default(), DelFlag::Active);
    }
}
