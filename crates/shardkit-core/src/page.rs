//! Paging envelope conversion.
//!
//! Maps a paged query result (current page, page size, total count, records)
//! into a caller-facing response, optionally transforming each record. Pure
//! data shuffling; nothing here touches the router or any shared state.

use serde::{Deserialize, Serialize};

/// A page request from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub current: u64,
    /// Records per page.
    pub size: u64,
}

impl PageRequest {
    /// Creates a page request.
    pub fn new(current: u64, size: u64) -> Self {
        Self { current, size }
    }

    /// Returns the row offset of the first record on this page.
    pub fn offset(&self) -> u64 {
        self.current.saturating_sub(1).saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            current: 1,
            size: 10,
        }
    }
}

/// A page of records with its paging envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// 1-based page number.
    pub current: u64,
    /// Records per page.
    pub size: u64,
    /// Total records across all pages.
    pub total: u64,
    /// Records on this page, in query order.
    pub records: Vec<T>,
}

impl<T> PageResponse<T> {
    /// Builds a response from raw envelope fields.
    pub fn new(current: u64, size: u64, total: u64, records: Vec<T>) -> Self {
        Self {
            current,
            size,
            total,
            records,
        }
    }

    /// Builds a response echoing the request's envelope.
    pub fn from_request(request: &PageRequest, total: u64, records: Vec<T>) -> Self {
        Self::new(request.current, request.size, total, records)
    }

    /// Builds an empty response for the request.
    pub fn empty(request: &PageRequest) -> Self {
        Self::from_request(request, 0, Vec::new())
    }

    /// Transforms each record, preserving the envelope and record order.
    pub fn map<U, F>(self, f: F) -> PageResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PageResponse {
            current: self.current,
            size: self.size,
            total: self.total,
            records: self.records.into_iter().map(f).collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
