//! Physical target naming conventions.
//!
//! A physical table name is `<prefix><suffix>` where the suffix is the
//! decimal table-shard index, optionally left-padded to a fixed width
//! (`t_order_3`, or `t_order_03` with a minimum suffix width of 2). The
//! router only ever inspects names through this locator; everything else
//! about a target name is opaque.

use serde::{Deserialize, Serialize};

/// Naming convention of one logical table's physical targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataNodeInfo {
    prefix: String,
    suffix_min_width: usize,
    padding_char: char,
}

impl DataNodeInfo {
    /// Creates a locator for names like `t_order_0`, `t_order_1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_padding(prefix, 1, '0')
    }

    /// Creates a locator with fixed-width zero-padded suffixes.
    pub fn with_padding(
        prefix: impl Into<String>,
        suffix_min_width: usize,
        padding_char: char,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            suffix_min_width,
            padding_char,
        }
    }

    /// Returns the target-name prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Formats a table-shard index as the suffix this convention produces.
    pub fn format_suffix(&self, index: u64) -> String {
        let raw = index.to_string();
        if raw.len() >= self.suffix_min_width {
            return raw;
        }
        let mut out = String::with_capacity(self.suffix_min_width);
        for _ in 0..self.suffix_min_width - raw.len() {
            out.push(self.padding_char);
        }
        out.push_str(&raw);
        out
    }

    /// Whether `target` is the physical table carrying `suffix`.
    ///
    /// The remainder after the prefix must equal the suffix exactly. A plain
    /// ends-with check would let `t_order_11` answer for suffix `1`.
    pub fn matches(&self, target: &str, suffix: &str) -> bool {
        target
            .strip_prefix(self.prefix.as_str())
            .is_some_and(|rest| rest == suffix)
    }

    /// Finds the one candidate carrying `suffix`, if any.
    pub fn find_matched_target<'a, I>(&self, targets: I, suffix: &str) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        targets.into_iter().find(|t| self.matches(t, suffix))
    }
}

// =============================================================================
// Tests
// =============================================================================
