// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Lookback windows ending at the current block
//!
//! The aggregator derives two statistics from historical Swap logs, each over
//! its own fixed number of blocks counted back from the chain tip. The window
//! never underflows: near genesis it is clamped to start at block 0.
//!
//! # Examples
//!
//! ```rust
//! use pairscan::{BlockCount, LookbackWindow};
//!
//! let window = LookbackWindow::ending_at(20_000_000, BlockCount::new(7_200));
//! assert_eq!(window.from_block, 19_992_800);
//! assert_eq!(window.to_block, 20_000_000);
//!
//! // Young chains clamp to genesis
//! let window = LookbackWindow::ending_at(500, BlockCount::new(7_200));
//! assert_eq!(window.from_block, 0);
//! ```

use std::fmt;

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

/// A number of blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockCount(u64);

impl BlockCount {
    /// Create a new block count
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    /// Get the inner value
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for BlockCount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BlockCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} blocks", self.0)
    }
}

/// Inclusive block range `[from_block, to_block]` ending at a given block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackWindow {
    /// First block number in the window (inclusive)
    pub from_block: BlockNumber,

    /// Last block number in the window (inclusive)
    pub to_block: BlockNumber,
}

impl LookbackWindow {
    /// Window of `span` blocks back from `current_block`
    pub fn ending_at(current_block: BlockNumber, span: BlockCount) -> Self {
        Self {
            from_block: current_block.saturating_sub(span.get()),
            to_block: current_block,
        }
    }

    /// Returns the number of blocks in this window (inclusive)
    pub fn block_count(&self) -> BlockCount {
        let count = self
            .to_block
            .saturating_sub(self.from_block)
            .saturating_add(1);
        BlockCount::new(count)
    }
}

impl fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from_block, self.to_block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_ending_at_tip() {
        let window = LookbackWindow::ending_at(1_000_000, BlockCount::new(10_000));
        assert_eq!(window.from_block, 990_000);
        assert_eq!(window.to_block, 1_000_000);
        assert_eq!(window.block_count(), BlockCount::new(10_001));
    }

    #[test]
    fn test_window_clamps_at_genesis() {
        let window = LookbackWindow::ending_at(42, BlockCount::new(7_200));
        assert_eq!(window.from_block, 0);
        assert_eq!(window.to_block, 42);
    }

    #[test]
    fn test_zero_span_is_single_block() {
        let window = LookbackWindow::ending_at(42, BlockCount::new(0));
        assert_eq!(window.block_count(), BlockCount::new(1));
    }

    #[test]
    fn test_display() {
        let window = LookbackWindow::ending_at(300, BlockCount::new(100));
        assert_eq!(window.to_string(), "200-300");
        assert_eq!(BlockCount::new(5).to_string(), "5 blocks");
    }
}
