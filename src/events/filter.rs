//! Log filter builders
//!
//! Both the historical Swap queries and the live Transfer subscription are
//! plain `alloy_rpc_types::Filter`s. [`LogFilterBuilder`] hides the topic
//! layout behind named methods; [`swap_filter`] and [`transfer_filter`] build
//! the two shapes this crate needs.
//!
//! # Examples
//!
//! ```rust
//! use pairscan::events::filter::{swap_filter, transfer_filter};
//! use pairscan::{BlockCount, LookbackWindow};
//! use alloy_primitives::address;
//!
//! let pair = address!("52c77b0cb827afbad022e6d6caf2c44452edbc39");
//! let window = LookbackWindow::ending_at(1_000_000, BlockCount::new(7_200));
//!
//! let historical = swap_filter(pair, window);
//! assert_eq!(historical.get_from_block(), Some(992_800));
//!
//! // Live subscriptions carry no block range
//! let live = transfer_filter(pair);
//! assert_eq!(live.get_from_block(), None);
//! ```

use alloy_primitives::{Address, BlockNumber, B256};
use alloy_rpc_types::Filter;
use alloy_sol_types::SolEvent;

use crate::abi::pair::IUniswapV2Pair;
use crate::blocks::LookbackWindow;
use crate::events::definitions::Transfer;

/// Builder for single-event log filters
///
/// Every filter this crate issues matches one event signature (topic0)
/// emitted by one contract, optionally over a block range.
#[derive(Debug, Clone, Default)]
pub struct LogFilterBuilder {
    address: Option<Address>,
    event_signature: Option<B256>,
    from_block: Option<BlockNumber>,
    to_block: Option<BlockNumber>,
}

impl LogFilterBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Only match logs emitted by `address`
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Only match logs whose topic0 is `signature_hash`
    pub fn with_event(mut self, signature_hash: B256) -> Self {
        self.event_signature = Some(signature_hash);
        self
    }

    /// Restrict to an inclusive block window
    pub fn in_window(mut self, window: LookbackWindow) -> Self {
        self.from_block = Some(window.from_block);
        self.to_block = Some(window.to_block);
        self
    }

    /// Build the final Alloy Filter
    pub fn build(self) -> Filter {
        let mut filter = Filter::new();

        if let Some(signature) = self.event_signature {
            filter = filter.event_signature(signature);
        }
        if let Some(address) = self.address {
            filter = filter.address(address);
        }
        if let Some(from) = self.from_block {
            filter = filter.from_block(from);
        }
        if let Some(to) = self.to_block {
            filter = filter.to_block(to);
        }

        filter
    }
}

/// `Swap` events emitted by `pair` within `window`
pub fn swap_filter(pair: Address, window: LookbackWindow) -> Filter {
    LogFilterBuilder::new()
        .with_address(pair)
        .with_event(IUniswapV2Pair::Swap::SIGNATURE_HASH)
        .in_window(window)
        .build()
}

/// `Transfer` events emitted by `token`, without a block range
pub fn transfer_filter(token: Address) -> Filter {
    LogFilterBuilder::new()
        .with_address(token)
        .with_event(Transfer::SIGNATURE_HASH)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockCount;
    use alloy_primitives::address;

    #[test]
    fn test_swap_filter_fields() {
        let pair = address!("1111111111111111111111111111111111111111");
        let window = LookbackWindow::ending_at(50_000, BlockCount::new(10_000));
        let filter = swap_filter(pair, window);

        assert_eq!(filter.get_from_block(), Some(40_000));
        assert_eq!(filter.get_to_block(), Some(50_000));
        assert!(filter.address.matches(&pair));
        assert!(filter.topics[0].matches(&IUniswapV2Pair::Swap::SIGNATURE_HASH));
        assert!(!filter.topics[0].matches(&Transfer::SIGNATURE_HASH));
    }

    #[test]
    fn test_transfer_filter_fields() {
        let token = address!("2222222222222222222222222222222222222222");
        let other = address!("3333333333333333333333333333333333333333");
        let filter = transfer_filter(token);

        assert_eq!(filter.get_from_block(), None);
        assert_eq!(filter.get_to_block(), None);
        assert!(filter.address.matches(&token));
        assert!(!filter.address.matches(&other));
        assert!(filter.topics[0].matches(&Transfer::SIGNATURE_HASH));
    }

    #[test]
    fn test_default_builder() {
        let filter = LogFilterBuilder::new().build();
        assert_eq!(filter.get_from_block(), None);
        assert!(filter.address.is_empty());
    }
}
