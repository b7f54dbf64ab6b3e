//! Configuration for pairscan operations
//!
//! Configuration is passed explicitly into the constructors of
//! [`MetadataAggregator`](crate::MetadataAggregator) and
//! [`Screener`](crate::Screener). Nothing in the library reads the process
//! environment; that is left to the binary's bootstrap.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use pairscan::PairscanConfig;
//!
//! // WETH-quoted pairs, 7 200 block volume window, 10 000 block tx-count window
//! let config = PairscanConfig::default();
//! assert_eq!(config.volume_window.get(), 7_200);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use pairscan::PairscanConfigBuilder;
//! use std::time::Duration;
//!
//! let config = PairscanConfigBuilder::new()
//!     .volume_window(3_600)
//!     .rpc_timeout(Duration::from_secs(10))
//!     .build();
//! ```

use std::time::Duration;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::blocks::BlockCount;

pub mod constants;

use constants::{defaults, quote, windows};

/// The reference asset pairs are priced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteAsset {
    /// Token contract address
    pub address: Address,
    /// Token decimals, used to scale the pooled quote reserve
    pub decimals: u8,
}

impl QuoteAsset {
    /// Wrapped Ether on mainnet
    pub const WETH: Self = Self {
        address: quote::WETH,
        decimals: quote::WETH_DECIMALS,
    };

    /// Create a quote asset from an address and its decimals
    pub const fn new(address: Address, decimals: u8) -> Self {
        Self { address, decimals }
    }
}

impl Default for QuoteAsset {
    fn default() -> Self {
        Self::WETH
    }
}

/// Configuration for pairscan operations
///
/// Use [`PairscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct PairscanConfig {
    /// Asset the target token is priced against
    /// Default: WETH (18 decimals)
    pub quote_asset: QuoteAsset,

    /// Lookback used for the 24h volume figure
    /// Default: 7 200 blocks
    pub volume_window: BlockCount,

    /// Lookback used for the transaction count
    /// Default: 10 000 blocks
    pub tx_count_window: BlockCount,

    /// Per-call timeout for aggregator reads
    /// Default: None (the caller bounds the request through cancellation)
    pub rpc_timeout: Option<Duration>,

    /// Pair used when the caller does not supply one
    pub default_pair: Address,

    /// Token streamed when a pair's `token0` cannot be resolved
    pub fallback_stream_token: Address,
}

impl Default for PairscanConfig {
    fn default() -> Self {
        Self {
            quote_asset: QuoteAsset::WETH,
            volume_window: BlockCount::new(windows::VOLUME_BLOCKS),
            tx_count_window: BlockCount::new(windows::TX_COUNT_BLOCKS),
            rpc_timeout: None,
            default_pair: defaults::PAIR,
            fallback_stream_token: defaults::STREAM_TOKEN,
        }
    }
}

/// Builder for [`PairscanConfig`]
///
/// # Example
///
/// ```rust
/// use pairscan::{PairscanConfigBuilder, QuoteAsset};
/// use alloy_primitives::address;
///
/// let usdc = QuoteAsset::new(address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"), 6);
/// let config = PairscanConfigBuilder::new()
///     .quote_asset(usdc)
///     .tx_count_window(5_000)
///     .build();
///
/// assert_eq!(config.quote_asset.decimals, 6);
/// assert_eq!(config.tx_count_window.get(), 5_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PairscanConfigBuilder {
    config: PairscanConfig,
}

impl PairscanConfigBuilder {
    /// Create a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote asset
    pub fn quote_asset(mut self, quote_asset: QuoteAsset) -> Self {
        self.config.quote_asset = quote_asset;
        self
    }

    /// Set the volume lookback in blocks
    pub fn volume_window(mut self, blocks: u64) -> Self {
        self.config.volume_window = BlockCount::new(blocks);
        self
    }

    /// Set the transaction-count lookback in blocks
    pub fn tx_count_window(mut self, blocks: u64) -> Self {
        self.config.tx_count_window = BlockCount::new(blocks);
        self
    }

    /// Bound every aggregator read by a timeout
    pub fn rpc_timeout(mut self, timeout: Duration) -> Self {
        self.config.rpc_timeout = Some(timeout);
        self
    }

    /// Set the pair used when none is supplied
    pub fn default_pair(mut self, pair: Address) -> Self {
        self.config.default_pair = pair;
        self
    }

    /// Set the token streamed when `token0` cannot be resolved
    pub fn fallback_stream_token(mut self, token: Address) -> Self {
        self.config.fallback_stream_token = token;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> PairscanConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_default_config() {
        let config = PairscanConfig::default();
        assert_eq!(config.quote_asset, QuoteAsset::WETH);
        assert_eq!(config.volume_window.get(), 7_200);
        assert_eq!(config.tx_count_window.get(), 10_000);
        assert!(config.rpc_timeout.is_none());
        assert_eq!(config.default_pair, defaults::PAIR);
    }

    #[test]
    fn test_builder_overrides() {
        let pair = address!("1111111111111111111111111111111111111111");
        let token = address!("2222222222222222222222222222222222222222");

        let config = PairscanConfigBuilder::new()
            .volume_window(100)
            .tx_count_window(200)
            .rpc_timeout(Duration::from_millis(500))
            .default_pair(pair)
            .fallback_stream_token(token)
            .build();

        assert_eq!(config.volume_window.get(), 100);
        assert_eq!(config.tx_count_window.get(), 200);
        assert_eq!(config.rpc_timeout, Some(Duration::from_millis(500)));
        assert_eq!(config.default_pair, pair);
        assert_eq!(config.fallback_stream_token, token);
    }
}
