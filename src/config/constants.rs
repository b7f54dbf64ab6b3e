//! Well-known addresses and constants
//!
//! This module centralizes magic constants and well-known mainnet addresses
//! used throughout the pairscan crate.

use alloy_primitives::{address, Address};

/// Quote assets pairs are priced against
pub mod quote {
    use super::*;

    /// Wrapped Ether on Ethereum Mainnet
    ///
    /// Contract: 0xC02aaA39b223FE8d0A0e5C4F27eAD9083C756Cc2
    pub const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

    /// WETH decimals
    pub const WETH_DECIMALS: u8 = 18;
}

/// Defaults used when the caller does not name a pair or token
pub mod defaults {
    use super::*;

    /// Pair shown when no pair address is supplied
    ///
    /// Contract: 0x52c77b0CB827aFbAD022E6d6CAF2C44452eDbc39
    pub const PAIR: Address = address!("52c77b0cb827afbad022e6d6caf2c44452edbc39");

    /// Token streamed when a pair's `token0` cannot be resolved
    ///
    /// Contract: 0xE0f63A424a4439cBE457D80E4f4b51aD25b2c56C
    pub const STREAM_TOKEN: Address = address!("e0f63a424a4439cbe457d80e4f4b51ad25b2c56c");
}

/// Block-count windows for the derived pair statistics
pub mod windows {
    /// ~24h of 12 second blocks, used for the volume figure
    pub const VOLUME_BLOCKS: u64 = 7_200;

    /// Lookback used for the transaction count
    ///
    /// Deliberately independent of [`VOLUME_BLOCKS`]; the two figures are
    /// not computed over the same range.
    pub const TX_COUNT_BLOCKS: u64 = 10_000;
}

/// Fallbacks substituted when a token contract is non-compliant
pub mod fallback {
    /// Name reported when `name()` fails
    pub const TOKEN_NAME: &str = "Unknown";

    /// Symbol reported when `name()` or `symbol()` fails
    pub const TOKEN_SYMBOL: &str = "UNK";

    /// Decimals reported when any metadata call fails
    pub const TOKEN_DECIMALS: u8 = 18;
}
