// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pair metadata aggregation
//!
//! [`MetadataAggregator`] combines a fixed sequence of node reads against a
//! pair contract and its non-quote token into one [`TokenMetadata`] value.
//! Aggregation never fails: each field whose read fails is logged and
//! replaced by a default.

mod aggregator;

pub use aggregator::MetadataAggregator;

use alloy_primitives::{Address, U256};
use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};

/// A snapshot of one pair's target token and market
///
/// Built fresh for every request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    /// Decimals of the target token (18 when unavailable)
    pub decimals: u8,
    /// Quote reserve over target reserve, both in raw units
    pub price: BigDecimal,
    /// The target (non-quote) token
    pub base_address: Address,
    /// Raw total supply of the target token
    #[serde(serialize_with = "base10")]
    pub total_supply: U256,
    /// `price * total_supply`, scaled down by the target's decimals
    pub market_cap: BigDecimal,
    /// Sum of every Swap amount in the volume window, in raw units
    pub volume_24h: BigDecimal,
    /// Quote reserve in whole quote units
    pub pooled_quote: BigDecimal,
    /// Target reserve in raw units
    #[serde(serialize_with = "base10")]
    pub pooled_base: U256,
    /// Swap count in the transaction-count window
    pub total_tx_count: u64,
}

/// Raw integers render in base 10, like the decimal fields beside them
fn base10<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
