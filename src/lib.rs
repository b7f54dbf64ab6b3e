// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Live analytics for Uniswap V2 style pairs.
//!
//! pairscan offers two operations over a remote EVM node:
//!
//! - **Metadata aggregation**: [`MetadataAggregator::get_metadata`] reads a
//!   pair's tokens and reserves, the target token's ERC-20 metadata and the
//!   pair's recent Swap history, and derives price, market cap, liquidity,
//!   volume and transaction count. It never fails; unavailable fields
//!   degrade to documented defaults.
//! - **Transfer streaming**: [`TransactionStreamer::open`] subscribes to a
//!   token's Transfer events and exposes them as a cancellable
//!   [`TransactionStream`].
//!
//! [`Screener`] bundles both over one reader and one subscriber.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pairscan::provider::{create_http_provider, create_ws_provider, ProviderConfig};
//! use pairscan::{PairscanConfig, Screener};
//! use tokio_util::sync::CancellationToken;
//!
//! let reader = create_http_provider(ProviderConfig::new("https://eth.llamarpc.com"))?;
//! let subscriber = create_ws_provider(ProviderConfig::new("wss://eth.llamarpc.com")).await?;
//! let screener = Screener::new(Arc::new(reader), Arc::new(subscriber), PairscanConfig::default());
//!
//! let pair = screener.default_pair();
//! let metadata = screener.metadata(pair).await;
//! println!("{} price: {}", metadata.symbol, metadata.price);
//!
//! let connection = CancellationToken::new();
//! let mut stream = screener.open_pair_stream(pair, &connection).await?;
//! while let Some(tx) = stream.next().await {
//!     println!("{} -> {}: {}", tx.from, tx.to, tx.amount);
//! }
//! ```

pub mod abi;
pub mod blocks;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod events;
pub mod format;
pub mod metadata;
pub mod provider;
pub mod screener;
pub mod stream;
mod tracing;

pub use blocks::{BlockCount, LookbackWindow};
pub use config::{PairscanConfig, PairscanConfigBuilder, QuoteAsset};
pub use errors::{CallError, DecodeError, EstablishError, PairscanError, RpcError};
pub use events::{ListenEnd, TransactionEvent, Transfer};
pub use metadata::{MetadataAggregator, TokenMetadata};
pub use provider::{ChainReader, LogStream, LogSubscriber, ProviderClient};
pub use screener::Screener;
pub use stream::{TransactionStream, TransactionStreamer};
