// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Facade over both pairscan operations
//!
//! A [`Screener`] holds the two process-wide node clients (one reader, one
//! subscriber) and hands out metadata snapshots and transfer streams. It is
//! cheap to clone and safe to share between request handlers.
//!
//! # Examples
//!
//! ```rust,ignore
//! use pairscan::{PairscanConfig, Screener};
//! use tokio_util::sync::CancellationToken;
//!
//! let screener = Screener::new(reader, subscriber, PairscanConfig::default());
//! let pair = screener.default_pair();
//!
//! let metadata = screener.metadata(pair).await;
//!
//! let connection = CancellationToken::new();
//! let mut stream = screener.open_pair_stream(pair, &connection).await?;
//! ```

use std::sync::Arc;

use alloy_primitives::Address;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::PairscanConfig;
use crate::errors::EstablishError;
use crate::metadata::{MetadataAggregator, TokenMetadata};
use crate::provider::{ChainReader, LogSubscriber};
use crate::stream::{TransactionStream, TransactionStreamer};

/// Metadata aggregation and transfer streaming over one pair of node clients
pub struct Screener<R: ?Sized, S: ?Sized> {
    aggregator: MetadataAggregator<R>,
    streamer: TransactionStreamer<S>,
}

impl<R: ?Sized, S: ?Sized> Clone for Screener<R, S> {
    fn clone(&self) -> Self {
        Self {
            aggregator: self.aggregator.clone(),
            streamer: self.streamer.clone(),
        }
    }
}

impl<R, S> Screener<R, S>
where
    R: ChainReader + ?Sized,
    S: LogSubscriber + ?Sized,
{
    /// Create a screener from shared clients and an explicit configuration
    pub fn new(reader: Arc<R>, subscriber: Arc<S>, config: PairscanConfig) -> Self {
        Self {
            aggregator: MetadataAggregator::new(reader, config),
            streamer: TransactionStreamer::new(subscriber),
        }
    }

    /// Pair to show when the caller names none
    pub fn default_pair(&self) -> Address {
        self.aggregator.config().default_pair
    }

    /// The configuration this screener was built with
    pub fn config(&self) -> &PairscanConfig {
        self.aggregator.config()
    }

    /// Aggregate metadata for `pair`
    pub async fn metadata(&self, pair: Address) -> TokenMetadata {
        self.aggregator.get_metadata(pair).await
    }

    /// Aggregate metadata for `pair`, degrading outstanding reads once
    /// `cancel` fires
    pub async fn metadata_with_cancel(
        &self,
        pair: Address,
        cancel: &CancellationToken,
    ) -> TokenMetadata {
        self.aggregator.get_metadata_with_cancel(pair, cancel).await
    }

    /// Stream Transfer events of `target` until `cancel` fires
    ///
    /// # Errors
    ///
    /// See [`TransactionStreamer::open`].
    pub async fn open_transaction_stream(
        &self,
        target: Address,
        cancel: &CancellationToken,
    ) -> Result<TransactionStream, EstablishError> {
        self.streamer.open(target, cancel).await
    }

    /// Stream Transfer events of the token traded in `pair`
    ///
    /// The token is the pair's `token0`, or the configured fallback token
    /// when `token0` cannot be resolved.
    ///
    /// # Errors
    ///
    /// See [`TransactionStreamer::open`].
    pub async fn open_pair_stream(
        &self,
        pair: Address,
        cancel: &CancellationToken,
    ) -> Result<TransactionStream, EstablishError> {
        let target = self.aggregator.resolve_stream_target(pair, cancel).await;
        info!(%pair, token = %target, "Opening pair transfer stream");
        self.streamer.open(target, cancel).await
    }
}
