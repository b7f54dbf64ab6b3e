// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Remote-node capabilities and their alloy implementation
//!
//! The aggregator and the listener never see a concrete transport. They
//! depend on two small traits:
//!
//! - [`ChainReader`]: synchronous reads (`eth_call`, `eth_blockNumber`,
//!   `eth_getLogs`), served over HTTP in production
//! - [`LogSubscriber`]: push-based log delivery (`eth_subscribe("logs")`),
//!   served over WebSocket in production
//!
//! [`ProviderClient`] implements both for any `alloy_provider::Provider`, and
//! the factory functions build one from a [`ProviderConfig`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use pairscan::provider::{create_http_provider, create_ws_provider, ProviderConfig};
//!
//! let reader = create_http_provider(ProviderConfig::new("https://eth.llamarpc.com"))?;
//! let subscriber = create_ws_provider(ProviderConfig::new("wss://eth.llamarpc.com")).await?;
//!
//! let height = reader.block_number().await?;
//! ```

mod config;
mod factory;

pub use config::ProviderConfig;
pub use factory::{create_http_provider, create_ws_provider, NodeClient};

use alloy_primitives::{Address, Bytes};
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log, TransactionRequest};
use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use tracing::debug;

use crate::errors::RpcError;

/// A live feed of logs matching a subscription filter
///
/// Ends when the node closes the subscription. Dropping it releases the
/// subscription.
pub type LogStream = BoxStream<'static, Log>;

/// Synchronous read capability of a remote node
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Execute a read-only contract call against the latest block
    async fn call(&self, to: Address, calldata: Bytes) -> Result<Bytes, RpcError>;

    /// Current chain height
    async fn block_number(&self) -> Result<u64, RpcError>;

    /// Historical logs matching `filter`
    async fn get_logs(&self, filter: &Filter) -> Result<Vec<Log>, RpcError>;
}

/// Push-based log delivery capability of a remote node
#[async_trait]
pub trait LogSubscriber: Send + Sync {
    /// Open a subscription for logs matching `filter`
    async fn subscribe_logs(&self, filter: Filter) -> Result<LogStream, RpcError>;
}

/// Adapter exposing an alloy provider through [`ChainReader`] and
/// [`LogSubscriber`]
///
/// Subscriptions need a pub/sub transport (WebSocket); calling
/// [`LogSubscriber::subscribe_logs`] on an HTTP-backed client fails with
/// [`RpcError::SubscriptionFailed`].
#[derive(Debug, Clone)]
pub struct ProviderClient<P> {
    provider: P,
}

impl<P> ProviderClient<P> {
    /// Wrap an alloy provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P> ChainReader for ProviderClient<P>
where
    P: Provider + Send + Sync,
{
    async fn call(&self, to: Address, calldata: Bytes) -> Result<Bytes, RpcError> {
        let request = TransactionRequest::default().to(to).input(calldata.into());
        self.provider
            .call(request)
            .await
            .map_err(|e| RpcError::call_failed(to, e))
    }

    async fn block_number(&self) -> Result<u64, RpcError> {
        self.provider
            .get_block_number()
            .await
            .map_err(RpcError::get_block_number_failed)
    }

    async fn get_logs(&self, filter: &Filter) -> Result<Vec<Log>, RpcError> {
        let logs = self.provider.get_logs(filter).await.map_err(|e| {
            let range = match (filter.get_from_block(), filter.get_to_block()) {
                (Some(from), Some(to)) => format!("logs {from}-{to}"),
                _ => "logs".to_string(),
            };
            RpcError::get_logs_failed(range, e)
        })?;
        debug!(count = logs.len(), "Fetched logs");
        Ok(logs)
    }
}

#[async_trait]
impl<P> LogSubscriber for ProviderClient<P>
where
    P: Provider + Send + Sync,
{
    async fn subscribe_logs(&self, filter: Filter) -> Result<LogStream, RpcError> {
        debug!(
            address = ?filter.address,
            topics = ?filter.topics,
            "Subscribing to logs"
        );

        let subscription = self
            .provider
            .subscribe_logs(&filter)
            .await
            .map_err(|e| RpcError::subscription_failed("logs", e))?;

        debug!("Log subscription established");

        Ok(subscription.into_stream().boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_is_generic_over_providers() {
        fn _reader<P: Provider + Send + Sync>(client: ProviderClient<P>) -> impl ChainReader {
            client
        }
        fn _subscriber<P: Provider + Send + Sync>(
            client: ProviderClient<P>,
        ) -> impl LogSubscriber {
            client
        }
    }
}
