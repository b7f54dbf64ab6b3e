// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::future::Future;
use std::sync::Arc;

use alloy_primitives::{Address, U256};
use alloy_rpc_types::Log;
use alloy_sol_types::SolCall;
use bigdecimal::BigDecimal;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn, Instrument};

use crate::abi::pair::{IUniswapV2Pair, Reserves, SwapAmounts};
use crate::abi::token::IERC20Metadata;
use crate::abi::{decode_return, encode_call};
use crate::blocks::{BlockCount, LookbackWindow};
use crate::config::constants::fallback;
use crate::config::{PairscanConfig, QuoteAsset};
use crate::errors::{CallError, RpcError};
use crate::events::filter::swap_filter;
use crate::format::{scale_down, to_quote_units, u256_to_bigdecimal};
use crate::provider::ChainReader;
use crate::tracing::spans;

use super::TokenMetadata;

/// Which side of a pair is priced, and the reserves on each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PairSides {
    pub target: Address,
    pub quote_reserve: U256,
    pub target_reserve: U256,
}

impl PairSides {
    /// Pick the non-quote token as target
    ///
    /// A pair with no quote-asset side is priced as if `token1` were the
    /// quote, so `token0` becomes the target.
    pub(crate) fn split(
        token0: Address,
        token1: Address,
        reserves: Reserves,
        quote: &QuoteAsset,
    ) -> Self {
        if token0 == quote.address {
            Self {
                target: token1,
                quote_reserve: reserves.reserve0,
                target_reserve: reserves.reserve1,
            }
        } else {
            Self {
                target: token0,
                quote_reserve: reserves.reserve1,
                target_reserve: reserves.reserve0,
            }
        }
    }

    /// Quote per target, in raw units; zero for an empty target reserve
    pub(crate) fn price(&self) -> BigDecimal {
        if self.target_reserve.is_zero() {
            return BigDecimal::from(0);
        }
        u256_to_bigdecimal(self.quote_reserve) / u256_to_bigdecimal(self.target_reserve)
    }
}

/// Aggregates pair and token reads into [`TokenMetadata`]
///
/// The reader is shared read-only; one aggregator serves any number of
/// concurrent requests.
///
/// # Examples
///
/// ```rust,ignore
/// use pairscan::{MetadataAggregator, PairscanConfig};
/// use pairscan::provider::{create_http_provider, ProviderConfig};
/// use std::sync::Arc;
///
/// let reader = create_http_provider(ProviderConfig::new("https://eth.llamarpc.com"))?;
/// let aggregator = MetadataAggregator::new(Arc::new(reader), PairscanConfig::default());
///
/// let metadata = aggregator.get_metadata(pair).await;
/// println!("{} ({}) price {}", metadata.name, metadata.symbol, metadata.price);
/// ```
pub struct MetadataAggregator<R: ?Sized> {
    reader: Arc<R>,
    config: PairscanConfig,
}

impl<R: ?Sized> Clone for MetadataAggregator<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
            config: self.config.clone(),
        }
    }
}

impl<R> MetadataAggregator<R>
where
    R: ChainReader + ?Sized,
{
    /// Create an aggregator over a shared reader
    pub fn new(reader: Arc<R>, config: PairscanConfig) -> Self {
        Self { reader, config }
    }

    /// The configuration this aggregator was built with
    pub fn config(&self) -> &PairscanConfig {
        &self.config
    }

    /// Aggregate metadata for `pair`
    ///
    /// Runs until every read completes; bound it with
    /// [`get_metadata_with_cancel`](Self::get_metadata_with_cancel) or a
    /// configured [`rpc_timeout`](PairscanConfig::rpc_timeout).
    pub async fn get_metadata(&self, pair: Address) -> TokenMetadata {
        self.get_metadata_with_cancel(pair, &CancellationToken::new())
            .await
    }

    /// Aggregate metadata for `pair`, abandoning outstanding reads once
    /// `cancel` fires
    ///
    /// Reads abandoned by cancellation degrade exactly like failed ones, so a
    /// value is still returned.
    pub async fn get_metadata_with_cancel(
        &self,
        pair: Address,
        cancel: &CancellationToken,
    ) -> TokenMetadata {
        self.aggregate(pair, cancel)
            .instrument(spans::get_metadata(pair))
            .await
    }

    /// Token whose transfers the live feed for `pair` follows
    ///
    /// This is the pair's `token0`, or the configured fallback token when
    /// `token0` cannot be read or is the zero address.
    pub async fn resolve_stream_target(
        &self,
        pair: Address,
        cancel: &CancellationToken,
    ) -> Address {
        match self
            .read(pair, IUniswapV2Pair::token0Call {}, cancel)
            .await
        {
            Ok(token) if token != Address::ZERO => token,
            Ok(_) => {
                warn!(%pair, "token0() returned the zero address, using fallback stream token");
                self.config.fallback_stream_token
            }
            Err(e) => {
                warn!(%pair, error = %e, "Failed to resolve token0, using fallback stream token");
                self.config.fallback_stream_token
            }
        }
    }

    async fn aggregate(&self, pair: Address, cancel: &CancellationToken) -> TokenMetadata {
        let (token0, token1) = tokio::join!(
            self.pair_token(pair, IUniswapV2Pair::token0Call {}, cancel),
            self.pair_token(pair, IUniswapV2Pair::token1Call {}, cancel),
        );

        let reserves = match self
            .read(pair, IUniswapV2Pair::getReservesCall {}, cancel)
            .await
        {
            Ok(ret) => Reserves::from(ret),
            Err(e) => {
                warn!(%pair, error = %e, "Failed to fetch reserves, using zero");
                Reserves::default()
            }
        };

        let sides = PairSides::split(token0, token1, reserves, &self.config.quote_asset);
        debug!(target_token = %sides.target, %token0, %token1, "Selected target token");

        let (name, symbol, decimals) = self
            .fetch_token_info(sides.target, cancel)
            .instrument(spans::fetch_token_info(sides.target))
            .await;

        let (total_supply, volume_24h, total_tx_count) = tokio::join!(
            self.total_supply(sides.target, cancel),
            self.volume(pair, cancel),
            self.tx_count(pair, cancel),
        );

        let price = sides.price();
        let raw_market_cap = &price * &u256_to_bigdecimal(total_supply);
        let market_cap = scale_down(&raw_market_cap, decimals);

        info!(
            %pair,
            target_token = %sides.target,
            %symbol,
            total_tx_count,
            "Aggregated pair metadata"
        );

        TokenMetadata {
            name,
            symbol,
            decimals,
            price,
            base_address: sides.target,
            total_supply,
            market_cap,
            volume_24h,
            pooled_quote: to_quote_units(sides.quote_reserve, self.config.quote_asset.decimals),
            pooled_base: sides.target_reserve,
            total_tx_count,
        }
    }

    async fn pair_token<C>(&self, pair: Address, call: C, cancel: &CancellationToken) -> Address
    where
        C: SolCall<Return = Address>,
    {
        self.read(pair, call, cancel).await.unwrap_or_else(|e| {
            warn!(%pair, method = C::SIGNATURE, error = %e, "Failed to fetch pair token, using zero address");
            Address::ZERO
        })
    }

    /// Name, symbol and decimals, each falling back once an earlier read fails
    async fn fetch_token_info(
        &self,
        token: Address,
        cancel: &CancellationToken,
    ) -> (String, String, u8) {
        let name = match self.read(token, IERC20Metadata::nameCall {}, cancel).await {
            Ok(name) => name,
            Err(e) => {
                warn!(%token, error = %e, "Failed to fetch token name");
                return (
                    fallback::TOKEN_NAME.to_string(),
                    fallback::TOKEN_SYMBOL.to_string(),
                    fallback::TOKEN_DECIMALS,
                );
            }
        };

        let symbol = match self.read(token, IERC20Metadata::symbolCall {}, cancel).await {
            Ok(symbol) => symbol,
            Err(e) => {
                warn!(%token, error = %e, "Failed to fetch token symbol");
                return (
                    name,
                    fallback::TOKEN_SYMBOL.to_string(),
                    fallback::TOKEN_DECIMALS,
                );
            }
        };

        let decimals = match self
            .read(token, IERC20Metadata::decimalsCall {}, cancel)
            .await
        {
            Ok(decimals) => decimals,
            Err(e) => {
                warn!(%token, error = %e, "Failed to fetch token decimals");
                fallback::TOKEN_DECIMALS
            }
        };

        (name, symbol, decimals)
    }

    async fn total_supply(&self, token: Address, cancel: &CancellationToken) -> U256 {
        self.read(token, IERC20Metadata::totalSupplyCall {}, cancel)
            .await
            .unwrap_or_else(|e| {
                warn!(%token, error = %e, "Failed to fetch total supply, using zero");
                U256::ZERO
            })
    }

    async fn volume(&self, pair: Address, cancel: &CancellationToken) -> BigDecimal {
        let logs = match self
            .swap_logs(pair, self.config.volume_window, "volume", cancel)
            .await
        {
            Ok(logs) => logs,
            Err(e) => {
                warn!(%pair, error = %e, "Failed to compute volume, using zero");
                return BigDecimal::from(0);
            }
        };

        let mut skipped = 0usize;
        let total = logs
            .iter()
            .filter_map(|log| match SwapAmounts::from_log_data(&log.data().data) {
                Ok(amounts) => Some(amounts.total()),
                Err(e) => {
                    debug!(error = %e, "Skipping swap log");
                    skipped += 1;
                    None
                }
            })
            .fold(BigDecimal::from(0), |acc, amount| acc + amount);

        debug!(swaps = logs.len(), skipped, "Summed swap volume");
        total
    }

    async fn tx_count(&self, pair: Address, cancel: &CancellationToken) -> u64 {
        match self
            .swap_logs(pair, self.config.tx_count_window, "tx_count", cancel)
            .await
        {
            Ok(logs) => logs.len() as u64,
            Err(e) => {
                warn!(%pair, error = %e, "Failed to count transactions, using zero");
                0
            }
        }
    }

    /// Swap logs of `pair` over the last `span` blocks
    async fn swap_logs(
        &self,
        pair: Address,
        span: BlockCount,
        purpose: &'static str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Log>, CallError> {
        let current = self
            .guarded("eth_blockNumber", cancel, async {
                self.reader.block_number().await.map_err(CallError::from)
            })
            .await?;

        let window = LookbackWindow::ending_at(current, span);
        let filter = swap_filter(pair, window);

        self.guarded("eth_getLogs", cancel, async {
            self.reader.get_logs(&filter).await.map_err(CallError::from)
        })
        .instrument(spans::swap_window(
            pair,
            purpose,
            window.from_block,
            window.to_block,
        ))
        .await
    }

    /// One typed contract read
    async fn read<C: SolCall>(
        &self,
        to: Address,
        call: C,
        cancel: &CancellationToken,
    ) -> Result<C::Return, CallError> {
        let calldata = encode_call(&call);
        let raw = self
            .guarded(C::SIGNATURE, cancel, async {
                self.reader.call(to, calldata).await.map_err(CallError::from)
            })
            .await?;
        Ok(decode_return::<C>(&raw)?)
    }

    /// Race `fut` against cancellation and the configured timeout
    async fn guarded<T, F>(
        &self,
        operation: &'static str,
        cancel: &CancellationToken,
        fut: F,
    ) -> Result<T, CallError>
    where
        F: Future<Output = Result<T, CallError>>,
    {
        let bounded = async {
            match self.config.rpc_timeout {
                Some(after) => match tokio::time::timeout(after, fut).await {
                    Ok(result) => result,
                    Err(_) => Err(RpcError::timeout(operation, after).into()),
                },
                None => fut.await,
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(RpcError::cancelled(operation).into()),
            result = bounded => result,
        }
    }
}
