// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for pairscan integration tests
//!
//! Provides a scriptable in-memory node implementing both [`ChainReader`]
//! and [`LogSubscriber`], so the aggregator and the streaming bridge can be
//! tested without a real blockchain connection.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy_primitives::{address, Address, Bytes, LogData, B256, U256};
use alloy_rpc_types::{Filter, Log};
use alloy_sol_types::{SolCall, SolEvent, SolValue};
use async_trait::async_trait;
use futures::StreamExt;
use pairscan::abi::pair::IUniswapV2Pair;
use pairscan::abi::token::IERC20Metadata;
use pairscan::{ChainReader, LogStream, LogSubscriber, RpcError, Transfer};
use tokio::sync::mpsc;

pub const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
pub const PAIR: Address = address!("52c77b0cb827afbad022e6d6caf2c44452edbc39");
pub const TOKEN: Address = address!("6982508145454ce325ddbe47a25d4ec3d2311933");
pub const OTHER_TOKEN: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
pub const ALICE: Address = address!("1111111111111111111111111111111111111111");
pub const BOB: Address = address!("2222222222222222222222222222222222222222");

/// Scripted answer to one `eth_call`
#[derive(Debug, Clone)]
enum CallResponse {
    Return(Bytes),
    Fail,
    Hang,
}

#[derive(Debug, Clone, Copy)]
enum SubscribeMode {
    Accept,
    Refuse,
    Hang,
}

struct LiveSubscription {
    filter: Filter,
    sender: mpsc::UnboundedSender<Log>,
}

/// In-memory node with scripted calls, historical logs and live subscriptions
///
/// # Example
///
/// ```rust,ignore
/// let node = MockNode::new()
///     .with_pair(PAIR, TOKEN, WETH, 1_000, 10)
///     .with_token(TOKEN, "Token", "TKN", 18, 1_000_000)
///     .with_block_number(20_000);
///
/// let aggregator = MetadataAggregator::new(Arc::new(node), PairscanConfig::default());
/// ```
pub struct MockNode {
    calls: HashMap<(Address, [u8; 4]), CallResponse>,
    block_number: Option<u64>,
    logs: Vec<Log>,
    fail_logs: bool,
    subscribe_mode: SubscribeMode,
    live: Mutex<Vec<LiveSubscription>>,
    log_queries: Mutex<Vec<Filter>>,
    subscriptions_opened: AtomicUsize,
}

impl Default for MockNode {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNode {
    /// A node that fails every call and has no block height
    pub fn new() -> Self {
        Self {
            calls: HashMap::new(),
            block_number: None,
            logs: Vec::new(),
            fail_logs: false,
            subscribe_mode: SubscribeMode::Accept,
            live: Mutex::new(Vec::new()),
            log_queries: Mutex::new(Vec::new()),
            subscriptions_opened: AtomicUsize::new(0),
        }
    }

    /// Answer calls of `C` on `to` with the ABI encoding of `value`
    pub fn with_return<C: SolCall, V: SolValue>(mut self, to: Address, value: V) -> Self {
        self.calls.insert(
            (to, C::SELECTOR),
            CallResponse::Return(value.abi_encode().into()),
        );
        self
    }

    /// Answer calls of `C` on `to` with raw bytes
    pub fn with_raw_return<C: SolCall>(mut self, to: Address, raw: Vec<u8>) -> Self {
        self.calls
            .insert((to, C::SELECTOR), CallResponse::Return(raw.into()));
        self
    }

    /// Make calls of `C` on `to` fail
    pub fn with_failing<C: SolCall>(mut self, to: Address) -> Self {
        self.calls.insert((to, C::SELECTOR), CallResponse::Fail);
        self
    }

    /// Make calls of `C` on `to` never complete
    pub fn with_hanging<C: SolCall>(mut self, to: Address) -> Self {
        self.calls.insert((to, C::SELECTOR), CallResponse::Hang);
        self
    }

    /// Script `token0`, `token1` and `getReserves` for a pair
    pub fn with_pair(
        self,
        pair: Address,
        token0: Address,
        token1: Address,
        reserve0: u128,
        reserve1: u128,
    ) -> Self {
        self.with_return::<IUniswapV2Pair::token0Call, _>(pair, token0)
            .with_return::<IUniswapV2Pair::token1Call, _>(pair, token1)
            .with_return::<IUniswapV2Pair::getReservesCall, _>(
                pair,
                (U256::from(reserve0), U256::from(reserve1), 1_700_000_000u32),
            )
    }

    /// Script the ERC-20 metadata calls for a token
    pub fn with_token(
        self,
        token: Address,
        name: &str,
        symbol: &str,
        decimals: u8,
        total_supply: U256,
    ) -> Self {
        self.with_return::<IERC20Metadata::nameCall, _>(token, name.to_string())
            .with_return::<IERC20Metadata::symbolCall, _>(token, symbol.to_string())
            .with_return::<IERC20Metadata::decimalsCall, _>(token, U256::from(decimals))
            .with_return::<IERC20Metadata::totalSupplyCall, _>(token, total_supply)
    }

    pub fn with_block_number(mut self, block: u64) -> Self {
        self.block_number = Some(block);
        self
    }

    /// Add a historical Swap log with the given amounts
    pub fn with_swap(mut self, pair: Address, block: u64, amounts: [u64; 4]) -> Self {
        let data: Vec<u8> = amounts
            .iter()
            .flat_map(|a| U256::from(*a).to_be_bytes::<32>())
            .collect();
        self.logs
            .push(swap_log_with_data(pair, block, data));
        self
    }

    /// Add a historical Swap log whose data section is truncated
    pub fn with_short_swap(mut self, pair: Address, block: u64) -> Self {
        self.logs.push(swap_log_with_data(pair, block, vec![0u8; 64]));
        self
    }

    pub fn with_failing_logs(mut self) -> Self {
        self.fail_logs = true;
        self
    }

    pub fn refusing_subscriptions(mut self) -> Self {
        self.subscribe_mode = SubscribeMode::Refuse;
        self
    }

    pub fn hanging_subscriptions(mut self) -> Self {
        self.subscribe_mode = SubscribeMode::Hang;
        self
    }

    /// Deliver `log` to every live subscription whose filter matches its emitter
    pub fn emit(&self, log: Log) {
        let live = self.live.lock().unwrap();
        for subscription in live.iter() {
            if subscription.filter.address.matches(&log.address()) {
                let _ = subscription.sender.send(log.clone());
            }
        }
    }

    /// Deliver `log` to every live subscription regardless of filters
    pub fn broadcast(&self, log: Log) {
        let live = self.live.lock().unwrap();
        for subscription in live.iter() {
            let _ = subscription.sender.send(log.clone());
        }
    }

    /// Close every subscription, as a node does when it drops the connection
    pub fn close_subscriptions(&self) {
        self.live.lock().unwrap().clear();
    }

    /// Subscriptions whose consumer side is still alive
    pub fn active_subscriptions(&self) -> usize {
        self.live
            .lock()
            .unwrap()
            .iter()
            .filter(|s| !s.sender.is_closed())
            .count()
    }

    pub fn subscriptions_opened(&self) -> usize {
        self.subscriptions_opened.load(Ordering::SeqCst)
    }

    /// Filters passed to `get_logs`, in call order
    pub fn log_queries(&self) -> Vec<Filter> {
        self.log_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainReader for MockNode {
    async fn call(&self, to: Address, calldata: Bytes) -> Result<Bytes, RpcError> {
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&calldata[..4]);

        match self.calls.get(&(to, selector)).cloned() {
            Some(CallResponse::Return(bytes)) => Ok(bytes),
            Some(CallResponse::Hang) => futures::future::pending().await,
            Some(CallResponse::Fail) | None => Err(RpcError::call_failed(
                to,
                std::io::Error::other("execution reverted"),
            )),
        }
    }

    async fn block_number(&self) -> Result<u64, RpcError> {
        self.block_number.ok_or_else(|| {
            RpcError::get_block_number_failed(std::io::Error::other("node unavailable"))
        })
    }

    async fn get_logs(&self, filter: &Filter) -> Result<Vec<Log>, RpcError> {
        self.log_queries.lock().unwrap().push(filter.clone());

        if self.fail_logs {
            return Err(RpcError::get_logs_failed(
                "logs",
                std::io::Error::other("query returned more than 10000 results"),
            ));
        }

        let from = filter.get_from_block().unwrap_or(0);
        let to = filter.get_to_block().unwrap_or(u64::MAX);

        Ok(self
            .logs
            .iter()
            .filter(|log| filter.address.matches(&log.address()))
            .filter(|log| {
                log.block_number
                    .is_some_and(|block| (from..=to).contains(&block))
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LogSubscriber for MockNode {
    async fn subscribe_logs(&self, filter: Filter) -> Result<LogStream, RpcError> {
        match self.subscribe_mode {
            SubscribeMode::Refuse => {
                return Err(RpcError::subscription_failed(
                    "logs",
                    std::io::Error::other("subscriptions not supported"),
                ))
            }
            SubscribeMode::Hang => futures::future::pending::<()>().await,
            SubscribeMode::Accept => {}
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        self.live
            .lock()
            .unwrap()
            .push(LiveSubscription { filter, sender });
        self.subscriptions_opened.fetch_add(1, Ordering::SeqCst);

        let stream = futures::stream::unfold(receiver, |mut receiver| async move {
            let log = receiver.recv().await?;
            Some((log, receiver))
        });
        Ok(stream.boxed())
    }
}

fn swap_log_with_data(pair: Address, block: u64, data: Vec<u8>) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: pair,
            data: LogData::new_unchecked(
                vec![IUniswapV2Pair::Swap::SIGNATURE_HASH, ALICE.into_word(), BOB.into_word()],
                data.into(),
            ),
        },
        block_number: Some(block),
        transaction_hash: Some(B256::with_last_byte(block as u8)),
        ..Default::default()
    }
}

/// A Transfer log emitted by `token`
pub fn transfer_log(token: Address, from: Address, to: Address, value: u64, nonce: u8) -> Log {
    let data = Transfer {
        from,
        to,
        value: U256::from(value),
    }
    .encode_log_data();

    Log {
        inner: alloy_primitives::Log {
            address: token,
            data,
        },
        transaction_hash: Some(B256::repeat_byte(nonce)),
        ..Default::default()
    }
}

/// A log from `token` carrying the Transfer topic but no indexed parties
pub fn malformed_transfer_log(token: Address) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: token,
            data: LogData::new_unchecked(vec![Transfer::SIGNATURE_HASH], Bytes::new()),
        },
        transaction_hash: Some(B256::ZERO),
        ..Default::default()
    }
}
