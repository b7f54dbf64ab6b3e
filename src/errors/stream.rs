// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for opening live transfer streams.
//!
//! Only *establishing* a stream can fail. Once a session is running, every
//! way it can end (cancellation, node-side close, a bad log entry) is reported
//! as a [`ListenEnd`](crate::events::listener::ListenEnd), never as an error.

use alloy_primitives::Address;

use super::RpcError;

/// Errors that prevent a transfer stream from starting.
///
/// # Examples
///
/// ```rust,ignore
/// use pairscan::{EstablishError, TransactionStreamer};
/// use tokio_util::sync::CancellationToken;
///
/// match streamer.open(token, &CancellationToken::new()).await {
///     Ok(stream) => serve(stream).await,
///     Err(EstablishError::Subscription { target, source }) => {
///         eprintln!("node refused the subscription for {target}: {source}");
///     }
///     Err(EstablishError::Cancelled { .. }) => {}
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EstablishError {
    /// The node could not open the log subscription.
    #[error("Failed to establish transfer subscription for {target}")]
    Subscription {
        /// Token whose transfers were requested
        target: Address,
        /// The underlying RPC failure
        #[source]
        source: RpcError,
    },

    /// The client went away before the subscription was established.
    #[error("Transfer subscription for {target} cancelled before it was established")]
    Cancelled {
        /// Token whose transfers were requested
        target: Address,
    },
}

impl EstablishError {
    /// Create a `Subscription` error.
    pub fn subscription(target: Address, source: RpcError) -> Self {
        EstablishError::Subscription { target, source }
    }

    /// Token the failed session was opened for.
    pub fn target(&self) -> Address {
        match self {
            EstablishError::Subscription { target, .. } | EstablishError::Cancelled { target } => {
                *target
            }
        }
    }
}
