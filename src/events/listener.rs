// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Live Transfer listener
//!
//! A listener opens a log subscription for one token and forwards each
//! decoded [`TransactionEvent`] through a bounded channel. Every send races
//! the session's cancellation token, so the task can never block on a
//! consumer that has gone away.
//!
//! Establishing the subscription is the only fallible step. Once running, the
//! listener only *ends*, and reports how through [`ListenEnd`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use pairscan::events::listener::TransferListener;
//! use tokio::sync::mpsc;
//! use tokio_util::sync::CancellationToken;
//!
//! let listener = TransferListener::new(subscriber);
//! let (sender, mut receiver) = mpsc::channel(1);
//! let cancel = CancellationToken::new();
//!
//! tokio::spawn(async move { listener.listen(token, sender, cancel).await });
//!
//! while let Some(tx) = receiver.recv().await {
//!     println!("{} -> {}: {}", tx.from, tx.to, tx.amount);
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use alloy_primitives::Address;
use chrono::Utc;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::errors::EstablishError;
use crate::events::filter::transfer_filter;
use crate::events::transaction::TransactionEvent;
use crate::provider::{LogStream, LogSubscriber};

/// How a listening session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenEnd {
    /// The session's cancellation token fired
    Cancelled,
    /// The node closed the subscription
    UpstreamClosed,
    /// The receiving half of the channel was dropped
    ConsumerGone,
    /// A log entry could not be decoded as a Transfer
    DecodeFailed,
}

impl ListenEnd {
    /// Whether the session ended because its consumer asked it to
    pub fn is_requested(&self) -> bool {
        matches!(self, ListenEnd::Cancelled | ListenEnd::ConsumerGone)
    }
}

impl fmt::Display for ListenEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ListenEnd::Cancelled => "cancelled",
            ListenEnd::UpstreamClosed => "upstream closed",
            ListenEnd::ConsumerGone => "consumer gone",
            ListenEnd::DecodeFailed => "decode failed",
        };
        f.write_str(reason)
    }
}

/// Opens Transfer subscriptions and pumps them into channels
pub struct TransferListener<S: ?Sized> {
    subscriber: Arc<S>,
}

impl<S: ?Sized> Clone for TransferListener<S> {
    fn clone(&self) -> Self {
        Self {
            subscriber: Arc::clone(&self.subscriber),
        }
    }
}

impl<S> TransferListener<S>
where
    S: LogSubscriber + ?Sized,
{
    /// Create a listener on top of a shared subscriber
    pub fn new(subscriber: Arc<S>) -> Self {
        Self { subscriber }
    }

    /// Open a Transfer subscription for `target`
    ///
    /// # Errors
    ///
    /// [`EstablishError::Subscription`] when the node refuses the
    /// subscription.
    pub async fn subscribe(&self, target: Address) -> Result<LogStream, EstablishError> {
        self.subscriber
            .subscribe_logs(transfer_filter(target))
            .await
            .map_err(|e| EstablishError::subscription(target, e))
    }

    /// Subscribe, then forward events until the session ends
    ///
    /// # Errors
    ///
    /// Only establishment fails; see [`TransferListener::subscribe`].
    pub async fn listen(
        &self,
        target: Address,
        sender: mpsc::Sender<TransactionEvent>,
        cancel: CancellationToken,
    ) -> Result<ListenEnd, EstablishError> {
        let logs = self.subscribe(target).await?;
        Ok(pump(target, logs, sender, cancel).await)
    }
}

/// Forward decoded Transfer logs from `logs` into `sender`
///
/// Logs not emitted by `target` are skipped. The subscription stream is
/// dropped, and with it the node-side subscription, when this returns.
pub async fn pump(
    target: Address,
    mut logs: LogStream,
    sender: mpsc::Sender<TransactionEvent>,
    cancel: CancellationToken,
) -> ListenEnd {
    info!(token = %target, "Transfer listener started");

    let end = loop {
        let log = tokio::select! {
            biased;
            _ = cancel.cancelled() => break ListenEnd::Cancelled,
            _ = sender.closed() => break ListenEnd::ConsumerGone,
            next = logs.next() => match next {
                Some(log) => log,
                None => break ListenEnd::UpstreamClosed,
            },
        };

        if log.address() != target {
            debug!(token = %target, emitter = %log.address(), "Skipping log from another contract");
            continue;
        }

        let event = match TransactionEvent::from_log(&log, Utc::now().timestamp()) {
            Ok(event) => event,
            Err(e) => {
                warn!(token = %target, error = %e, "Failed to decode transfer log");
                break ListenEnd::DecodeFailed;
            }
        };

        debug!(hash = %event.hash, amount = %event.amount, "Delivering transfer");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break ListenEnd::Cancelled,
            sent = sender.send(event) => {
                if sent.is_err() {
                    break ListenEnd::ConsumerGone;
                }
            }
        }
    };

    if end.is_requested() {
        info!(token = %target, %end, "Transfer listener stopped");
    } else {
        warn!(token = %target, %end, "Transfer listener ended");
    }

    end
}
