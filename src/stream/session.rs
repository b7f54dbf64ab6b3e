// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use alloy_primitives::Address;
use futures::Stream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::events::listener::ListenEnd;
use crate::events::transaction::TransactionEvent;

/// One live transfer session
///
/// Owns the receiving half of the session channel, the session's
/// cancellation token and the listener task. The listener holds the only
/// sender, so the channel closes exactly once: when the listener ends, or
/// when this side closes it on cancellation.
///
/// Dropping the session cancels it.
#[derive(Debug)]
pub struct TransactionStream {
    target: Address,
    receiver: mpsc::Receiver<TransactionEvent>,
    cancel: CancellationToken,
    task: Option<JoinHandle<ListenEnd>>,
}

impl TransactionStream {
    pub(crate) fn new(
        target: Address,
        receiver: mpsc::Receiver<TransactionEvent>,
        cancel: CancellationToken,
        task: JoinHandle<ListenEnd>,
    ) -> Self {
        Self {
            target,
            receiver,
            cancel,
            task: Some(task),
        }
    }

    /// Next transfer, or `None` once the session has ended
    ///
    /// When cancellation and a pending event are both ready, cancellation
    /// wins and the event is discarded.
    pub async fn next(&mut self) -> Option<TransactionEvent> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                self.receiver.close();
                None
            }
            event = self.receiver.recv() => event,
        }
    }

    /// End the session
    ///
    /// Pending and future calls to [`next`](Self::next) return `None`.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the session has been cancelled, directly or through its parent
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Token whose transfers this session streams
    pub fn target(&self) -> Address {
        self.target
    }

    /// Whether the listener task has terminated
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }

    /// Cancel the session and wait for its listener task to exit
    ///
    /// Returns how the listener ended, or `None` if the task panicked.
    pub async fn shutdown(mut self) -> Option<ListenEnd> {
        self.cancel.cancel();
        self.receiver.close();

        let task = self.task.take()?;
        match task.await {
            Ok(end) => {
                debug!(token = %self.target, %end, "Transfer session shut down");
                Some(end)
            }
            Err(e) => {
                debug!(token = %self.target, error = %e, "Transfer listener task failed");
                None
            }
        }
    }

    /// Adapt the session into a [`Stream`]
    pub fn into_stream(self) -> impl Stream<Item = TransactionEvent> + Send + 'static {
        futures::stream::unfold(self, |mut session| async move {
            let event = session.next().await?;
            Some((event, session))
        })
    }
}

impl Drop for TransactionStream {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
