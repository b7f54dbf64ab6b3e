// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use alloy_primitives::Address;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, Instrument};

use crate::errors::EstablishError;
use crate::events::listener::{pump, TransferListener};
use crate::provider::LogSubscriber;
use crate::tracing::spans;

use super::TransactionStream;

/// At most one decoded event waits for the consumer
const SESSION_CAPACITY: usize = 1;

/// Opens transfer sessions over a shared subscriber
pub struct TransactionStreamer<S: ?Sized> {
    listener: TransferListener<S>,
}

impl<S: ?Sized> Clone for TransactionStreamer<S> {
    fn clone(&self) -> Self {
        Self {
            listener: self.listener.clone(),
        }
    }
}

impl<S> TransactionStreamer<S>
where
    S: LogSubscriber + ?Sized,
{
    /// Create a streamer over a shared subscriber
    pub fn new(subscriber: Arc<S>) -> Self {
        Self {
            listener: TransferListener::new(subscriber),
        }
    }

    /// Open a session streaming Transfer events of `target`
    ///
    /// The session is bound to a child of `cancel`: cancelling `cancel` ends
    /// the session, while ending the session leaves `cancel` untouched.
    /// Exactly one listener task is spawned per successful call.
    ///
    /// # Errors
    ///
    /// - [`EstablishError::Subscription`] when the node refuses the
    ///   subscription
    /// - [`EstablishError::Cancelled`] when `cancel` fires before the
    ///   subscription is established
    pub async fn open(
        &self,
        target: Address,
        cancel: &CancellationToken,
    ) -> Result<TransactionStream, EstablishError> {
        let session = cancel.child_token();

        let logs = tokio::select! {
            biased;
            _ = session.cancelled() => return Err(EstablishError::Cancelled { target }),
            subscribed = self.listener.subscribe(target) => subscribed?,
        };

        let (sender, receiver) = mpsc::channel(SESSION_CAPACITY);
        let task = tokio::spawn(
            pump(target, logs, sender, session.clone()).instrument(spans::transfer_session(target)),
        );

        debug!(token = %target, "Transfer session opened");

        Ok(TransactionStream::new(target, receiver, session, task))
    }
}
