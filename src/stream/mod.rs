// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Cancellable transfer streams
//!
//! [`TransactionStreamer::open`] turns a Transfer subscription into a
//! [`TransactionStream`]: a pull interface over one listener task, bound to
//! a cancellation token. Each call opens an independent session with its own
//! channel and task; nothing is shared or deduplicated between sessions.
//!
//! # Examples
//!
//! ```rust,ignore
//! use pairscan::TransactionStreamer;
//! use tokio_util::sync::CancellationToken;
//!
//! let streamer = TransactionStreamer::new(subscriber);
//! let connection = CancellationToken::new();
//!
//! let mut stream = streamer.open(token, &connection).await?;
//! while let Some(tx) = stream.next().await {
//!     println!("{} {}", tx.hash, tx.amount);
//! }
//! // Either the client went away (connection cancelled) or the node closed
//! // the subscription.
//! ```

mod session;
mod streamer;

pub use session::TransactionStream;
pub use streamer::TransactionStreamer;
