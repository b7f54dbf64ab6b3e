// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event processing for Swap history and live Transfer feeds.
//!
//! This module handles:
//! - The Transfer event definition
//! - Semantic filter builders for Swap queries and Transfer subscriptions
//! - Decoding Transfer logs into [`TransactionEvent`] records
//! - The live listener that pumps a subscription into a bounded channel

pub mod definitions;
pub mod filter;
pub mod listener;
pub mod transaction;

// Re-export public types
pub use definitions::Transfer;
pub use filter::{swap_filter, transfer_filter, LogFilterBuilder};
pub use listener::{ListenEnd, TransferListener};
pub use transaction::TransactionEvent;
