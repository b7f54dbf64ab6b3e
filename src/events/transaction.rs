// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoded transfer records delivered to stream consumers

use alloy_primitives::Address;
use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use serde::Serialize;

use crate::errors::DecodeError;
use crate::events::definitions::Transfer;

/// One observed token transfer
///
/// `observed_at` is the wall-clock time at which the log was decoded, not the
/// block timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionEvent {
    /// Transaction hash, `0x`-prefixed lowercase hex
    pub hash: String,
    pub from: Address,
    pub to: Address,
    /// Raw transferred amount as a base-10 string
    pub amount: String,
    /// Unix seconds
    pub observed_at: i64,
}

impl TransactionEvent {
    /// Decode a `Transfer` log
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Event`] when the topics or data do not match the
    ///   Transfer layout
    /// - [`DecodeError::MissingTransactionHash`] for logs without a
    ///   transaction hash (pending logs)
    pub fn from_log(log: &Log, observed_at: i64) -> Result<Self, DecodeError> {
        let transfer = Transfer::decode_log_data(log.data())
            .map_err(|e| DecodeError::event(Transfer::SIGNATURE, e))?;
        let hash = log
            .transaction_hash
            .ok_or(DecodeError::MissingTransactionHash)?;

        Ok(Self {
            hash: hash.to_string(),
            from: transfer.from,
            to: transfer.to,
            amount: transfer.value.to_string(),
            observed_at,
        })
    }
}
