// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for decoding contract return data and event logs.

/// Errors that can occur when decoding ABI payloads.
///
/// An [`EmptyPayload`](DecodeError::EmptyPayload) is the common case for
/// non-compliant token contracts (the call succeeds but returns nothing).
/// Callers treat it as "field unavailable" rather than a hard failure.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The call returned zero bytes.
    #[error("Empty return payload for {method}")]
    EmptyPayload {
        /// Solidity signature of the call
        method: &'static str,
    },

    /// The payload did not match the expected ABI shape.
    #[error("Failed to decode {method} return data")]
    Abi {
        /// Solidity signature of the call
        method: &'static str,
        /// The underlying ABI error
        #[source]
        source: alloy_sol_types::Error,
    },

    /// The log's data section is shorter than the event layout requires.
    #[error("Log data too short: expected at least {expected} bytes, got {actual}")]
    ShortLogData {
        /// Minimum byte length required
        expected: usize,
        /// Actual byte length received
        actual: usize,
    },

    /// The log does not carry a transaction hash (pending or synthetic log).
    #[error("Log is missing its transaction hash")]
    MissingTransactionHash,

    /// The log's topics or data do not match the event signature.
    #[error("Failed to decode {event} event")]
    Event {
        /// Solidity signature of the event
        event: &'static str,
        /// The underlying ABI error
        #[source]
        source: alloy_sol_types::Error,
    },
}

impl DecodeError {
    /// Create an `EmptyPayload` error for a call signature.
    pub fn empty_payload(method: &'static str) -> Self {
        DecodeError::EmptyPayload { method }
    }

    /// Create an `Abi` error for a call signature.
    pub fn abi(method: &'static str, source: alloy_sol_types::Error) -> Self {
        DecodeError::Abi { method, source }
    }

    /// Create an `Event` error for an event signature.
    pub fn event(event: &'static str, source: alloy_sol_types::Error) -> Self {
        DecodeError::Event { event, source }
    }
}
