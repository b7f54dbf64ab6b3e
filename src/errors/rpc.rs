// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for node operations.
//!
//! Every variant carries enough context (target address, operation name) to
//! make the degraded-field warnings emitted by the aggregator actionable.

use std::time::Duration;

use alloy_primitives::Address;

/// Errors that can occur while talking to the remote node.
///
/// # Examples
///
/// ```rust
/// use pairscan::RpcError;
///
/// let error = RpcError::Cancelled {
///     operation: "eth_call".to_string(),
/// };
/// assert_eq!(error.to_string(), "eth_call was cancelled");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// A read-only contract call (`eth_call`) failed.
    #[error("Contract call to {address} failed")]
    CallFailed {
        /// Contract that was called
        address: Address,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to fetch historical logs.
    ///
    /// This can occur due to rate limiting, block ranges the provider refuses
    /// to serve, or connectivity issues.
    #[error("Failed to fetch logs for {operation}")]
    GetLogsFailed {
        /// Description of the query (e.g., "Swap logs 100-200")
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to fetch the current block number.
    #[error("Failed to get current block number")]
    GetBlockNumberFailed {
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The node refused or failed to open a push subscription.
    #[error("Failed to subscribe to {kind}")]
    SubscriptionFailed {
        /// Subscription kind ("logs")
        kind: &'static str,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The endpoint URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),

    /// The transport could not connect to the endpoint.
    #[error("Provider connection failed: {0}")]
    ProviderConnectionFailed(String),

    /// The call did not complete within the configured timeout.
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        /// Operation that timed out
        operation: String,
        /// The timeout that elapsed
        after: Duration,
    },

    /// The caller's cancellation signal fired before the call completed.
    #[error("{operation} was cancelled")]
    Cancelled {
        /// Operation that was abandoned
        operation: String,
    },
}

impl RpcError {
    /// Helper to create a `CallFailed` error from any error type.
    pub fn call_failed(
        address: Address,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::CallFailed {
            address,
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetLogsFailed` error from any error type.
    pub fn get_logs_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetLogsFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetBlockNumberFailed` error from any error type.
    pub fn get_block_number_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::GetBlockNumberFailed {
            source: Box::new(source),
        }
    }

    /// Helper to create a `SubscriptionFailed` error from any error type.
    pub fn subscription_failed(
        kind: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::SubscriptionFailed {
            kind,
            source: Box::new(source),
        }
    }

    /// Helper to create a `Timeout` error.
    pub fn timeout(operation: impl Into<String>, after: Duration) -> Self {
        RpcError::Timeout {
            operation: operation.into(),
            after,
        }
    }

    /// Helper to create a `Cancelled` error.
    pub fn cancelled(operation: impl Into<String>) -> Self {
        RpcError::Cancelled {
            operation: operation.into(),
        }
    }

    /// Whether this error came from the caller's cancellation signal.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RpcError::Cancelled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_call_failed_keeps_source() {
        let err = RpcError::call_failed(Address::ZERO, std::io::Error::other("connection reset"));
        assert!(err.to_string().contains("Contract call"));
        assert_eq!(err.source().unwrap().to_string(), "connection reset");
    }

    #[test]
    fn test_timeout_message_includes_duration() {
        let err = RpcError::timeout("getReserves()", Duration::from_secs(3));
        assert_eq!(err.to_string(), "getReserves() timed out after 3s");
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_cancelled_is_detected() {
        assert!(RpcError::cancelled("eth_blockNumber").is_cancelled());
    }
}
