//! Error types for the pairscan library.
//!
//! This module provides strongly-typed errors for all public APIs in pairscan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`DecodeError`],
//!   [`EstablishError`], [`CallError`])
//! - **Unified error type** ([`PairscanError`]) for convenience when you don't
//!   need to distinguish between error sources
//!
//! [`RpcError`] provides the shared variants for node operations.
//!
//! Two policies coexist and both are deliberate:
//!
//! - The metadata aggregator never returns an error. A [`CallError`] for one
//!   field is logged and replaced by that field's default.
//! - Opening a transfer stream returns [`EstablishError`] when the subscription
//!   cannot be set up. After that the stream only ever *ends*.
//!
//! # Examples
//!
//! ```rust,ignore
//! use pairscan::provider::NodeClient;
//! use pairscan::{PairscanError, Screener};
//! use tokio_util::sync::CancellationToken;
//!
//! async fn tail(screener: &Screener<NodeClient, NodeClient>) -> Result<(), PairscanError> {
//!     let cancel = CancellationToken::new();
//!     // EstablishError converts into PairscanError via `?`
//!     let mut stream = screener.open_pair_stream(pair, &cancel).await?;
//!     while let Some(tx) = stream.next().await {
//!         println!("{}", tx.hash);
//!     }
//!     Ok(())
//! }
//! ```

mod decode;
mod rpc;
mod stream;

pub use decode::DecodeError;
pub use rpc::RpcError;
pub use stream::EstablishError;

/// Failure of a single typed contract read.
///
/// Either the node call itself failed, or it returned bytes that do not
/// decode to the expected type.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The node call failed, timed out or was cancelled.
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The returned payload was empty or malformed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Unified error type for all pairscan operations.
///
/// All module-specific error types convert into `PairscanError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum PairscanError {
    /// Error from a node operation.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error decoding contract or log data.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error from a typed contract read.
    #[error("Contract call error: {0}")]
    Call(#[from] CallError),

    /// Error opening a transfer stream.
    #[error("Stream error: {0}")]
    Establish(#[from] EstablishError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::Address;

    #[test]
    fn test_establish_error_converts_to_unified() {
        let err: PairscanError = EstablishError::Cancelled {
            target: Address::ZERO,
        }
        .into();
        assert!(matches!(err, PairscanError::Establish(_)));
        assert!(err.to_string().starts_with("Stream error"));
    }

    #[test]
    fn test_call_error_is_transparent() {
        let err: CallError = DecodeError::empty_payload("name()").into();
        assert_eq!(err.to_string(), "Empty return payload for name()");
    }
}
