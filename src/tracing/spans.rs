//! Span creation helpers for pairscan operations.
//!
//! Telemetry is kept out of the business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here, attached
//! to the operation's future.
//!
//! Usage pattern:
//! ```rust,ignore
//! use tracing::Instrument;
//!
//! pub async fn my_operation(&self, param: Type) -> T {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param))
//!     .await
//! }
//! ```

use alloy_primitives::{Address, BlockNumber};
use tracing::{Level, Span};

/// Create span for a full metadata aggregation.
///
/// Parent: None (root span for this operation)
/// Children: fetch_token_info, swap_window (two, volume and tx count)
#[inline]
pub(crate) fn get_metadata(pair: Address) -> Span {
    tracing::span!(Level::INFO, "pairscan.get_metadata", pair = %pair)
}

/// Create span for the name/symbol/decimals cascade on the target token.
///
/// Parent: get_metadata span
#[inline]
pub(crate) fn fetch_token_info(token: Address) -> Span {
    tracing::debug_span!("pairscan.fetch_token_info", token = %token)
}

/// Create span for one historical Swap log query.
///
/// Parent: get_metadata span
#[inline]
pub(crate) fn swap_window(
    pair: Address,
    purpose: &'static str,
    from_block: BlockNumber,
    to_block: BlockNumber,
) -> Span {
    tracing::debug_span!(
        "pairscan.swap_window",
        pair = %pair,
        purpose = purpose,
        from_block = from_block,
        to_block = to_block,
    )
}

/// Create span for one live transfer session.
///
/// Covers the listener task from its first poll until it ends.
///
/// Parent: None (the listener runs on its own task)
#[inline]
pub(crate) fn transfer_session(target: Address) -> Span {
    tracing::span!(Level::INFO, "pairscan.transfer_session", token = %target)
}
