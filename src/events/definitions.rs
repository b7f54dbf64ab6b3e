//! Event definitions used by the live transfer feed
//!
//! # Event Signatures
//!
//! - **Transfer**: `Transfer(address,address,uint256)`
//!
//! The pair's `Swap` event lives with the rest of the pair interface in
//! [`crate::abi::pair`].
//!
//! # Example: Building a subscription filter
//!
//! The `sol!` macro generates `SIGNATURE` (string) and `SIGNATURE_HASH` (B256)
//! constants for each event:
//!
//! ```rust
//! use pairscan::Transfer;
//! use alloy_rpc_types::Filter;
//! use alloy_sol_types::SolEvent;
//! use alloy_primitives::address;
//!
//! let token = address!("e0f63a424a4439cbe457d80e4f4b51ad25b2c56c");
//! let filter = Filter::new()
//!     .event_signature(Transfer::SIGNATURE_HASH)
//!     .address(token);
//!
//! assert_eq!(Transfer::SIGNATURE, "Transfer(address,address,uint256)");
//! ```

use std::fmt::Debug;

use alloy_sol_types::sol;

sol! {
    /// ERC-20 Transfer event
    ///
    /// Emitted for every movement of tokens, including mints (`from` is the
    /// zero address) and burns (`to` is the zero address).
    ///
    /// # Fields
    ///
    /// - `from`: sender (indexed)
    /// - `to`: recipient (indexed)
    /// - `value`: raw amount, not adjusted for decimals
    event Transfer(address indexed from, address indexed to, uint256 value);
}

impl Debug for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Transfer(from: {}, to: {}, value: {})",
            self.from, self.to, self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{b256, Address, U256};
    use alloy_sol_types::SolEvent;

    #[test]
    fn test_transfer_topic() {
        assert_eq!(
            Transfer::SIGNATURE_HASH,
            b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
    }

    #[test]
    fn test_debug_format() {
        let transfer = Transfer {
            from: Address::ZERO,
            to: Address::ZERO,
            value: U256::from(7u64),
        };
        assert!(format!("{transfer:?}").contains("value: 7"));
    }
}
