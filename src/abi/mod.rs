// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed contract-call codec
//!
//! Every read the aggregator performs goes through a `sol!`-generated call
//! type. Encoding a call cannot fail; decoding returns a typed value or a
//! [`DecodeError`].
//!
//! - [`token`]: the ERC-20 metadata interface (`name`, `symbol`, `decimals`,
//!   `totalSupply`)
//! - [`pair`]: the Uniswap V2 pair interface (`token0`, `token1`,
//!   `getReserves`) and its `Swap` event
//!
//! # Examples
//!
//! ```rust
//! use pairscan::abi::{decode_return, encode_call, token::IERC20Metadata};
//! use alloy_sol_types::SolCall;
//!
//! let calldata = encode_call(&IERC20Metadata::decimalsCall {});
//! assert_eq!(&calldata[..], &IERC20Metadata::decimalsCall::SELECTOR[..]);
//!
//! // Non-compliant tokens often return nothing at all
//! assert!(decode_return::<IERC20Metadata::decimalsCall>(&[]).is_err());
//! ```

pub mod pair;
pub mod token;

use alloy_primitives::Bytes;
use alloy_sol_types::SolCall;

use crate::errors::DecodeError;

/// ABI-encode a call, selector included
pub fn encode_call<C: SolCall>(call: &C) -> Bytes {
    call.abi_encode().into()
}

/// Decode the return data of a call into its typed return value
///
/// # Errors
///
/// - [`DecodeError::EmptyPayload`] when the contract returned no bytes
/// - [`DecodeError::Abi`] when the bytes do not match the return type
pub fn decode_return<C: SolCall>(data: &[u8]) -> Result<C::Return, DecodeError> {
    if data.is_empty() {
        return Err(DecodeError::empty_payload(C::SIGNATURE));
    }
    C::abi_decode_returns(data).map_err(|e| DecodeError::abi(C::SIGNATURE, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::pair::IUniswapV2Pair;
    use crate::abi::token::IERC20Metadata;
    use alloy_primitives::{address, U256};
    use alloy_sol_types::SolValue;

    #[test]
    fn test_empty_payload_is_reported() {
        let err = decode_return::<IERC20Metadata::nameCall>(&[]).unwrap_err();
        assert!(matches!(err, DecodeError::EmptyPayload { method } if method == "name()"));
    }

    #[test]
    fn test_malformed_payload_is_reported() {
        let err = decode_return::<IERC20Metadata::totalSupplyCall>(&[0xde, 0xad]).unwrap_err();
        assert!(matches!(err, DecodeError::Abi { .. }));
    }

    #[test]
    fn test_decode_address_return() {
        let token = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
        let data = token.abi_encode();
        let decoded = decode_return::<IUniswapV2Pair::token0Call>(&data).unwrap();
        assert_eq!(decoded, token);
    }

    #[test]
    fn test_decode_string_and_uint_returns() {
        let name = "Wrapped Ether".to_string().abi_encode();
        assert_eq!(
            decode_return::<IERC20Metadata::nameCall>(&name).unwrap(),
            "Wrapped Ether"
        );

        let supply = U256::from(1_000_000u64).abi_encode();
        assert_eq!(
            decode_return::<IERC20Metadata::totalSupplyCall>(&supply).unwrap(),
            U256::from(1_000_000u64)
        );
    }

    #[test]
    fn test_encode_call_starts_with_selector() {
        let calldata = encode_call(&IUniswapV2Pair::getReservesCall {});
        assert_eq!(calldata.len(), 4);
        assert_eq!(&calldata[..], &IUniswapV2Pair::getReservesCall::SELECTOR[..]);
    }
}
