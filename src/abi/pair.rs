// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Uniswap V2 pair interface
//!
//! Besides the `sol!` bindings this module provides two typed views:
//!
//! - [`Reserves`]: the `getReserves()` tuple with both reserves widened to
//!   `U256`
//! - [`SwapAmounts`]: the four non-indexed amounts carried in a `Swap` log's
//!   data section

use alloy_primitives::U256;
use alloy_sol_types::sol;
use bigdecimal::BigDecimal;

use crate::errors::DecodeError;
use crate::format::u256_to_bigdecimal;

sol! {
    /// Read-only subset of the Uniswap V2 pair contract
    #[derive(Debug)]
    interface IUniswapV2Pair {
        function token0() external view returns (address);
        function token1() external view returns (address);
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);

        event Swap(
            address indexed sender,
            uint256 amount0In,
            uint256 amount1In,
            uint256 amount0Out,
            uint256 amount1Out,
            address indexed to
        );
    }
}

/// Size of one ABI word
const WORD: usize = 32;

/// Bytes needed for the four swap amounts
pub const SWAP_DATA_LEN: usize = 4 * WORD;

/// Current pair reserves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reserves {
    pub reserve0: U256,
    pub reserve1: U256,
    /// Timestamp of the last block in which the reserves changed
    pub block_timestamp_last: u32,
}

impl From<IUniswapV2Pair::getReservesReturn> for Reserves {
    fn from(ret: IUniswapV2Pair::getReservesReturn) -> Self {
        Self {
            reserve0: U256::from(ret.reserve0),
            reserve1: U256::from(ret.reserve1),
            block_timestamp_last: ret.blockTimestampLast,
        }
    }
}

/// The amounts moved by a single swap, in raw units of each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapAmounts {
    pub amount0_in: U256,
    pub amount1_in: U256,
    pub amount0_out: U256,
    pub amount1_out: U256,
}

impl SwapAmounts {
    /// Read the four amount words from a `Swap` log's data section
    ///
    /// Trailing bytes beyond the fourth word are ignored.
    ///
    /// # Errors
    ///
    /// [`DecodeError::ShortLogData`] when fewer than [`SWAP_DATA_LEN`] bytes
    /// are present.
    pub fn from_log_data(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < SWAP_DATA_LEN {
            return Err(DecodeError::ShortLogData {
                expected: SWAP_DATA_LEN,
                actual: data.len(),
            });
        }

        let word = |i: usize| U256::from_be_slice(&data[i * WORD..(i + 1) * WORD]);

        Ok(Self {
            amount0_in: word(0),
            amount1_in: word(1),
            amount0_out: word(2),
            amount1_out: word(3),
        })
    }

    /// Sum of all four amounts
    ///
    /// Mixes the units of both sides of the pair, matching how the volume
    /// figure is reported.
    pub fn total(&self) -> BigDecimal {
        [
            self.amount0_in,
            self.amount1_in,
            self.amount0_out,
            self.amount1_out,
        ]
        .into_iter()
        .map(u256_to_bigdecimal)
        .fold(BigDecimal::from(0), |acc, amount| acc + amount)
    }
}
