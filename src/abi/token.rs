// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-20 metadata interface

use alloy_sol_types::sol;

sol! {
    /// The optional ERC-20 metadata extension plus `totalSupply`
    ///
    /// Many tokens implement these loosely (bytes32 names, missing
    /// `decimals`), so every call's failure is tolerated by the caller.
    #[derive(Debug)]
    interface IERC20Metadata {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_selectors() {
        assert_eq!(IERC20Metadata::nameCall::SELECTOR, [0x06, 0xfd, 0xde, 0x03]);
        assert_eq!(IERC20Metadata::symbolCall::SELECTOR, [0x95, 0xd8, 0x9b, 0x41]);
        assert_eq!(IERC20Metadata::decimalsCall::SELECTOR, [0x31, 0x3c, 0xe5, 0x67]);
        assert_eq!(
            IERC20Metadata::totalSupplyCall::SELECTOR,
            [0x18, 0x16, 0x0d, 0xdd]
        );
    }
}
