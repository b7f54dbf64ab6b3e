// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric and time formatting helpers
//!
//! Raw on-chain amounts are `U256` values in a token's smallest unit. This
//! module converts them into [`BigDecimal`] without loss, applies exact
//! power-of-ten scaling, and renders the result for humans.
//!
//! # Examples
//!
//! ```rust
//! use pairscan::format::{abbreviate, format_decimal, shorten_number, to_quote_units};
//! use alloy_primitives::U256;
//!
//! // 1.5 ETH expressed in wei
//! let pooled = to_quote_units(U256::from(1_500_000_000_000_000_000u128), 18);
//! assert_eq!(format_decimal(&pooled, 4), "1.5000");
//!
//! assert_eq!(shorten_number("2500000"), "2.50M");
//! assert_eq!(abbreviate(&pooled), "1.50");
//! ```

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::{BigDecimal, RoundingMode};
use chrono::DateTime;

const ONE_THOUSAND: f64 = 1e3;
const ONE_MILLION: f64 = 1e6;
const ONE_BILLION: f64 = 1e9;

/// Convert a raw `U256` amount into a `BigDecimal` without loss of precision
pub fn u256_to_bigdecimal(value: U256) -> BigDecimal {
    // A U256 always prints as a plain base-10 integer
    BigDecimal::from_str(&value.to_string()).unwrap_or_else(|_| BigDecimal::from(0))
}

/// Multiply `value` by `10^-decimals`
///
/// The result is exact: no rounding takes place, only the decimal exponent
/// moves. Consequently `scale_down(x, d) * 10^d == x` for every `x` and `d`.
pub fn scale_down(value: &BigDecimal, decimals: u8) -> BigDecimal {
    value * &BigDecimal::new(1.into(), i64::from(decimals))
}

/// Express a raw quote-asset amount in whole units
///
/// With 18 decimals this turns wei into ether.
pub fn to_quote_units(raw: U256, decimals: u8) -> BigDecimal {
    scale_down(&u256_to_bigdecimal(raw), decimals)
}

/// Abbreviate a decimal with a magnitude suffix and two fractional digits
///
/// Values of at least one billion use `B`, one million `M`, one thousand `k`;
/// anything smaller is printed as is.
pub fn abbreviate(value: &BigDecimal) -> String {
    shorten_number(&value.to_string())
}

/// Abbreviate a number given as text
///
/// Text that does not parse as a number renders as `"0.00"`.
///
/// ```rust
/// use pairscan::format::shorten_number;
///
/// assert_eq!(shorten_number("1000"), "1.00k");
/// assert_eq!(shorten_number("999"), "999.00");
/// assert_eq!(shorten_number("3000000000"), "3.00B");
/// assert_eq!(shorten_number("not a number"), "0.00");
/// ```
pub fn shorten_number(raw: &str) -> String {
    let value = raw.trim().parse::<f64>().unwrap_or(0.0);
    let value = if value.is_finite() { value } else { 0.0 };

    if value >= ONE_BILLION {
        format!("{:.2}B", value / ONE_BILLION)
    } else if value >= ONE_MILLION {
        format!("{:.2}M", value / ONE_MILLION)
    } else if value >= ONE_THOUSAND {
        format!("{:.2}k", value / ONE_THOUSAND)
    } else {
        format!("{value:.2}")
    }
}

/// Render a decimal in fixed-point notation with `precision` fractional digits
///
/// Rounds half to even. Never switches to exponent notation, however large or
/// small the value.
pub fn format_decimal(value: &BigDecimal, precision: u32) -> String {
    let scale = i64::from(precision);
    let rounded = value.with_scale_round(scale, RoundingMode::HalfEven);
    let (digits, _) = rounded.as_bigint_and_exponent();
    let digits = digits.to_string();

    let (negative, digits) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.as_str()),
    };

    let precision = precision as usize;
    let padded = format!("{digits:0>width$}", width = precision + 1);
    let (whole, fraction) = padded.split_at(padded.len() - precision);

    let mut out = String::with_capacity(padded.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(whole);
    if precision > 0 {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Render a Unix timestamp as a 12-hour UTC clock time, e.g. `"3:04 PM"`
pub fn format_time_of_day(unix_secs: i64) -> String {
    DateTime::from_timestamp(unix_secs, 0)
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}

/// Shorten a transaction hash to its first six and last four characters
///
/// Hashes too short to shorten are returned unchanged.
pub fn short_hash(hash: &str) -> String {
    let chars: Vec<char> = hash.chars().collect();
    if chars.len() <= 10 {
        return hash.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
