//! Exact decimal amounts at stroop precision.
//!
//! Horizon reports balances as decimal strings with seven fractional digits
//! (`"123.4500000"`). Going through `f64` would lose precision on large
//! balances, so amounts are kept as an integer number of stroops.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fractional digits carried by a Stellar amount.
pub const DECIMALS: u32 = 7;

/// Stroops per whole lumen.
pub const STROOPS_PER_UNIT: i64 = 10_000_000;

/// A decimal amount, stored as stroops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

/// Reasons a decimal string is not an amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("empty amount")]
    Empty,

    #[error("invalid character in amount: {0:?}")]
    InvalidDigit(String),

    #[error("more than 7 fractional digits")]
    TooPrecise,

    #[error("amount out of range")]
    Overflow,
}

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_stroops(stroops: i64) -> Self {
        Amount(stroops)
    }

    pub const fn stroops(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Render with exactly `places` fractional digits (at most seven),
    /// rounding half away from zero.
    pub fn to_fixed(&self, places: u32) -> String {
        let places = places.min(DECIMALS);
        let scale = 10u128.pow(DECIMALS - places);
        let magnitude = self.0.unsigned_abs() as u128;
        let rounded = (magnitude + scale / 2) / scale;

        let sign = if self.0 < 0 && rounded != 0 { "-" } else { "" };
        if places == 0 {
            return format!("{sign}{rounded}");
        }

        let unit = 10u128.pow(places);
        format!(
            "{sign}{}.{:0width$}",
            rounded / unit,
            rounded % unit,
            width = places as usize
        )
    }
}

impl fmt::Display for Amount {
    /// Full precision with trailing fractional zeros removed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let unit = STROOPS_PER_UNIT as u64;
        let whole = magnitude / unit;
        let frac = magnitude % unit;

        if self.0 < 0 {
            f.write_str("-")?;
        }
        if frac == 0 {
            return write!(f, "{whole}");
        }

        let digits = format!("{:07}", frac);
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err(ParseAmountError::Empty),
        };

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (unsigned, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseAmountError::Empty);
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(ParseAmountError::InvalidDigit(s.to_string()));
        }
        if frac_part.len() > DECIMALS as usize {
            return Err(ParseAmountError::TooPrecise);
        }

        let whole: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| ParseAmountError::Overflow)?
        };
        let frac: i64 = if frac_part.is_empty() {
            0
        } else {
            let padded = format!("{:0<7}", frac_part);
            padded.parse().map_err(|_| ParseAmountError::Overflow)?
        };

        let stroops = whole
            .checked_mul(STROOPS_PER_UNIT)
            .and_then(|w| w.checked_add(frac))
            .ok_or(ParseAmountError::Overflow)?;

        Ok(Amount(if negative { -stroops } else { stroops }))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
