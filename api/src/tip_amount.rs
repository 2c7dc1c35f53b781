//! A small fixed-point type for the tip amounts offered in the tipping modal.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// An error that can occur when parsing a string into a `TipAmount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseTipAmountError {
    #[error("tip amount is empty")]
    Empty,
    /// The string is not a plain non-negative decimal (e.g., "abc", "1.2.3", "-4").
    #[error("invalid tip amount format")]
    InvalidFormat,
    #[error("too many decimal places for a tip amount")]
    TooManyDecimals,
    #[error("tip amount must be greater than zero")]
    Zero,
}

/// A positive tip, stored in minor units to avoid floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TipAmount(u64);

impl TipAmount {
    /// Number of decimal places a tip can carry.
    pub const DECIMALS: u32 = 2;

    const MULTIPLIER: u64 = 10_u64.pow(Self::DECIMALS);

    /// Creates a tip from whole units, e.g. `TipAmount::from_whole(5)` is "5.00".
    pub fn from_whole(units: u64) -> Option<Self> {
        units
            .checked_mul(Self::MULTIPLIER)
            .filter(|minor| *minor > 0)
            .map(Self)
    }

    pub fn from_minor(minor: u64) -> Option<Self> {
        (minor > 0).then_some(Self(minor))
    }

    pub fn as_minor_units(&self) -> u64 {
        self.0
    }

    /// Formats the amount followed by a currency ticker (e.g., "5.00 NPT").
    pub fn to_string_with_ticker(&self, ticker: &str) -> String {
        format!("{} {}", self, ticker)
    }
}

impl FromStr for TipAmount {
    type Err = ParseTipAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseTipAmountError::Empty);
        }

        let (major_str, minor_str) = match s.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (s, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major_str)
            || !all_digits(minor_str)
            || (major_str.is_empty() && minor_str.is_empty())
        {
            return Err(ParseTipAmountError::InvalidFormat);
        }

        if minor_str.len() > Self::DECIMALS as usize {
            return Err(ParseTipAmountError::TooManyDecimals);
        }

        let major_units = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse::<u64>()
                .map_err(|_| ParseTipAmountError::InvalidFormat)?
        };

        let minor_units = if minor_str.is_empty() {
            0
        } else {
            minor_str
                .parse::<u64>()
                .map_err(|_| ParseTipAmountError::InvalidFormat)?
        };

        let scaling_factor = 10_u64.pow(Self::DECIMALS - minor_str.len() as u32);
        let total = major_units
            .checked_mul(Self::MULTIPLIER)
            .and_then(|major| major.checked_add(minor_units * scaling_factor))
            .ok_or(ParseTipAmountError::InvalidFormat)?;

        Self::from_minor(total).ok_or(ParseTipAmountError::Zero)
    }
}

impl fmt::Display for TipAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0width$}",
            self.0 / Self::MULTIPLIER,
            self.0 % Self::MULTIPLIER,
            width = Self::DECIMALS as usize
        )
    }
}
