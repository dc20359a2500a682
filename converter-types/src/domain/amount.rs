//! Validated amount entered by the user.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::AmountError;

/// Largest amount accepted for conversion (10^15).
///
/// `Decimal` holds 28 significant digits. Capping the amount at 16 integer
/// digits leaves room for rates up to 10^12 and for the two decimals of
/// the rounded result. Larger input is reported as
/// [`AmountError::OutOfRange`] instead of failing after the fetch.
const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// A positive, finite amount together with the text it was parsed from.
///
/// The text is kept so results echo the amount exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    raw: String,
    value: Decimal,
}

impl Amount {
    /// Parses user input into an amount.
    ///
    /// Accepts plain decimals (`"10"`, `"0.5"`) and scientific notation
    /// (`"1e3"`). Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, AmountError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Missing);
        }
        if !is_numeric_text(trimmed) {
            return Err(AmountError::NotANumber(trimmed.to_string()));
        }

        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;

        if value.is_zero() && !trimmed.starts_with('-') && has_nonzero_digit(trimmed) {
            // Positive input below Decimal's smallest step rounds to zero.
            return Err(AmountError::OutOfRange);
        }
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        if value > Decimal::from(MAX_AMOUNT) {
            return Err(AmountError::OutOfRange);
        }

        Ok(Self {
            raw: trimmed.to_string(),
            value,
        })
    }

    /// Returns the text as entered (trimmed).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the numeric value.
    pub fn value(&self) -> Decimal {
        self.value
    }
}

/// Digits, one optional sign, a decimal point and an exponent marker only.
/// `Decimal::from_str` on its own also takes `_` digit separators.
fn is_numeric_text(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}

/// True when the mantissa (the part before any exponent) has a digit 1-9.
fn has_nonzero_digit(text: &str) -> bool {
    text.split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.chars().any(|c| matches!(c, '1'..='9')))
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
