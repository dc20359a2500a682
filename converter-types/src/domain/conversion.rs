//! Conversion state and result.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use crate::error::AmountError;
use crate::CurrencyCode;

/// Which of the two currency selectors an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Source,
    Target,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Source => f.pad("from"),
            Slot::Target => f.pad("to"),
        }
    }
}

/// Everything the user has entered, plus the last successful result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionState {
    pub source: CurrencyCode,
    pub target: CurrencyCode,
    pub amount_raw: String,
    pub last_result: Option<ConversionResult>,
}

impl ConversionState {
    pub fn new(source: CurrencyCode, target: CurrencyCode) -> Self {
        Self {
            source,
            target,
            amount_raw: String::new(),
            last_result: None,
        }
    }

    pub fn currency(&self, slot: Slot) -> CurrencyCode {
        match slot {
            Slot::Source => self.source,
            Slot::Target => self.target,
        }
    }

    pub fn set_currency(&mut self, slot: Slot, code: CurrencyCode) {
        match slot {
            Slot::Source => self.source = code,
            Slot::Target => self.target = code,
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    /// Parses the currently entered amount.
    pub fn amount(&self) -> Result<Amount, AmountError> {
        Amount::parse(&self.amount_raw)
    }
}

/// Outcome of one successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    source: CurrencyCode,
    target: CurrencyCode,
    amount: Amount,
    rate: Decimal,
    converted: Decimal,
}

impl ConversionResult {
    /// Applies `rate` to `amount`, rounding to two places with midpoints
    /// going away from zero.
    ///
    /// Returns `None` if the product does not fit in a `Decimal`.
    pub fn compute(
        source: CurrencyCode,
        target: CurrencyCode,
        amount: Amount,
        rate: Decimal,
    ) -> Option<Self> {
        let converted = amount
            .value()
            .checked_mul(rate)?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Some(Self {
            source,
            target,
            amount,
            rate,
            converted,
        })
    }

    pub fn source(&self) -> CurrencyCode {
        self.source
    }

    pub fn target(&self) -> CurrencyCode {
        self.target
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn converted(&self) -> Decimal {
        self.converted
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {:.2} {}",
            self.amount, self.source, self.converted, self.target
        )
    }
}
