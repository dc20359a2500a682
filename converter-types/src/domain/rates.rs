//! Rate table returned by a rate provider.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::CurrencyCode;

/// Exchange rates for one base currency.
///
/// `rates[code]` is how many units of `code` one unit of `base` buys.
/// Keys are the provider's raw codes, which may include currencies
/// missing from the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pub base: CurrencyCode,
    pub as_of: Option<NaiveDate>,
    pub rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new(base: CurrencyCode, rates: HashMap<String, Decimal>) -> Self {
        Self {
            base,
            as_of: None,
            rates,
        }
    }

    pub fn with_date(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Looks up the rate to `target`.
    pub fn rate_for(&self, target: CurrencyCode) -> Option<Decimal> {
        self.rates.get(target.code()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_lookup() {
        let table = RateTable::new(
            CurrencyCode::USD,
            HashMap::from([("INR".to_string(), dec!(83.0)), ("USD".to_string(), dec!(1))]),
        );
        assert_eq!(table.rate_for(CurrencyCode::INR), Some(dec!(83.0)));
        assert_eq!(table.rate_for(CurrencyCode::EUR), None);
    }
}
