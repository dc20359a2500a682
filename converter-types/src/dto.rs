//! Data Transfer Objects (DTOs) for the rate provider's payload.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::CurrencyCode;
use crate::domain::RateTable;
use crate::ports::RateFetchError;

// ─────────────────────────────────────────────────────────────────────────────
// Latest rates
// ─────────────────────────────────────────────────────────────────────────────

/// Body of `GET /latest/{base}`.
///
/// Extra fields the provider sends (`provider`, `terms`, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    /// Base currency code the rates are quoted against
    pub base: String,
    /// Day the rates were published
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Units of each currency bought by one unit of `base`
    pub rates: HashMap<String, Decimal>,
}

impl RatesResponse {
    /// Checks the payload answers the question asked and converts it.
    pub fn into_table(self, requested: CurrencyCode) -> Result<RateTable, RateFetchError> {
        let base: CurrencyCode = self.base.parse().map_err(|_| {
            RateFetchError::Malformed(format!("unknown base currency {}", self.base))
        })?;
        if base != requested {
            return Err(RateFetchError::Malformed(format!(
                "asked for {} rates, got {}",
                requested, base
            )));
        }

        let mut table = RateTable::new(base, self.rates);
        if let Some(date) = self.date {
            table = table.with_date(date);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"{
        "provider": "https://www.exchangerate-api.com",
        "base": "USD",
        "date": "2024-03-01",
        "time_last_updated": 1709251201,
        "rates": { "USD": 1, "INR": 82.9, "EUR": 0.924 }
    }"#;

    #[test]
    fn test_decode_provider_payload() {
        let resp: RatesResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resp.base, "USD");
        assert_eq!(resp.rates.get("INR"), Some(&dec!(82.9)));
        assert_eq!(resp.rates.get("EUR"), Some(&dec!(0.924)));
    }

    #[test]
    fn test_into_table() {
        let resp: RatesResponse = serde_json::from_str(SAMPLE).unwrap();
        let table = resp.into_table(CurrencyCode::USD).unwrap();
        assert_eq!(table.base, CurrencyCode::USD);
        assert_eq!(table.as_of, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(table.rate_for(CurrencyCode::INR), Some(dec!(82.9)));
    }

    #[test]
    fn test_base_mismatch_is_malformed() {
        let resp: RatesResponse = serde_json::from_str(SAMPLE).unwrap();
        let err = resp.into_table(CurrencyCode::EUR).unwrap_err();
        assert!(matches!(err, RateFetchError::Malformed(_)));
    }

    #[test]
    fn test_missing_date_is_allowed() {
        let resp: RatesResponse =
            serde_json::from_str(r#"{"base": "GBP", "rates": {"USD": 1.27}}"#).unwrap();
        let table = resp.into_table(CurrencyCode::GBP).unwrap();
        assert_eq!(table.as_of, None);
    }

    #[test]
    fn test_missing_rates_fails_to_decode() {
        let result = serde_json::from_str::<RatesResponse>(r#"{"base": "USD"}"#);
        assert!(result.is_err());
    }
}
