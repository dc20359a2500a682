//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::CurrencyCode;
use crate::domain::RateTable;

/// Error type for rate provider operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateFetchError {
    #[error("Rate service unreachable: {0}")]
    Transport(String),

    #[error("Rate service responded with status {0}")]
    Status(u16),

    #[error("Malformed rate payload: {0}")]
    Malformed(String),
}

/// Port trait for exchange rate providers.
///
/// One call is one attempt; retrying is left to the user.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the current rates for `base`.
    async fn latest_rates(&self, base: CurrencyCode) -> Result<RateTable, RateFetchError>;
}
