//! Error types for the currency converter.

use crate::CurrencyCode;
use crate::ports::RateFetchError;

/// Why an entered amount cannot be converted.
///
/// Every variant is shown to the user as the same notice,
/// [`AmountError::NOTICE`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount is required")]
    Missing,

    #[error("Amount is not a number: {0}")]
    NotANumber(String),

    #[error("Amount must be positive")]
    NotPositive,

    /// Positive, but too large or too small to convert exactly.
    #[error("Amount is outside the supported range")]
    OutOfRange,
}

impl AmountError {
    pub const NOTICE: &'static str = "Please enter a valid amount";
}

/// Failure of a conversion cycle.
///
/// None of these are fatal; the controller returns to idle after each.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Validation error: {0}")]
    Validation(#[from] AmountError),

    #[error(transparent)]
    RateFetch(#[from] RateFetchError),

    #[error("Rate not available for {base} -> {target}")]
    UnknownTargetRate {
        base: CurrencyCode,
        target: CurrencyCode,
    },
}
