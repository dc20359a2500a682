//! Events flowing into the controller.

use std::fmt;

use converter_types::{CurrencyCode, RateFetchError, RateTable, Slot};

/// User actions the presentation layer forwards to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Initialize,
    SelectCurrency { slot: Slot, code: CurrencyCode },
    EditAmount(String),
    Submit,
    Swap,
}

/// Identifies one issued rate request.
///
/// Tokens increase strictly; only the most recent one may change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Completions reported back to the controller by its own tasks.
#[derive(Debug)]
pub(crate) enum Internal {
    RatesArrived {
        token: RequestToken,
        outcome: Result<RateTable, RateFetchError>,
    },
    DebounceElapsed {
        generation: u64,
    },
}
