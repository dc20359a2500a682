//! What the status line currently shows.

use std::fmt;

use super::conversion::ConversionResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A rate request is in flight.
    Pending,
    Converted(ConversionResult),
    /// The provider could not supply a usable rate.
    Failed,
}

impl Status {
    /// True while a conversion result is on screen.
    pub fn shows_result(&self) -> bool {
        matches!(self, Status::Converted(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => Ok(()),
            Status::Pending => f.write_str("Getting exchange rate..."),
            Status::Converted(result) => write!(f, "{}", result),
            Status::Failed => f.write_str("Error getting exchange rate. Please try again."),
        }
    }
}
