//! Domain models for the currency converter.

pub mod amount;
pub mod conversion;
pub mod rates;
pub mod status;

pub use amount::Amount;
pub use conversion::{ConversionResult, ConversionState, Slot};
pub use rates::RateTable;
pub use status::Status;
