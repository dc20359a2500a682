//! # Converter Types
//!
//! Domain types and port traits for the currency converter.
//! This crate has ZERO external IO dependencies - only data structures,
//! conversion rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Amount, ConversionState, ConversionResult, RateTable)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Wire shapes of the rate provider's payload
//! - `error/` - Validation and conversion error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use currencies::{CurrencyCode, FlagId, UnknownCurrency};
pub use domain::{Amount, ConversionResult, ConversionState, RateTable, Slot, Status};
pub use dto::RatesResponse;
pub use error::{AmountError, ConversionError};
pub use ports::{Presenter, RateFetchError, RateProvider};
