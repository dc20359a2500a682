//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The controller depends on these traits, not concrete implementations.

mod presenter;
mod rates;

pub use presenter::Presenter;
pub use rates::{RateFetchError, RateProvider};
