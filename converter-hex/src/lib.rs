//! # Converter Hex
//!
//! Application service for the currency converter.
//!
//! ## Architecture
//!
//! - `controller/` - ConversionController (owns state, drives fetch-and-render)
//! - `events/` - Inputs accepted from the presentation layer and internal events
//! - `debounce/` - Trailing-edge timer for amount edits
//!
//! The controller is generic over `R: RateProvider` and `V: Presenter`,
//! allowing different adapters to be injected.

pub mod controller;
mod debounce;
pub mod events;


pub use controller::{ControllerSettings, ConversionController, Step};
pub use events::{Input, RequestToken};
