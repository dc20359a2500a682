//! Presentation port.
//!
//! Whatever shows the converter to a user (a terminal, a GUI, a test
//! recorder) implements this trait. The controller pushes every visible
//! change through it and never reads anything back.

use crate::domain::{Slot, Status};
use crate::error::AmountError;
use crate::{CurrencyCode, FlagId};

pub trait Presenter {
    /// Replaces the options of both selectors, in display order.
    fn render_options(&mut self, codes: &[CurrencyCode]);

    /// Shows the selection of one slot together with its flag.
    fn render_selection(&mut self, slot: Slot, code: CurrencyCode, flag: FlagId);

    /// Turns the loading affordance on or off.
    fn render_pending(&mut self, pending: bool);

    fn render_status(&mut self, status: &Status);

    /// Tells the user the entered amount cannot be converted.
    ///
    /// This is a transient notice; the status line is left as it was.
    fn render_invalid_amount(&mut self, error: &AmountError);
}
