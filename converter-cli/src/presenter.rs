//! Terminal presenter: writes every rendering as a line of text.

use std::io::Write;

use converter_types::{AmountError, CurrencyCode, FlagId, Presenter, Slot, Status};

pub struct TerminalPresenter<W: Write> {
    out: W,
    verbose: bool,
}

impl TerminalPresenter<std::io::Stdout> {
    /// Prints selections and status changes as they happen.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), true)
    }

    /// Prints nothing; the caller reports the final outcome.
    pub fn quiet() -> Self {
        Self::new(std::io::stdout(), false)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if self.verbose {
            let _ = writeln!(self.out, "{}", text);
            let _ = self.out.flush();
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_options(&mut self, codes: &[CurrencyCode]) {
        self.line(format_args!("{} currencies available", codes.len()));
    }

    fn render_selection(&mut self, slot: Slot, code: CurrencyCode, flag: FlagId) {
        self.line(format_args!("{:>4}: {} [{}]", slot, code, flag));
    }

    fn render_pending(&mut self, _pending: bool) {}

    fn render_status(&mut self, status: &Status) {
        if *status != Status::Idle {
            self.line(format_args!("{}", status));
        }
    }

    fn render_invalid_amount(&mut self, error: &AmountError) {
        self.line(format_args!("{} ({})", AmountError::NOTICE, error));
    }
}
