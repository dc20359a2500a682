//! Conversion Controller
//!
//! Mediates between user input and the rate provider. Owns the entered
//! state, the pending indicator, the debounce timer and the token of the
//! latest issued request. Contains NO infrastructure logic; the provider
//! and the presenter are injected through their ports.
//!
//! All mutation happens on the task that owns the controller. Rate
//! requests and the debounce timer run as spawned tasks that report back
//! over an internal channel, so methods that start them must be called
//! from within a Tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use converter_types::{
    Amount, ConversionError, ConversionResult, ConversionState, CurrencyCode, Presenter,
    RateFetchError, RateProvider, RateTable, Slot, Status,
};

use crate::debounce::Debouncer;
use crate::events::{Input, Internal, RequestToken};

/// Tunables for a controller instance.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Quiet period after the last amount edit before re-converting.
    pub debounce_window: Duration,
    pub default_source: CurrencyCode,
    pub default_target: CurrencyCode,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(1000),
            default_source: CurrencyCode::USD,
            default_target: CurrencyCode::INR,
        }
    }
}

/// What one internal event did to the controller.
#[derive(Debug)]
pub enum Step {
    /// The latest request finished; the status now reflects this outcome.
    Completed(Result<ConversionResult, ConversionError>),
    /// A superseded request finished and was ignored.
    Discarded(RequestToken),
    /// The debounce window elapsed and a conversion was requested.
    Debounced(Result<RequestToken, ConversionError>),
    /// A timer firing that had already been cancelled.
    Ignored,
}

/// The request currently allowed to update state, with the inputs it was
/// issued for.
#[derive(Debug)]
struct InFlight {
    token: RequestToken,
    source: CurrencyCode,
    target: CurrencyCode,
    amount: Amount,
}

/// Application service for the converter screen.
///
/// Generic over `R: RateProvider` and `V: Presenter` - the adapters are
/// injected at construction.
pub struct ConversionController<R: RateProvider, V: Presenter> {
    provider: Arc<R>,
    presenter: V,
    settings: ControllerSettings,
    state: ConversionState,
    status: Status,
    latest: RequestToken,
    in_flight: Option<InFlight>,
    debounce: Debouncer,
    events_tx: UnboundedSender<Internal>,
    events_rx: UnboundedReceiver<Internal>,
}

impl<R: RateProvider, V: Presenter> ConversionController<R, V> {
    /// Creates a controller. Nothing is rendered until [`initialize`](Self::initialize).
    pub fn new(provider: Arc<R>, presenter: V, settings: ControllerSettings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            provider,
            presenter,
            state: ConversionState::new(settings.default_source, settings.default_target),
            status: Status::Idle,
            latest: RequestToken::default(),
            in_flight: None,
            debounce: Debouncer::new(settings.debounce_window),
            settings,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> &ConversionState {
        &self.state
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn presenter(&self) -> &V {
        &self.presenter
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// True while a request is in flight or an edit is waiting out the
    /// debounce window.
    pub fn is_busy(&self) -> bool {
        self.is_pending() || self.debounce.is_armed()
    }

    /// Token of the most recently issued request, if any was issued.
    pub fn latest_token(&self) -> Option<RequestToken> {
        (self.latest != RequestToken::default()).then_some(self.latest)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // User Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Populates both selectors and applies the default selections.
    pub fn initialize(&mut self) {
        self.presenter.render_options(CurrencyCode::all());
        self.state.source = self.settings.default_source;
        self.state.target = self.settings.default_target;
        self.render_selection(Slot::Source);
        self.render_selection(Slot::Target);
    }

    pub fn set_currency(&mut self, slot: Slot, code: CurrencyCode) {
        self.state.set_currency(slot, code);
        self.render_selection(slot);
    }

    /// Stores the entered text.
    ///
    /// While a result is on screen, a valid edit (re)arms the debounce
    /// timer; anything else cancels it. Never fetches directly.
    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.state.amount_raw = raw.into();

        if self.status.shows_result() && self.state.amount().is_ok() {
            tracing::debug!(amount = %self.state.amount_raw, "amount edited, debounce armed");
            self.debounce.arm(&self.events_tx);
        } else {
            self.debounce.cancel();
        }
    }

    /// Validates the amount and issues a rate request for the source
    /// currency, superseding any request still in flight.
    ///
    /// An invalid amount is reported to the presenter and returned as
    /// [`ConversionError::Validation`]; no request is issued and nothing
    /// else changes.
    pub fn request_conversion(&mut self) -> Result<RequestToken, ConversionError> {
        self.debounce.cancel();

        let amount = match self.state.amount() {
            Ok(amount) => amount,
            Err(err) => {
                tracing::debug!(amount = %self.state.amount_raw, error = %err, "conversion rejected");
                self.presenter.render_invalid_amount(&err);
                return Err(err.into());
            }
        };

        let token = self.latest.next();
        self.latest = token;
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(superseded = %previous.token, by = %token, "request superseded");
        }

        let base = self.state.source;
        self.in_flight = Some(InFlight {
            token,
            source: base,
            target: self.state.target,
            amount,
        });
        self.presenter.render_pending(true);
        self.set_status(Status::Pending);

        tracing::debug!(%token, %base, target = %self.state.target, "requesting rates");
        let provider = Arc::clone(&self.provider);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = provider.latest_rates(base).await;
            let _ = events.send(Internal::RatesArrived { token, outcome });
        });

        Ok(token)
    }

    /// Exchanges source and target. Converts right away if the entered
    /// amount is valid.
    pub fn swap(&mut self) -> Option<RequestToken> {
        self.state.swap();
        self.render_selection(Slot::Source);
        self.render_selection(Slot::Target);

        if self.state.amount().is_ok() {
            self.request_conversion().ok()
        } else {
            None
        }
    }

    /// Applies one user input.
    ///
    /// Returns the outcome of the conversion request the input issued, or
    /// `None` when it issued none.
    pub fn dispatch(&mut self, input: Input) -> Option<Result<RequestToken, ConversionError>> {
        match input {
            Input::Initialize => {
                self.initialize();
                None
            }
            Input::SelectCurrency { slot, code } => {
                self.set_currency(slot, code);
                None
            }
            Input::EditAmount(raw) => {
                self.set_amount(raw);
                None
            }
            Input::Submit => Some(self.request_conversion()),
            Input::Swap => self.swap().map(Ok),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Event Loop
    // ─────────────────────────────────────────────────────────────────────────────

    /// Waits for the next internal event and applies it.
    ///
    /// With nothing in flight and no timer armed this waits forever; use
    /// [`settle`](Self::settle) to drain outstanding work.
    pub async fn step(&mut self) -> Step {
        // The controller keeps its own sender, so the channel never closes.
        let Some(event) = self.events_rx.recv().await else {
            unreachable!("controller event channel closed while the controller holds a sender");
        };
        self.handle_internal(event)
    }

    /// Processes internal events until no request is in flight and no
    /// debounce timer is armed.
    ///
    /// Returns the outcome of the last request that was applied, if any.
    pub async fn settle(&mut self) -> Option<Result<ConversionResult, ConversionError>> {
        let mut last = None;
        while self.is_busy() {
            if let Step::Completed(outcome) = self.step().await {
                last = Some(outcome);
            }
        }
        last
    }

    /// Runs the controller until `inputs` closes, then settles outstanding
    /// work and hands the controller back.
    pub async fn run(mut self, mut inputs: UnboundedReceiver<Input>) -> Self {
        loop {
            tokio::select! {
                input = inputs.recv() => match input {
                    Some(input) => {
                        if let Some(Err(err)) = self.dispatch(input) {
                            tracing::debug!(error = %err, "input did not start a conversion");
                        }
                    }
                    None => break,
                },
                Some(event) = self.events_rx.recv() => {
                    self.handle_internal(event);
                }
            }
        }

        self.settle().await;
        self
    }

    fn handle_internal(&mut self, event: Internal) -> Step {
        match event {
            Internal::RatesArrived { token, outcome } => self.complete(token, outcome),
            Internal::DebounceElapsed { generation } => {
                if self.debounce.fire(generation) {
                    tracing::debug!("debounce window elapsed");
                    Step::Debounced(self.request_conversion())
                } else {
                    Step::Ignored
                }
            }
        }
    }

    fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<RateTable, RateFetchError>,
    ) -> Step {
        let request = match self.in_flight.take() {
            Some(request) if request.token == token => request,
            other => {
                self.in_flight = other;
                tracing::debug!(%token, latest = %self.latest, "discarding stale response");
                return Step::Discarded(token);
            }
        };

        self.presenter.render_pending(false);

        let result = outcome
            .map_err(ConversionError::from)
            .and_then(|table| {
                let rate = table
                    .rate_for(request.target)
                    .ok_or(ConversionError::UnknownTargetRate {
                        base: request.source,
                        target: request.target,
                    })?;
                ConversionResult::compute(request.source, request.target, request.amount, rate)
                    .ok_or_else(|| {
                        RateFetchError::Malformed(format!("rate {} out of range", rate)).into()
                    })
            });

        match &result {
            Ok(converted) => {
                tracing::debug!(%token, result = %converted, "conversion complete");
                self.state.last_result = Some(converted.clone());
                self.set_status(Status::Converted(converted.clone()));
            }
            Err(err) => {
                tracing::warn!(%token, error = %err, "error fetching exchange rate");
                self.set_status(Status::Failed);
            }
        }

        Step::Completed(result)
    }

    fn render_selection(&mut self, slot: Slot) {
        let code = self.state.currency(slot);
        self.presenter.render_selection(slot, code, code.flag());
    }

    fn set_status(&mut self, status: Status) {
        self.presenter.render_status(&status);
        self.status = status;
    }
}
