//! Trailing-edge debounce timer.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use crate::events::Internal;

/// At most one armed timer; arming again restarts the quiet period.
///
/// Each arm gets a new generation. A firing whose generation is not the
/// current one lost a race with `cancel`/`arm` and must be ignored.
pub(crate) struct Debouncer {
    window: Duration,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            timer: None,
        }
    }

    pub(crate) fn arm(&mut self, events: &UnboundedSender<Internal>) {
        self.cancel();
        let generation = self.generation;
        let deadline = Instant::now() + self.window;
        let events = events.clone();
        self.timer = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            let _ = events.send(Internal::DebounceElapsed { generation });
        }));
    }

    pub(crate) fn cancel(&mut self) {
        self.generation += 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Accepts a firing. Returns false for stale generations.
    pub(crate) fn fire(&mut self, generation: u64) -> bool {
        if self.timer.is_none() || generation != self.generation {
            return false;
        }
        self.timer = None;
        true
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
