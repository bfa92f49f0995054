use crate::{domain::response::ViewState, service::SearchExecutor, view::ViewStore};
use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};
use tokio::{task::JoinHandle, time::sleep};
use tracing::debug;

/// Turns raw input events into at most one search per quiet period.
///
/// The pending timer lives in a single slot. `on_input` aborts whatever is in
/// the slot before arming the replacement, under the same lock, so only the
/// most recent text can ever reach the backend. Once a timer fires, the
/// search runs on its own task: later keystrokes cancel timers, not
/// in-flight requests. Stale responses are dropped by the view's tickets.
pub struct SearchDebouncer {
    executor: Arc<SearchExecutor>,
    view: Arc<ViewStore>,
    quiet_period: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl fmt::Debug for SearchDebouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchDebouncer")
            .field("quiet_period", &self.quiet_period)
            .field("has_pending", &self.has_pending())
            .finish()
    }
}

impl SearchDebouncer {
    pub fn new(executor: Arc<SearchExecutor>, view: Arc<ViewStore>, quiet_period: Duration) -> Self {
        Self {
            executor,
            view,
            quiet_period,
            pending: Mutex::new(None),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn on_input(&self, raw_text: impl Into<String>) {
        let text = raw_text.into();
        let mut slot = self.pending.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = slot.take() {
            previous.abort();
        }

        let executor = Arc::clone(&self.executor);
        let view = Arc::clone(&self.view);
        let quiet_period = self.quiet_period;

        *slot = Some(tokio::spawn(async move {
            sleep(quiet_period).await;

            let ticket = view.next_ticket();
            debug!("Quiet period elapsed, searching {text:?} (ticket {ticket})");

            tokio::spawn(async move {
                let list = executor.search(&text).await;
                if !view.commit(ticket, ViewState::Loaded(list)) {
                    debug!("Dropped stale result for {text:?}");
                }
            });
        }));
    }

    /// Aborts the pending timer, if any, without scheduling a new one.
    pub fn cancel(&self) {
        let mut slot = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            previous.abort();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
