//! Observable view state shared between the fetch logic and a renderer.
//!
//! Every fetch takes a ticket before it starts. A result is only published
//! while its ticket is still the newest one handed out, so a slow response
//! can never overwrite the result of a request issued after it.

use crate::domain::response::ViewState;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug)]
pub struct ViewStore {
    sender: watch::Sender<ViewState>,
    latest_ticket: AtomicU64,
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ViewState::Loading);
        Self {
            sender,
            latest_ticket: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.sender.subscribe()
    }

    pub fn current(&self) -> ViewState {
        self.sender.borrow().clone()
    }

    pub fn next_ticket(&self) -> u64 {
        self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Takes a ticket and shows the loading state.
    pub fn begin_loading(&self) -> u64 {
        let ticket = self.next_ticket();
        self.sender.send_replace(ViewState::Loading);
        ticket
    }

    /// Publishes `state` if `ticket` is still current. Returns whether it was
    /// published.
    pub fn commit(&self, ticket: u64, state: ViewState) -> bool {
        let published = self.sender.send_if_modified(|current| {
            if self.latest_ticket.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *current = state;
            true
        });

        if !published {
            debug!("Discarded stale view update for ticket {ticket}");
        }

        published
    }
}
