//! Search session event loop
//!
//! Runs the normalizer, the debounce gate, and the lifecycle on a single task.
//! Surface events, lookup settlements, and the debounce timer are all
//! observed by one `select!` loop, so transitions never interleave. Lookups
//! run as separate tasks and report back through a channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use super::debounce::DebounceGate;
use super::intent::{UiEvent, normalize};
use super::lifecycle::{Effect, Event, RequestId, RequestLifecycle};
use super::search_state::SearchState;
use crate::lookup::{Lookup, LookupError};
use crate::navigation::Navigator;

/// Receives every published snapshot
pub trait Surface: Send + 'static {
    fn render(&mut self, state: &SearchState);
}

impl Surface for watch::Sender<SearchState> {
    fn render(&mut self, state: &SearchState) {
        self.send_replace(state.clone());
    }
}

/// Owns one search box's lifecycle and executes its effects
pub struct SearchSession<L: Lookup, S: Surface, N: Navigator> {
    lifecycle: RequestLifecycle,
    gate: DebounceGate,
    lookup: Arc<L>,
    surface: S,
    navigator: N,
    settled_tx: mpsc::UnboundedSender<Event>,
    settled_rx: mpsc::UnboundedReceiver<Event>,
}

impl<L: Lookup, S: Surface, N: Navigator> SearchSession<L, S, N> {
    pub fn new(lookup: Arc<L>, surface: S, navigator: N, debounce: Duration) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            lifecycle: RequestLifecycle::new(),
            gate: DebounceGate::new(debounce),
            lookup,
            surface,
            navigator,
            settled_tx,
            settled_rx,
        }
    }

    /// Process surface events until the sender side is dropped
    ///
    /// On exit every outstanding lookup is cancelled and the pending
    /// debounce timer is discarded.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<UiEvent>) {
        loop {
            let deadline = self.gate.deadline();

            tokio::select! {
                biased;

                received = events.recv() => match received {
                    Some(event) => self.on_ui_event(event),
                    None => break,
                },
                Some(settled) = self.settled_rx.recv() => self.apply(settled),
                () = wait_for(deadline) => {
                    if let Some(intent) = self.gate.poll(Instant::now()) {
                        self.apply(Event::Intent(intent));
                    }
                }
            }
        }

        self.teardown();
    }

    fn on_ui_event(&mut self, mut event: UiEvent) {
        let Some(intent) = normalize(&mut event) else {
            return;
        };

        if let Some(intent) = self.gate.push(intent, Instant::now()) {
            self.apply(Event::Intent(intent));
        }
    }

    fn apply(&mut self, event: Event) {
        for effect in self.lifecycle.handle(event) {
            self.perform(effect);
        }
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::Issue { id, query, token } => self.spawn_lookup(id, query, token),
            Effect::Cancel(request) => request.cancel(),
            Effect::Navigate(id) => self.navigator.navigate(&id),
            Effect::Publish(state) => self.surface.render(&state),
        }
    }

    fn spawn_lookup(&self, id: RequestId, query: String, token: CancellationToken) {
        let lookup = Arc::clone(&self.lookup);
        let settled_tx = self.settled_tx.clone();

        tokio::spawn(async move {
            let search = lookup.search(query, token.clone());
            // Settle as cancelled even if the lookup ignores its token
            let outcome = tokio::select! {
                biased;
                () = token.cancelled() => Err(LookupError::Cancelled),
                outcome = search => outcome,
            };
            // The session may already be gone; nothing left to report to
            let _ = settled_tx.send(Event::Settled { id, outcome });
        });
    }

    fn teardown(&mut self) {
        self.gate.cancel();
        self.apply(Event::Teardown);
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
