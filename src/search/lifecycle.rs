//! Request lifecycle state machine
//!
//! Owns the published [`SearchState`] and the set of outstanding lookups.
//! [`RequestLifecycle::handle`] is the only way in: it applies one event and
//! returns the side effects the caller must carry out, in order. The machine
//! itself never performs I/O, never cancels a token, and never blocks.
//!
//! Two rules keep stale results out of `suggestions`:
//! - every new query cancels every outstanding lookup (supersede)
//! - a successful settlement is applied only if its query still matches
//!   the current query text

use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use super::intent::Intent;
use super::search_state::{SearchState, Status, SuggestionId};
use crate::lookup::LookupResult;

mod pending;

pub use pending::{ChildTokens, PendingRequest, RequestId, TokenFactory};

/// Inputs to the state machine
#[derive(Debug)]
pub enum Event {
    /// A debounced (or bypassing) user intent
    Intent(Intent),
    /// A lookup settled, successfully or not
    Settled { id: RequestId, outcome: LookupResult },
    /// The owner is going away; cancel everything and stop
    Teardown,
}

/// Side effects requested by a transition
#[derive(Debug)]
pub enum Effect {
    /// Start a lookup for `query`, abortable through `token`
    Issue {
        id: RequestId,
        query: String,
        token: CancellationToken,
    },
    /// Abort an outstanding lookup; it is already forgotten by the machine
    Cancel(PendingRequest),
    /// Hand the selected suggestion to navigation
    Navigate(SuggestionId),
    /// Deliver a new snapshot to the rendering surface
    Publish(SearchState),
}

/// The request lifecycle manager
#[derive(Debug)]
pub struct RequestLifecycle<F: TokenFactory = ChildTokens> {
    state: SearchState,
    outstanding: BTreeMap<RequestId, PendingRequest>,
    /// Next id to hand out; every id below it has been issued
    next_id: u64,
    tokens: F,
    torn_down: bool,
}

impl Default for RequestLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::with_tokens(ChildTokens::default())
    }
}

impl<F: TokenFactory> RequestLifecycle<F> {
    pub fn with_tokens(tokens: F) -> Self {
        Self {
            state: SearchState::default(),
            outstanding: BTreeMap::new(),
            next_id: 0,
            tokens,
            torn_down: false,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn outstanding(&self) -> impl Iterator<Item = &PendingRequest> {
        self.outstanding.values()
    }

    pub fn outstanding_count(&self) -> usize {
        self.outstanding.len()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Apply one event and return the effects to carry out
    ///
    /// After teardown every event is ignored.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        if self.torn_down {
            log::debug!("Ignoring {:?} after teardown", event);
            return Vec::new();
        }

        match event {
            Event::Intent(intent) => self.on_intent(intent),
            Event::Settled { id, outcome } => self.on_settled(id, outcome),
            Event::Teardown => self.on_teardown(),
        }
    }

    fn on_intent(&mut self, intent: Intent) -> Vec<Effect> {
        // Every intent supersedes whatever is in flight
        let mut effects = self.cancel_all();

        match intent {
            Intent::Type(text) if text.is_empty() => {
                self.state.query_text.clear();
                self.state.suggestions.clear();
                self.state.status = Status::Idle;
            }
            Intent::Type(text) => {
                let request = self.issue(text.clone());
                effects.push(Effect::Issue {
                    id: request.id(),
                    query: text.clone(),
                    token: request.token().clone(),
                });
                self.outstanding.insert(request.id(), request);
                self.state.query_text = text;
                self.state.status = Status::Pending;
            }
            Intent::Select(id) => {
                self.state.query_text.clear();
                self.state.suggestions.clear();
                self.state.status = Status::Idle;
                effects.push(Effect::Navigate(id));
            }
            Intent::Clear => {
                self.state.suggestions.clear();
                self.state.status = Status::Idle;
            }
            Intent::Blur => {
                self.state.status = Status::Idle;
            }
        }

        effects.push(self.publish());
        effects
    }

    fn on_settled(&mut self, id: RequestId, outcome: LookupResult) -> Vec<Effect> {
        let Some(request) = self.outstanding.remove(&id) else {
            debug_assert!(
                id.raw() < self.next_id,
                "settlement for request {} that was never issued",
                id
            );
            // Already cancelled by a supersede, clear, or blur
            log::debug!("Dropping late settlement for request {}", id);
            return Vec::new();
        };

        let is_current = request.query() == self.state.query_text;

        match outcome {
            Ok(suggestions) if is_current => {
                log::debug!(
                    "Request {} for {:?} loaded {} suggestions",
                    id,
                    request.query(),
                    suggestions.len()
                );
                self.state.suggestions = suggestions;
                self.state.status = Status::Loaded;
            }
            Ok(_) => {
                log::debug!("Discarding stale result of request {}", id);
            }
            Err(error) if error.is_cancellation() => {
                if self.state.status == Status::Pending && !self.has_outstanding_for_current() {
                    self.state.status = Status::Idle;
                }
            }
            Err(_) if is_current => {
                self.state.status = Status::Failed;
            }
            Err(_) => {}
        }

        vec![self.publish()]
    }

    fn on_teardown(&mut self) -> Vec<Effect> {
        let effects = self.cancel_all();
        self.tokens.revoke();
        self.torn_down = true;
        log::debug!("Search lifecycle torn down");
        effects
    }

    fn issue(&mut self, query: String) -> PendingRequest {
        let id = RequestId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        log::debug!("Issuing request {} for {:?}", id, query);
        PendingRequest::new(id, query, self.tokens.issue())
    }

    /// Forget every outstanding request and ask for each to be cancelled
    fn cancel_all(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.outstanding)
            .into_values()
            .map(|request| {
                log::debug!("Cancelling request {} for {:?}", request.id(), request.query());
                Effect::Cancel(request)
            })
            .collect()
    }

    fn has_outstanding_for_current(&self) -> bool {
        self.outstanding
            .values()
            .any(|request| request.query() == self.state.query_text)
    }

    fn publish(&self) -> Effect {
        Effect::Publish(self.state.clone())
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod lifecycle_tests;
