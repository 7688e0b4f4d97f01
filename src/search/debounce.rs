//! Debounce gate for typed queries
//!
//! Holds back `Intent::Type` until no newer typed text has arrived for the
//! configured quiet period. Every other intent disarms the timer and passes
//! straight through. Time is supplied by the caller so the gate never reads
//! a clock itself.

use std::time::Duration;

use tokio::time::Instant;

use super::intent::Intent;

/// Default quiet period before a typed query is looked up
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Single-timer debounce gate
#[derive(Debug)]
pub struct DebounceGate {
    delay: Duration,
    /// Latest typed text and the instant it becomes due
    armed: Option<(String, Instant)>,
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl DebounceGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay, armed: None }
    }

    pub fn from_millis(debounce_ms: u64) -> Self {
        Self::new(Duration::from_millis(debounce_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Feed an intent into the gate
    ///
    /// Typed text (re)arms the timer and is held back. Anything else cancels
    /// the pending timer and is returned for immediate delivery.
    pub fn push(&mut self, intent: Intent, now: Instant) -> Option<Intent> {
        match intent {
            Intent::Type(text) => {
                self.armed = Some((text, now + self.delay));
                None
            }
            other => {
                self.armed = None;
                Some(other)
            }
        }
    }

    /// Release the held text if its quiet period has elapsed
    ///
    /// Fires at most once per arming.
    pub fn poll(&mut self, now: Instant) -> Option<Intent> {
        match &self.armed {
            Some((_, due)) if now >= *due => {
                self.armed.take().map(|(text, _)| Intent::Type(text))
            }
            _ => None,
        }
    }

    /// Instant at which the armed timer fires, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.armed.as_ref().map(|(_, due)| *due)
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Disarm without emitting
    pub fn cancel(&mut self) {
        self.armed = None;
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
