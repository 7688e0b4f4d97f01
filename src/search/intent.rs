//! Input normalization
//!
//! Turns raw surface events into the intents the lifecycle understands.
//! Every event that reaches the normalizer is consumed here: its propagation
//! is stopped before an intent is produced.

use super::search_state::SuggestionId;

/// How the text in the search box changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeMethod {
    /// The user edited the text
    Type,
    /// The surface rewrote the text while the user moved through the options
    Navigate,
}

/// Raw event kinds emitted by the rendering surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEventKind {
    Changed { value: String, method: ChangeMethod },
    Selected { suggestion: SuggestionId },
    Cleared,
    Blurred,
}

/// A raw surface event that can have its propagation suppressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub kind: UiEventKind,
    propagation_stopped: bool,
}

impl UiEvent {
    pub fn new(kind: UiEventKind) -> Self {
        Self {
            kind,
            propagation_stopped: false,
        }
    }

    pub fn typed(value: impl Into<String>) -> Self {
        Self::new(UiEventKind::Changed {
            value: value.into(),
            method: ChangeMethod::Type,
        })
    }

    pub fn navigated(value: impl Into<String>) -> Self {
        Self::new(UiEventKind::Changed {
            value: value.into(),
            method: ChangeMethod::Navigate,
        })
    }

    pub fn selected(suggestion: SuggestionId) -> Self {
        Self::new(UiEventKind::Selected { suggestion })
    }

    pub fn cleared() -> Self {
        Self::new(UiEventKind::Cleared)
    }

    pub fn blurred() -> Self {
        Self::new(UiEventKind::Blurred)
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Normalized user action fed into the debounce gate and the lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Type(String),
    Select(SuggestionId),
    Clear,
    Blur,
}

impl Intent {
    /// Whether this intent must wait for input to go quiet
    pub fn is_debounced(&self) -> bool {
        matches!(self, Intent::Type(_))
    }
}

/// Consume a raw event and produce its intent
///
/// Text changes caused by list navigation are not typing and produce no
/// intent; the event is still consumed.
pub fn normalize(event: &mut UiEvent) -> Option<Intent> {
    event.stop_propagation();

    match &event.kind {
        UiEventKind::Changed {
            value,
            method: ChangeMethod::Type,
        } => Some(Intent::Type(value.trim().to_string())),
        UiEventKind::Changed {
            method: ChangeMethod::Navigate,
            ..
        } => None,
        UiEventKind::Selected { suggestion } => Some(Intent::Select(suggestion.clone())),
        UiEventKind::Cleared => Some(Intent::Clear),
        UiEventKind::Blurred => Some(Intent::Blur),
    }
}

#[cfg(test)]
#[path = "intent_tests.rs"]
mod intent_tests;
