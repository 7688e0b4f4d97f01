use std::fmt;

/// Opaque identifier of a suggestion, handed to navigation on selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuggestionId(String);

impl SuggestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuggestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single result produced by the remote lookup
///
/// The lifecycle never looks inside a suggestion; it only forwards it to the
/// rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub label: String,
    pub detail: Option<String>,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: SuggestionId::new(id),
            label: label.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Externally visible status of the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    /// At least one lookup is outstanding for the current query
    Pending,
    Loaded,
    Failed,
}

/// Snapshot published to the rendering surface on every transition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub query_text: String,
    pub suggestions: Vec<Suggestion>,
    pub status: Status,
}

impl SearchState {
    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    pub fn is_failed(&self) -> bool {
        self.status == Status::Failed
    }
}
