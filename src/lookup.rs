//! Remote suggestion lookup
//!
//! Defines the [`Lookup`] collaborator the search session calls for every
//! debounced query, the [`LookupError`] taxonomy, and the HTTP registry client.

use futures::future::BoxFuture;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::search::Suggestion;

mod registry;

pub use registry::RegistryLookup;

/// Errors that can occur during a lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The lookup's cancellation token fired before it completed
    #[error("Lookup cancelled")]
    Cancelled,

    /// Transport failure (connect, DNS, timeout, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The registry answered with a non-success status
    #[error("Registry error ({code}): {message}")]
    Status { code: u16, message: String },

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LookupError {
    /// Cancellation is the expected result of superseding a lookup, not a failure
    pub fn is_cancellation(&self) -> bool {
        matches!(self, LookupError::Cancelled)
    }
}

pub type LookupResult = Result<Vec<Suggestion>, LookupError>;

/// A remote source of suggestions
///
/// Implementations must settle with [`LookupError::Cancelled`] once `token`
/// is cancelled. The returned future is spawned onto the runtime, so it owns
/// everything it needs.
pub trait Lookup: Send + Sync + 'static {
    fn search(&self, query: String, token: CancellationToken) -> BoxFuture<'static, LookupResult>;
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod lookup_tests;
