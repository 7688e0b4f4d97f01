//! Outstanding lookup bookkeeping

use std::fmt;

use tokio_util::sync::CancellationToken;

/// Opaque token identifying one issued lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub(crate) fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Bookkeeping record for one outstanding lookup
#[derive(Debug, Clone)]
pub struct PendingRequest {
    id: RequestId,
    query: String,
    token: CancellationToken,
}

impl PendingRequest {
    pub(crate) fn new(id: RequestId, query: String, token: CancellationToken) -> Self {
        Self { id, query, token }
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Signal the lookup to abort; consumes the record
    pub fn cancel(self) {
        self.token.cancel();
    }
}

/// Source of cancellation tokens for newly issued lookups
pub trait TokenFactory {
    fn issue(&mut self) -> CancellationToken;

    /// Cancel every token this factory has issued
    fn revoke(&mut self) {}
}

/// Hands out children of a single root token
///
/// Revoking cancels the root, which cancels every child at once.
#[derive(Debug, Default)]
pub struct ChildTokens {
    root: CancellationToken,
}

impl ChildTokens {
    pub fn new(root: CancellationToken) -> Self {
        Self { root }
    }
}

impl TokenFactory for ChildTokens {
    fn issue(&mut self) -> CancellationToken {
        self.root.child_token()
    }

    fn revoke(&mut self) {
        self.root.cancel();
    }
}
