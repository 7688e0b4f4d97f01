//! Search module
//!
//! The as-you-type search pipeline: raw surface events are normalized into
//! intents, typed text is debounced, and the request lifecycle decides which
//! lookups to issue, which to cancel, and what the surface should show.

pub mod debounce;
pub mod intent;
pub mod lifecycle;
mod search_state;
pub mod session;

pub use debounce::{DEFAULT_DEBOUNCE_MS, DebounceGate};
pub use intent::{ChangeMethod, Intent, UiEvent, UiEventKind, normalize};
pub use lifecycle::{Effect, Event, PendingRequest, RequestId, RequestLifecycle};
pub use search_state::{SearchState, Status, Suggestion, SuggestionId};
pub use session::{SearchSession, Surface};
