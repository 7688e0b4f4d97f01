//! Terminal search box
//!
//! The rendering surface for the search session: a single-line input, the
//! option list, and a status line. Key presses become raw [`UiEvent`]s for
//! the session; published snapshots are mirrored for rendering.
//!
//! [`UiEvent`]: crate::search::UiEvent

mod app_events;
mod app_render;
mod app_state;

pub use app_state::{App, Focus};
