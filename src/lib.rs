//! Typeahead package search for a registry web UI.
//!
//! The [`search`] module holds the request lifecycle: normalizing raw input
//! events, debouncing typed text, and deciding which lookups stay live.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod navigation;
pub mod search;
