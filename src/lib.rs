//! udex — terminal user directory explorer.
//!
//! TUI application for browsing user records fetched from a JSON REST
//! endpoint: a searchable table of users, a detail overlay for a single
//! selected record, and a per-user posts list inside the overlay.
//!
//! The crate follows a Pure Core / Impure Shell architecture: all state
//! and transitions live in [`state`] as plain data and pure functions,
//! rendering and terminal management live in [`view`], and network I/O
//! lives in [`fetch`], reporting completions back to the event loop over
//! an mpsc channel.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
