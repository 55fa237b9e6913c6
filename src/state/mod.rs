//! Pure application state and transitions.
//!
//! Everything in this module is plain data mutated only through named
//! transition functions; no I/O, no rendering. The shell decides when to
//! issue network requests based on the signals these transitions return.

pub mod app_state;
pub mod filter;
pub mod input;
pub mod mouse;
pub mod overlay;
pub mod posts;
pub mod search_input;
pub mod table;

// Re-export for convenience
pub use app_state::{AppState, LoadState};
pub use input::{handle_key, InputOutcome};
pub use mouse::{handle_mouse, OverlayRegions, ScreenRegions, TableRegions};
pub use overlay::ModalSession;
pub use posts::PostsPane;
pub use search_input::SearchBar;
pub use table::TableCursor;
