//! Domain-level keyboard actions for the table view.
//!
//! Actions here apply only while no modal input owner (search field,
//! detail overlay) is active; those two consume keys directly in the
//! shell, which is what makes the overlay's input lock airtight.

/// One table-mode action, produced by looking a key event up in the
/// configured bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the row cursor up one row.
    CursorUp,
    /// Move the row cursor down one row.
    CursorDown,
    /// Jump the row cursor to the first row.
    CursorTop,
    /// Jump the row cursor to the last row.
    CursorBottom,
    /// Open the detail overlay for the cursor row.
    OpenDetail,
    /// Delete the cursor row (local-only, never synced back).
    DeleteRow,
    /// Give the search field input focus.
    FocusSearch,
    /// Reset the search term to empty.
    ClearSearch,
}
