//! Keyboard routing.
//!
//! One entry point maps a key event onto state transitions, honoring the
//! input ownership order: the detail overlay first (while it is open it
//! holds the input lock and table/search receive nothing), then a
//! focused search field, then the table-mode bindings. Transitions that
//! need a network request report it in the returned outcome; no I/O
//! happens here.

use crate::config::KeyBindings;
use crate::model::{KeyAction, UserId};
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the shell must do after a key or mouse event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Keep running; nothing further to do.
    Continue,
    /// Exit the application.
    Quit,
    /// Issue a posts fetch for this user.
    LoadPosts(UserId),
}

/// Lines a page-scroll key moves the overlay body by.
const OVERLAY_PAGE: usize = 5;

/// Apply one key event to the state.
pub fn handle_key(state: &mut AppState, key: KeyEvent, bindings: &KeyBindings) -> InputOutcome {
    // Ctrl+C quits from anywhere, modal or not.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputOutcome::Quit;
    }

    if state.is_overlay_open() {
        overlay_key(state, key);
        return InputOutcome::Continue;
    }

    if state.search.is_focused() {
        search_key(state, key);
        return InputOutcome::Continue;
    }

    table_key(state, key, bindings)
}

/// Keys while the overlay holds the input lock.
fn overlay_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        // Dismissal key and close affordance route through the same
        // transition as every other dismissal path.
        KeyCode::Esc | KeyCode::Char('x') => state.deselect(),
        KeyCode::Char('j') | KeyCode::Down => state.posts.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => state.posts.cursor_up(),
        KeyCode::Enter | KeyCode::Char(' ') => state.posts.toggle_expanded(),
        KeyCode::PageDown => {
            let max = state.overlay_content_lines();
            if let Some(modal) = state.modal.as_mut() {
                modal.scroll_down(OVERLAY_PAGE, max);
            }
        }
        KeyCode::PageUp => {
            if let Some(modal) = state.modal.as_mut() {
                modal.scroll_up(OVERLAY_PAGE);
            }
        }
        _ => {}
    }
}

/// Keys while the search field has input focus.
fn search_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => state.search.blur(),
        KeyCode::Backspace => {
            state.search.backspace();
            let visible = state.filtered().len();
            state.cursor.clamp(visible);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.set_search("");
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.search.push(ch);
            let visible = state.filtered().len();
            state.cursor.clamp(visible);
        }
        _ => {}
    }
}

/// Table-mode keys, resolved through the configured bindings.
fn table_key(state: &mut AppState, key: KeyEvent, bindings: &KeyBindings) -> InputOutcome {
    let Some(action) = bindings.get(key) else {
        return InputOutcome::Continue;
    };

    match action {
        KeyAction::Quit => return InputOutcome::Quit,
        KeyAction::CursorUp => state.cursor.move_up(),
        KeyAction::CursorDown => {
            let rows = state.filtered().len();
            state.cursor.move_down(rows);
        }
        KeyAction::CursorTop => state.cursor.move_to_top(),
        KeyAction::CursorBottom => {
            let rows = state.filtered().len();
            state.cursor.move_to_bottom(rows);
        }
        KeyAction::OpenDetail => {
            let id = cursor_row_id(state);
            if let Some(id) = id {
                if let Some(fetch) = state.select(id) {
                    return InputOutcome::LoadPosts(fetch);
                }
            }
        }
        KeyAction::DeleteRow => {
            let id = cursor_row_id(state);
            if let Some(id) = id {
                state.delete(id);
            }
        }
        KeyAction::FocusSearch => state.search.focus(),
        KeyAction::ClearSearch => state.set_search(""),
    }

    InputOutcome::Continue
}

/// Id of the record under the table cursor, if any row is visible.
fn cursor_row_id(state: &AppState) -> Option<UserId> {
    state
        .filtered()
        .get(state.cursor.index())
        .map(|user| user.id)
}

// ===== Tests =====
