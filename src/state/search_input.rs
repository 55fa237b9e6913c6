//! Search control state.
//!
//! The text field is controlled: its rendered value always mirrors the
//! term stored here, and every edit replaces the term verbatim. No
//! trimming, no debounce, no internal buffering; the filtered view is
//! recomputed from the new term on the next read.

/// The search term and the field's focus flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBar {
    term: String,
    focused: bool,
}

impl SearchBar {
    /// Create an empty, unfocused search bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search term, exactly as typed.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether the field currently consumes keyboard input.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give the field input focus.
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Drop input focus; the term is kept.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Append one typed character.
    pub fn push(&mut self, ch: char) {
        self.term.push(ch);
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.term.pop();
    }

    /// Reset the term to empty (the clear affordance).
    pub fn clear(&mut self) {
        self.term.clear();
    }

    /// Replace the term wholesale (initial `--search` value).
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }
}
