//! Application state and transitions.
//!
//! `AppState` is the root state type: the authoritative record set, the
//! search term, the current selection, and the fetch lifecycle status.
//! All mutation goes through the named transition functions below; the
//! shell never touches fields ad hoc. Transitions that require a network
//! request signal it through their return value so the state layer stays
//! free of I/O.

use crate::model::{FetchError, Post, User, UserId};
use crate::state::{filter, ModalSession, PostsPane, SearchBar, TableCursor};
use tracing::{info, warn};

/// Lifecycle of the one-shot user-list load.
///
/// Both `Succeeded` and `Failed` are terminal for the session: there is
/// no retry affordance, by design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// The mount-time fetch has not resolved yet.
    Pending,
    /// Records arrived; the table and search bar are live.
    Succeeded,
    /// The fetch failed. The reason replaces the entire main view.
    Failed(String),
}

/// Root application state. Pure data, no side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The working record set, unique by id, in arrival order. Replaced
    /// wholesale on fetch success, shrunk one entry at a time by delete,
    /// never mutated element-wise.
    records: Vec<User>,

    /// Fetch lifecycle of the user list.
    pub load: LoadState,

    /// The search term and the input's focus flag.
    pub search: SearchBar,

    /// Keyboard cursor over the filtered view.
    pub cursor: TableCursor,

    /// The selected record's id, or none. Always references a record
    /// currently present in `records`.
    selected: Option<UserId>,

    /// Overlay session; `Some` iff a record is selected. While this is
    /// held the overlay owns all input (the input lock).
    pub modal: Option<ModalSession>,

    /// Posts sub-view, keyed by the selected record's id.
    pub posts: PostsPane,
}

impl AppState {
    /// Initial state: load pending, everything else empty.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            load: LoadState::Pending,
            search: SearchBar::new(),
            cursor: TableCursor::new(),
            selected: None,
            modal: None,
            posts: PostsPane::default(),
        }
    }

    /// The full record set in arrival order.
    pub fn records(&self) -> &[User] {
        &self.records
    }

    /// The filtered view: records matching the current search term.
    ///
    /// Recomputed on every read from the record set and the term; never
    /// stored, so it can not desynchronize from either.
    pub fn filtered(&self) -> Vec<&User> {
        filter::filter_users(&self.records, self.search.term())
    }

    /// Id of the selected record, if any.
    pub fn selected(&self) -> Option<UserId> {
        self.selected
    }

    /// The selected record itself.
    pub fn selected_user(&self) -> Option<&User> {
        let id = self.selected?;
        self.records.iter().find(|user| user.id == id)
    }

    /// Whether the detail overlay is open (and holds the input lock).
    pub fn is_overlay_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Apply the user-list fetch completion.
    ///
    /// Only meaningful while `Pending`; the lifecycle is terminal after
    /// the first resolution, so a second completion is dropped.
    pub fn resolve_users(&mut self, result: Result<Vec<User>, FetchError>) {
        if self.load != LoadState::Pending {
            warn!("dropping user-list completion after lifecycle already resolved");
            return;
        }
        match result {
            Ok(records) => {
                info!(count = records.len(), "user list loaded");
                self.records = records;
                self.load = LoadState::Succeeded;
            }
            Err(error) => {
                warn!(%error, "user list load failed");
                self.load = LoadState::Failed(error.to_string());
            }
        }
    }

    /// Apply a posts fetch completion. Stale completions (a different id
    /// than the pane's current key) are discarded inside the pane.
    pub fn resolve_posts(&mut self, user: UserId, result: Result<Vec<Post>, FetchError>) {
        self.posts.resolve(user, result);
    }

    /// Select a record by id, opening the overlay.
    ///
    /// Returns the id when a posts fetch must be issued for it. Selecting
    /// the record that is already selected is idempotent and returns
    /// `None` (no refetch); selecting an id absent from the record set is
    /// a no-op.
    pub fn select(&mut self, id: UserId) -> Option<UserId> {
        if !self.records.iter().any(|user| user.id == id) {
            return None;
        }
        if self.selected == Some(id) {
            return None;
        }
        self.selected = Some(id);
        self.modal = Some(ModalSession::new());
        self.posts.begin(id);
        Some(id)
    }

    /// Clear the selection, closing the overlay and releasing the input
    /// lock. Always succeeds; every dismissal path routes through here.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.modal = None;
        self.posts.reset();
    }

    /// Remove one record from the working set. Local-only, never synced
    /// back to the data source; a no-op when the id is absent.
    ///
    /// Deleting the currently selected record auto-closes the overlay so
    /// the selection never dangles on a record that is no longer present.
    pub fn delete(&mut self, id: UserId) {
        let before = self.records.len();
        self.records.retain(|user| user.id != id);
        if self.records.len() == before {
            return;
        }
        if self.selected == Some(id) {
            self.deselect();
        }
        let visible = self.filtered().len();
        self.cursor.clamp(visible);
    }

    /// Replace the search term verbatim. The filtered view is recomputed
    /// on the next read; the cursor is re-clamped to the narrower view.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search.set_term(term);
        let visible = self.filtered().len();
        self.cursor.clamp(visible);
    }

    /// An upper bound on overlay body lines, for scroll clamping.
    ///
    /// Counts unwrapped lines: the detail sections are a fixed shape and
    /// each post contributes its title plus, when expanded, its body
    /// lines. Wrapping at render time only adds lines, and overscroll
    /// past real content renders as blank rather than breaking anything.
    pub fn overlay_content_lines(&self) -> usize {
        const DETAIL_LINES: usize = 16;
        let posts_lines = match &self.posts {
            PostsPane::Loaded { posts, expanded, .. } => {
                let bodies: usize = posts
                    .iter()
                    .filter(|post| Some(post.id) == *expanded)
                    .map(|post| post.body.lines().count() + 1)
                    .sum();
                posts.len() + bodies
            }
            _ => 1,
        };
        DETAIL_LINES + posts_lines
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
