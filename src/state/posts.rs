//! Posts pane state machine.
//!
//! An independent lifecycle keyed by the selected user's id. The pane
//! refetches whenever its key changes (none to a value, or one id to a
//! different id) and never reuses data across ids: a completion tagged
//! with any id other than the current key is stale and is discarded
//! without touching state.
//!
//! Expansion is a single "currently expanded id or none" value, so
//! expanding one post collapses whichever other post was open.

use crate::model::{FetchError, Post, PostId, UserId};
use tracing::debug;

/// Lifecycle of the per-user posts list.
///
/// Loading, failure, and zero-item outcomes are distinct states with
/// distinct renders; an empty `Loaded` list is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsPane {
    /// No record selected; nothing to show.
    Idle,
    /// A load is in flight.
    Loading {
        /// The key the in-flight request was issued for.
        user: UserId,
    },
    /// The load finished.
    Loaded {
        /// The key the posts belong to.
        user: UserId,
        /// Posts in arrival order. May be empty.
        posts: Vec<Post>,
        /// At most one post shows its body at a time.
        expanded: Option<PostId>,
        /// Keyboard cursor within `posts`.
        cursor: usize,
    },
    /// The load failed; replaces only this sub-section, never the overlay.
    Failed {
        /// The key the failed request was issued for.
        user: UserId,
        /// Human-readable failure reason.
        reason: String,
    },
}

impl PostsPane {
    /// Start a load for `user`, discarding whatever was shown before.
    pub fn begin(&mut self, user: UserId) {
        *self = PostsPane::Loading { user };
    }

    /// Return to the empty state (selection cleared).
    pub fn reset(&mut self) {
        *self = PostsPane::Idle;
    }

    /// The key the pane currently belongs to, if any.
    pub fn current_user(&self) -> Option<UserId> {
        match self {
            PostsPane::Idle => None,
            PostsPane::Loading { user }
            | PostsPane::Loaded { user, .. }
            | PostsPane::Failed { user, .. } => Some(*user),
        }
    }

    /// Apply a fetch completion.
    ///
    /// Only a completion for the id we are currently loading is applied;
    /// anything else is a stale response from a previous selection and is
    /// dropped.
    pub fn resolve(&mut self, user: UserId, result: Result<Vec<Post>, FetchError>) {
        match self {
            PostsPane::Loading { user: current } if *current == user => {
                *self = match result {
                    Ok(posts) => PostsPane::Loaded {
                        user,
                        posts,
                        expanded: None,
                        cursor: 0,
                    },
                    Err(error) => PostsPane::Failed {
                        user,
                        reason: error.to_string(),
                    },
                };
            }
            _ => debug!(user = user.get(), "discarding stale posts completion"),
        }
    }

    /// Currently expanded post id, if any.
    pub fn expanded(&self) -> Option<PostId> {
        match self {
            PostsPane::Loaded { expanded, .. } => *expanded,
            _ => None,
        }
    }

    /// Cursor index within the loaded list (0 otherwise).
    pub fn cursor(&self) -> usize {
        match self {
            PostsPane::Loaded { cursor, .. } => *cursor,
            _ => 0,
        }
    }

    /// Move the cursor up one post.
    pub fn cursor_up(&mut self) {
        if let PostsPane::Loaded { cursor, .. } = self {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Move the cursor down one post.
    pub fn cursor_down(&mut self) {
        if let PostsPane::Loaded { posts, cursor, .. } = self {
            if !posts.is_empty() {
                *cursor = (*cursor + 1).min(posts.len() - 1);
            }
        }
    }

    /// Place the cursor on a specific post (mouse click), clamped.
    pub fn set_cursor(&mut self, index: usize) {
        if let PostsPane::Loaded { posts, cursor, .. } = self {
            if !posts.is_empty() {
                *cursor = index.min(posts.len() - 1);
            }
        }
    }

    /// Expand the cursor post, collapsing any other; collapse it if it was
    /// already expanded.
    pub fn toggle_expanded(&mut self) {
        if let PostsPane::Loaded {
            posts,
            expanded,
            cursor,
            ..
        } = self
        {
            let Some(post) = posts.get(*cursor) else {
                return;
            };
            *expanded = if *expanded == Some(post.id) {
                None
            } else {
                Some(post.id)
            };
        }
    }
}

impl Default for PostsPane {
    fn default() -> Self {
        PostsPane::Idle
    }
}
