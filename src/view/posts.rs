//! Posts section of the detail overlay.
//!
//! Builds the section as plain lines so the overlay can compose them
//! with the detail sections and apply its own scrolling. Loading,
//! failure, and zero-item outcomes render distinctly.

use crate::state::PostsPane;
use crate::view::helpers::wrap_text;
use crate::view::styles::UiStyles;
use ratatui::text::{Line, Span};

/// The built section: its lines plus, for hit-testing, which line each
/// post title landed on.
pub struct PostsSection {
    /// Lines in render order.
    pub lines: Vec<Line<'static>>,
    /// (line index, post index) for every post title line.
    pub title_indices: Vec<(usize, usize)>,
}

/// Build the posts section for the given pane state.
pub fn posts_section(pane: &PostsPane, width: u16, styles: &UiStyles) -> PostsSection {
    let mut lines = vec![Line::from(Span::styled("Posts", styles.section))];
    let mut title_indices = Vec::new();

    match pane {
        PostsPane::Idle => {}
        PostsPane::Loading { .. } => {
            lines.push(Line::from(Span::styled("loading posts…", styles.hint)));
        }
        PostsPane::Failed { reason, .. } => {
            for wrapped in wrap_text(reason, width) {
                lines.push(Line::from(Span::styled(wrapped, styles.error)));
            }
        }
        PostsPane::Loaded { posts, .. } if posts.is_empty() => {
            lines.push(Line::from(Span::styled("no posts", styles.hint)));
        }
        PostsPane::Loaded {
            posts,
            expanded,
            cursor,
            ..
        } => {
            for (index, post) in posts.iter().enumerate() {
                let is_expanded = Some(post.id) == *expanded;
                let marker = if is_expanded { "▾ " } else { "▸ " };
                let title = format!("{marker}{}", post.title);
                let line = if index == *cursor {
                    Line::from(Span::styled(title, styles.post_cursor))
                } else {
                    Line::from(title)
                };
                title_indices.push((lines.len(), index));
                lines.push(line);

                if is_expanded {
                    for wrapped in wrap_text(&post.body, width.saturating_sub(2)) {
                        lines.push(Line::from(format!("  {wrapped}")));
                    }
                }
            }
        }
    }

    PostsSection {
        lines,
        title_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FetchError, Post, PostId, UserId};

    fn post(id: i64, title: &str, body: &str) -> Post {
        Post {
            id: PostId::new(id),
            user_id: UserId::new(1),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn section_text(section: &PostsSection) -> String {
        section
            .lines
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn loading_failed_and_empty_render_distinctly() {
        let mut pane = PostsPane::default();
        pane.begin(UserId::new(1));
        let loading = section_text(&posts_section(&pane, 40, &UiStyles::new()));
        assert!(loading.contains("loading posts…"));

        pane.resolve(
            UserId::new(1),
            Err(FetchError::Request {
                url: "http://example.test/posts".to_string(),
                reason: "connection refused".to_string(),
            }),
        );
        let failed = section_text(&posts_section(&pane, 40, &UiStyles::new()));
        assert!(failed.contains("connection refused"));
        assert!(!failed.contains("loading"));

        let mut empty = PostsPane::default();
        empty.begin(UserId::new(1));
        empty.resolve(UserId::new(1), Ok(Vec::new()));
        let text = section_text(&posts_section(&empty, 40, &UiStyles::new()));
        assert!(text.contains("no posts"));
        assert!(!text.contains("connection refused"));
    }

    #[test]
    fn only_the_expanded_post_shows_its_body() {
        let mut pane = PostsPane::default();
        pane.begin(UserId::new(1));
        pane.resolve(
            UserId::new(1),
            Ok(vec![
                post(10, "first title", "first body"),
                post(11, "second title", "second body"),
            ]),
        );
        pane.toggle_expanded();

        let text = section_text(&posts_section(&pane, 40, &UiStyles::new()));
        assert!(text.contains("▾ first title"));
        assert!(text.contains("first body"));
        assert!(text.contains("▸ second title"));
        assert!(!text.contains("second body"));
    }

    #[test]
    fn title_indices_track_every_post() {
        let mut pane = PostsPane::default();
        pane.begin(UserId::new(1));
        pane.resolve(
            UserId::new(1),
            Ok(vec![post(10, "a", "body a"), post(11, "b", "body b")]),
        );
        pane.toggle_expanded();

        let section = posts_section(&pane, 40, &UiStyles::new());
        assert_eq!(section.title_indices.len(), 2);
        // The expanded body pushes the second title further down.
        let (first_line, _) = section.title_indices[0];
        let (second_line, _) = section.title_indices[1];
        assert!(second_line > first_line + 1);
    }
}
