//! Search bar rendering.
//!
//! The field is controlled: the rendered value always mirrors the
//! state-owned term. The clear affordance appears only while the term is
//! non-empty; its rect is reported for mouse hit-testing.

use crate::state::AppState;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the clear affordance, including its brackets.
const CLEAR_LABEL: &str = "[✕ clear]";

/// Render the search bar; returns the clear affordance rect when shown.
pub fn render_search_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &UiStyles,
) -> Option<Rect> {
    let block = Block::default().borders(Borders::ALL).title(" Search ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let term = state.search.term();
    let focused = state.search.is_focused();

    let mut spans = Vec::new();
    if term.is_empty() && !focused {
        spans.push(Span::styled("press / to search", styles.hint));
    } else {
        let style = if term.is_empty() {
            Style::default()
        } else {
            styles.search_active
        };
        spans.push(Span::styled(term.to_string(), style));
        if focused {
            spans.push(Span::styled(
                " ",
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    if term.is_empty() {
        return None;
    }

    // Clear affordance, right-aligned inside the bar.
    let label_width = CLEAR_LABEL.chars().count() as u16;
    if inner.width <= label_width {
        return None;
    }
    let clear = Rect::new(inner.x + inner.width - label_width, inner.y, label_width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(CLEAR_LABEL, styles.search_active)),
        clear,
    );
    Some(clear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn empty_unfocused_bar_shows_the_hint_and_no_clear() {
        let state = AppState::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let mut clear = None;
        terminal
            .draw(|frame| {
                clear = render_search_bar(frame, frame.area(), &state, &UiStyles::new());
            })
            .unwrap();
        assert!(clear.is_none());
        assert!(buffer_text(&terminal).contains("press / to search"));
    }

    #[test]
    fn the_bar_echoes_the_term_and_offers_clear() {
        let mut state = AppState::new();
        state.set_search("John");
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        let mut clear = None;
        terminal
            .draw(|frame| {
                clear = render_search_bar(frame, frame.area(), &state, &UiStyles::new());
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("John"), "term must be echoed");
        assert!(text.contains("clear"));
        assert!(clear.is_some());
    }

    #[test]
    fn focused_bar_shows_a_cursor_cell() {
        let mut state = AppState::new();
        state.search.focus();
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| {
                render_search_bar(frame, frame.area(), &state, &UiStyles::new());
            })
            .unwrap();
        // The hint disappears as soon as the field is focused.
        assert!(!buffer_text(&terminal).contains("press / to search"));
    }
}
