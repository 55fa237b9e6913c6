//! Whole-frame layout.
//!
//! Chooses between the three top-level renders the fetch lifecycle
//! allows: a pending placeholder, the failure view (which replaces the
//! table and search bar entirely), and the live table with the overlay
//! on top when a record is selected.

use crate::state::{AppState, LoadState, ScreenRegions};
use crate::view::overlay::render_overlay;
use crate::view::search_bar::render_search_bar;
use crate::view::styles::UiStyles;
use crate::view::table::render_table;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render one frame and report the clickable geometry.
pub fn render(frame: &mut Frame, state: &AppState, styles: &UiStyles) -> ScreenRegions {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(0),    // content
        Constraint::Length(1), // status bar
    ])
    .split(frame.area());

    render_header(frame, chunks[0], styles);
    let regions = render_content(frame, chunks[1], state, styles);
    render_status_bar(frame, chunks[2], state, styles);
    regions
}

fn render_header(frame: &mut Frame, area: Rect, styles: &UiStyles) {
    frame.render_widget(
        Paragraph::new(Span::styled("udex — user directory", styles.header)),
        area,
    );
}

fn render_content(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &UiStyles,
) -> ScreenRegions {
    match &state.load {
        LoadState::Pending => {
            let message = Paragraph::new(Span::styled("loading users…", styles.hint))
                .alignment(Alignment::Center);
            let centered = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            frame.render_widget(message, centered);
            ScreenRegions::default()
        }
        LoadState::Failed(reason) => {
            // The error replaces the normal view entirely; the table and
            // search bar never render in this state.
            let lines = vec![
                Line::from(Span::styled("failed to load users", styles.error)),
                Line::default(),
                Line::from(Span::styled(reason.clone(), styles.error)),
            ];
            let message = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            let centered = Rect::new(
                area.x,
                area.y + (area.height / 2).saturating_sub(1),
                area.width,
                area.height.saturating_sub(area.height / 2),
            );
            frame.render_widget(message, centered);
            ScreenRegions::default()
        }
        LoadState::Succeeded => {
            let chunks = Layout::vertical([
                Constraint::Length(3), // search bar
                Constraint::Min(0),    // table
            ])
            .split(area);

            let search_clear = render_search_bar(frame, chunks[0], state, styles);
            let table = render_table(frame, chunks[1], state, styles);
            let overlay = render_overlay(frame, state, styles);

            ScreenRegions {
                table: Some(table),
                search_clear,
                overlay,
            }
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &UiStyles) {
    let text = match &state.load {
        LoadState::Succeeded => {
            let shown = state.filtered().len();
            let total = state.records().len();
            format!("{shown} of {total} users  |  /: search  Enter: details  d: delete  q: quit")
        }
        _ => "q: quit".to_string(),
    };
    frame.render_widget(Paragraph::new(Span::styled(text, styles.hint)), area);
}
