//! Detail overlay rendering.
//!
//! A centered panel over a dimmed table, mounted only while a record is
//! selected. Shows the contact, address, and company groups plus the
//! posts section, with its own scroll. Reports the panel, close
//! affordance, and post title rows for mouse hit-testing.

use crate::model::User;
use crate::state::{AppState, OverlayRegions};
use crate::view::posts::posts_section;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Close affordance drawn on the top border.
const CLOSE_MARKER: &str = "[x]";

/// Panel rect: centered, capped at 64 columns.
fn panel_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(64).max(20);
    let height = area.height.saturating_sub(4).min(22).max(8);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

/// Build the detail section lines for one record.
fn detail_lines(user: &User, styles: &UiStyles) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Contact", styles.section)),
        Line::from(format!("email:   mailto:{}", user.email)),
        Line::from(format!("phone:   {}", user.phone)),
        Line::from(format!("website: {}", user.website)),
        Line::default(),
        Line::from(Span::styled("Address", styles.section)),
        Line::from(format!("{}, {}", user.address.street, user.address.suite)),
        Line::from(format!("{} {}", user.address.city, user.address.zipcode)),
        Line::from(format!(
            "geo: {}, {}",
            user.address.geo.lat, user.address.geo.lng
        )),
        Line::default(),
        Line::from(Span::styled("Company", styles.section)),
        Line::from(user.company.name.clone()),
        Line::from(user.company.catch_phrase.clone()),
        Line::from(user.company.bs.clone()),
        Line::default(),
    ]
}

/// Render the overlay, if open; returns its clickable geometry.
pub fn render_overlay(frame: &mut Frame, state: &AppState, styles: &UiStyles) -> Option<OverlayRegions> {
    let user = state.selected_user()?;
    let modal = state.modal.as_ref()?;

    let panel = panel_rect(frame.area());
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", user.name));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    // Body: detail sections followed by the posts section.
    let mut lines = detail_lines(user, styles);
    let posts_offset = lines.len();
    let posts = posts_section(&state.posts, inner.width, styles);
    lines.extend(posts.lines);

    // Scroll by slicing so line indices map directly onto screen rows.
    let scroll = modal.scroll().min(lines.len().saturating_sub(1));
    let visible_end = (scroll + inner.height as usize).min(lines.len());
    let visible: Vec<Line<'static>> = lines[scroll..visible_end].to_vec();
    frame.render_widget(Paragraph::new(visible), inner);

    let post_rows: Vec<(u16, usize)> = posts
        .title_indices
        .iter()
        .filter_map(|&(line_index, post_index)| {
            let absolute = posts_offset + line_index;
            if absolute < scroll || absolute >= visible_end {
                return None;
            }
            Some((inner.y + (absolute - scroll) as u16, post_index))
        })
        .collect();

    // Close affordance over the top border, right corner.
    let close = Rect::new(
        panel.x + panel.width.saturating_sub(5),
        panel.y,
        CLOSE_MARKER.len() as u16,
        1,
    );
    frame.render_widget(Paragraph::new(CLOSE_MARKER), close);

    // Dismissal hints on the bottom border.
    if panel.width > 40 {
        let hint = " Esc/x: close  j/k: posts  Enter: expand ";
        let hint_rect = Rect::new(
            panel.x + 2,
            panel.y + panel.height - 1,
            (hint.len() as u16).min(panel.width - 4),
            1,
        );
        frame.render_widget(Paragraph::new(Span::styled(hint, styles.hint)), hint_rect);
    }

    Some(OverlayRegions {
        panel,
        close,
        post_rows,
    })
}
