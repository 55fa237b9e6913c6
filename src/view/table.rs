//! User table rendering.
//!
//! One row per filtered record, in array order, no pagination. The
//! header row always renders; zero rows (empty source set or an
//! exhausting filter) leaves the shell with an empty body, which is not
//! an error state. Blank sub-fields render as empty cells.

use crate::state::{AppState, TableRegions};
use crate::view::helpers::fit_width;
use crate::view::styles::UiStyles;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Column rects for one table area, in render order.
struct Columns {
    name: Rect,
    username: Rect,
    email: Rect,
    company: Rect,
    website: Rect,
    delete: Rect,
}

/// Split a table body into its columns. The same split drives rendering
/// and mouse hit-testing, so clicks always agree with what is on screen.
fn column_layout(area: Rect) -> Columns {
    let rects = Layout::horizontal([
        Constraint::Min(14),    // name
        Constraint::Length(12), // username
        Constraint::Min(18),    // email
        Constraint::Min(12),    // company
        Constraint::Length(16), // website
        Constraint::Length(3),  // delete affordance
    ])
    .spacing(1)
    .split(area);

    Columns {
        name: rects[0],
        username: rects[1],
        email: rects[2],
        company: rects[3],
        website: rects[4],
        delete: rects[5],
    }
}

/// Render the user table and report its clickable geometry.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &UiStyles,
) -> TableRegions {
    let block = Block::default().borders(Borders::ALL).title(" Users ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = column_layout(inner);
    let filtered = state.filtered();
    let offset = state.cursor.offset();

    // Header row.
    let header_cells: [(&str, Rect); 6] = [
        ("Name", columns.name),
        ("Username", columns.username),
        ("Email", columns.email),
        ("Company", columns.company),
        ("Website", columns.website),
        ("Del", columns.delete),
    ];
    for (label, rect) in header_cells {
        let cell = Rect::new(rect.x, inner.y, rect.width, 1);
        frame.render_widget(
            Paragraph::new(fit_width(label, cell.width)).style(styles.table_header),
            cell,
        );
    }

    let body = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );

    let visible_rows = body.height as usize;
    for (line, user) in filtered.iter().skip(offset).take(visible_rows).enumerate() {
        let y = body.y + line as u16;
        let row_index = offset + line;

        if row_index == state.cursor.index() {
            let row_rect = Rect::new(body.x, y, body.width, 1);
            frame.render_widget(Block::default().style(styles.row_cursor), row_rect);
        }

        let cells: [(&str, Rect); 6] = [
            (user.name.as_str(), columns.name),
            (user.username.as_str(), columns.username),
            (user.email.as_str(), columns.email),
            (user.company.name.as_str(), columns.company),
            (user.website.as_str(), columns.website),
            ("✕", columns.delete),
        ];
        for (text, rect) in cells {
            let cell = Rect::new(rect.x, y, rect.width, 1);
            frame.render_widget(Paragraph::new(fit_width(text, cell.width)), cell);
        }
    }

    TableRegions {
        body,
        website: columns.website,
        delete: columns.delete,
        offset,
        row_count: filtered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Company, User, UserId};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn user(id: i64, name: &str, website: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            username: "user".to_string(),
            email: "user@example.com".to_string(),
            website: website.to_string(),
            company: Company {
                name: "Co".to_string(),
                ..Company::default()
            },
            ..User::default()
        }
    }

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
    fn headers_render_even_with_zero_rows() {
        let state = AppState::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| {
                render_table(frame, frame.area(), &state, &UiStyles::new());
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Name"));
        assert!(text.contains("Email"));
        assert!(text.contains("Website"));
    }

    #[test]
    fn rows_render_in_array_order() {
        let mut state = AppState::new();
        state.resolve_users(Ok(vec![
            user(1, "John Doe", "example.com"),
            user(2, "Jane Smith", "smith.org"),
        ]));
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| {
                render_table(frame, frame.area(), &state, &UiStyles::new());
            })
            .unwrap();
        let text = buffer_text(&terminal);
        let john = text.find("John Doe").expect("John row missing");
        let jane = text.find("Jane Smith").expect("Jane row missing");
        assert!(john < jane, "rows must keep arrival order");
    }

    #[test]
    fn blank_fields_render_as_empty_cells_without_panicking() {
        let mut state = AppState::new();
        state.resolve_users(Ok(vec![User {
            id: UserId::new(1),
            ..User::default()
        }]));
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| {
                render_table(frame, frame.area(), &state, &UiStyles::new());
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(!text.contains("undefined"));
    }

    #[test]
    fn regions_reflect_the_filtered_row_count() {
        let mut state = AppState::new();
        state.resolve_users(Ok(vec![
            user(1, "John Doe", "example.com"),
            user(2, "Jane Smith", "smith.org"),
        ]));
        state.set_search("John");
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut regions = None;
        terminal
            .draw(|frame| {
                regions = Some(render_table(frame, frame.area(), &state, &UiStyles::new()));
            })
            .unwrap();
        let regions = regions.unwrap();
        assert_eq!(regions.row_count, 1);
        assert_eq!(regions.offset, 0);
        // The delete column sits to the right of the website column.
        assert!(regions.delete.x > regions.website.x);
    }
}
