//! Mouse event handling.
//!
//! The view records where it drew the interactive regions each frame;
//! hit-testing here maps click coordinates back onto state transitions.
//! The same input ownership order as the keyboard applies: while the
//! overlay is open every click belongs to it, and only a click on the
//! backdrop, outside the panel, dismisses it.

use crate::state::{AppState, InputOutcome};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Lines a scroll-wheel notch moves.
const WHEEL_STEP: usize = 3;

/// Where the interactive parts of the frame were last drawn.
///
/// Rebuilt by the view on every draw; `None` fields mean the region was
/// not rendered this frame (for example no table while the load is
/// pending, no overlay without a selection).
#[derive(Debug, Clone, Default)]
pub struct ScreenRegions {
    /// Table row region and its column split.
    pub table: Option<TableRegions>,
    /// The search bar's clear affordance, when visible.
    pub search_clear: Option<Rect>,
    /// The overlay panel, when open.
    pub overlay: Option<OverlayRegions>,
}

/// The table's clickable geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRegions {
    /// Row region beneath the header line.
    pub body: Rect,
    /// Horizontal span of the website column. Clicks here must not
    /// select the row.
    pub website: Rect,
    /// Horizontal span of the per-row delete affordance. Clicks here
    /// delete and must not select.
    pub delete: Rect,
    /// Index of the first visible row (scroll offset).
    pub offset: usize,
    /// Rows in the filtered view.
    pub row_count: usize,
}

/// The overlay's clickable geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRegions {
    /// The panel rect. Clicks inside never dismiss.
    pub panel: Rect,
    /// The close affordance on the panel border.
    pub close: Rect,
    /// Visible post title rows as (absolute y, post index) pairs.
    pub post_rows: Vec<(u16, usize)>,
}

/// What a click in the table area landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    /// A row, outside the delete and website columns.
    SelectRow(usize),
    /// The delete affordance of a row.
    DeleteRow(usize),
    /// The website column of a row; informational only.
    WebsiteCell,
    /// Header, empty space below the rows, or outside the table.
    Miss,
}

/// What a click landed on while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayHit {
    /// Outside the panel; dismisses.
    Backdrop,
    /// The close affordance; dismisses.
    Close,
    /// A post title row inside the panel.
    TogglePost(usize),
    /// Inside the panel but not on anything interactive.
    Panel,
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Map click coordinates onto the table geometry.
pub fn detect_table_hit(x: u16, y: u16, regions: &TableRegions) -> TableHit {
    if !contains(regions.body, x, y) {
        return TableHit::Miss;
    }

    let row = regions.offset + (y - regions.body.y) as usize;
    if row >= regions.row_count {
        return TableHit::Miss;
    }

    if x >= regions.delete.x && x < regions.delete.x + regions.delete.width {
        TableHit::DeleteRow(row)
    } else if x >= regions.website.x && x < regions.website.x + regions.website.width {
        TableHit::WebsiteCell
    } else {
        TableHit::SelectRow(row)
    }
}

/// Map click coordinates onto the overlay geometry.
pub fn detect_overlay_hit(x: u16, y: u16, regions: &OverlayRegions) -> OverlayHit {
    if contains(regions.close, x, y) {
        return OverlayHit::Close;
    }
    if !contains(regions.panel, x, y) {
        return OverlayHit::Backdrop;
    }
    for &(row_y, index) in &regions.post_rows {
        if y == row_y {
            return OverlayHit::TogglePost(index);
        }
    }
    OverlayHit::Panel
}

/// Apply one mouse event to the state.
pub fn handle_mouse(
    state: &mut AppState,
    event: MouseEvent,
    regions: &ScreenRegions,
) -> InputOutcome {
    if state.is_overlay_open() {
        overlay_mouse(state, event, regions);
        return InputOutcome::Continue;
    }
    table_mouse(state, event, regions)
}

/// Mouse events while the overlay holds the input lock.
fn overlay_mouse(state: &mut AppState, event: MouseEvent, regions: &ScreenRegions) {
    let Some(overlay) = regions.overlay.as_ref() else {
        return;
    };
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match detect_overlay_hit(event.column, event.row, overlay) {
                OverlayHit::Backdrop | OverlayHit::Close => state.deselect(),
                OverlayHit::TogglePost(index) => {
                    state.posts.set_cursor(index);
                    state.posts.toggle_expanded();
                }
                OverlayHit::Panel => {}
            }
        }
        MouseEventKind::ScrollDown => {
            let max = state.overlay_content_lines();
            if let Some(modal) = state.modal.as_mut() {
                modal.scroll_down(WHEEL_STEP, max);
            }
        }
        MouseEventKind::ScrollUp => {
            if let Some(modal) = state.modal.as_mut() {
                modal.scroll_up(WHEEL_STEP);
            }
        }
        _ => {}
    }
}

/// Mouse events in table mode.
fn table_mouse(state: &mut AppState, event: MouseEvent, regions: &ScreenRegions) -> InputOutcome {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(clear) = regions.search_clear {
                if contains(clear, event.column, event.row) {
                    state.set_search("");
                    return InputOutcome::Continue;
                }
            }
            let Some(table) = regions.table.as_ref() else {
                return InputOutcome::Continue;
            };
            match detect_table_hit(event.column, event.row, table) {
                TableHit::SelectRow(row) => {
                    state.cursor.set_index(row, table.row_count);
                    let id = state.filtered().get(row).map(|user| user.id);
                    if let Some(id) = id {
                        if let Some(fetch) = state.select(id) {
                            return InputOutcome::LoadPosts(fetch);
                        }
                    }
                }
                TableHit::DeleteRow(row) => {
                    let id = state.filtered().get(row).map(|user| user.id);
                    if let Some(id) = id {
                        state.delete(id);
                    }
                }
                TableHit::WebsiteCell | TableHit::Miss => {}
            }
        }
        MouseEventKind::ScrollDown => {
            let rows = state.filtered().len();
            state.cursor.move_down(rows);
        }
        MouseEventKind::ScrollUp => state.cursor.move_up(),
        _ => {}
    }
    InputOutcome::Continue
}

// ===== Tests =====
