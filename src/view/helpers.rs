//! Small text helpers shared by the rendering widgets.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to fit in `width` columns, ending with an ellipsis
/// when anything was cut. Width-aware, so wide glyphs never overflow a
/// column.
pub(crate) fn fit_width(text: &str, width: u16) -> String {
    let width = width as usize;
    if width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns. Newlines in the input are
/// respected; words longer than a full line are split mid-word.
#[allow(unused_assignments)]
pub(crate) fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = (width as usize).max(1);
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_width = 0;
        for word in raw_line.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            let sep = usize::from(!current.is_empty());
            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Word longer than a line: hard-split it.
                let mut piece_width = 0;
                for ch in word.chars() {
                    let w = UnicodeWidthChar::width(ch).unwrap_or(0);
                    if piece_width + w > width {
                        lines.push(std::mem::take(&mut current));
                        piece_width = 0;
                    }
                    current.push(ch);
                    piece_width += w;
                }
                current_width = piece_width;
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
