//! Horizontal windowing for single-line text in fixed-width cells.
//!
//! Offsets are byte offsets into UTF-8 strings and always land on char boundaries.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

fn floor_char_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while idx > 0 && !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Number of leading bytes of `text` that fit into `max_width` cells.
pub fn fit_width(text: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in text.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    end
}

/// Byte span `[start, end)` of `text` to show in `width` cells with `cursor` visible.
///
/// One cell is kept free for the cursor itself when it sits past the last char.
pub fn visible_span(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let cursor = floor_char_boundary(text, cursor);
    if width == 0 {
        return (cursor, cursor);
    }

    let mut start = 0usize;
    if display_width(&text[..cursor]) >= width {
        let mut used = 0usize;
        start = cursor;
        for (idx, ch) in text[..cursor].char_indices().rev() {
            let w = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used + w > width - 1 {
                break;
            }
            used += w;
            start = idx;
        }
    }

    let end = start + fit_width(&text[start..], width);
    (start, end)
}
