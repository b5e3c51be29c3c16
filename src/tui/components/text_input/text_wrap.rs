//! Hard wrapping and dimensional constants for `TextInput`.
//!
//! Rows are byte ranges into the value, so cursor math never has to guess
//! what a wrapping library trimmed. A row never contains a `\n`; the byte
//! between two logical lines belongs to neither row.

use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Maximum visible content lines before internal scrolling kicks in
pub(super) const MAX_VISIBLE_LINES: u16 = 5;
/// Offset from area edge to the first content column (border + padding)
pub(super) const CONTENT_X_OFFSET: u16 = 2;
/// Offset from area edge to the first content row (border)
pub(super) const CONTENT_Y_OFFSET: u16 = 1;

/// Width available to text inside a box of `outer_width` columns.
pub(super) fn inner_width(outer_width: u16) -> u16 {
    outer_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub(super) fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Split `text` into visual rows no wider than `width` columns.
///
/// Rows break after the last ASCII space that fits, or mid-word when a
/// word is wider than the row. Spaces stay at the end of the row they
/// follow, so the ranges still cover every byte of a logical line.
///
/// A logical line that exactly fills its last row gets an extra empty
/// row, so a cursor at its end has a column to sit in.
///
/// Always returns at least one row; an empty logical line yields an empty row.
pub(super) fn visual_rows(text: &str, width: u16) -> Vec<Range<usize>> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let line_end = line_start + line.len();
        let mut row_start = line_start;
        let mut row_width = 0;
        // Byte offset just past the last space in the current row
        let mut break_after: Option<usize> = None;

        for (i, c) in line.char_indices() {
            let at = line_start + i;
            let w = char_width(c);
            if row_width > 0 && row_width + w > width {
                if let Some(after) = break_after.take().filter(|&a| a > row_start) {
                    rows.push(row_start..after);
                    row_start = after;
                    row_width = display_width(&text[after..at]);
                }
                if row_width > 0 && row_width + w > width {
                    rows.push(row_start..at);
                    row_start = at;
                    row_width = 0;
                }
            }
            row_width += w;
            if c == ' ' {
                break_after = Some(at + 1);
            }
        }

        rows.push(row_start..line_end);
        if row_width >= width {
            rows.push(line_end..line_end);
        }
        line_start = line_end + 1;
    }

    rows
}

/// Row index and display column of byte offset `pos`.
///
/// At a soft wrap the cursor belongs to the start of the later row.
pub(super) fn locate(text: &str, rows: &[Range<usize>], pos: usize) -> (usize, usize) {
    let row = rows.iter().rposition(|r| r.start <= pos).unwrap_or(0);
    let range = &rows[row];
    let end = pos.clamp(range.start, range.end);
    (row, display_width(&text[range.start..end]))
}

/// Byte offset within `row` whose display column is closest to `column`
/// without passing it.
///
/// The end of a soft-wrapped row is the start of the next one, so the
/// result stays before the row's last character in that case.
pub(super) fn offset_at_column(text: &str, row: &Range<usize>, column: usize) -> usize {
    let mut acc = 0;
    for (i, c) in text[row.clone()].char_indices() {
        let w = char_width(c);
        if acc + w > column {
            return row.start + i;
        }
        acc += w;
    }
    let soft_wrapped = row.end < text.len() && !text[row.end..].starts_with('\n');
    if soft_wrapped && row.end > row.start {
        prev_char_boundary(text, row.end)
    } else {
        row.end
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}
