//! Cursor position tracking for `TextInput`.
//!
//! `CursorState` owns the cursor byte offset and scroll offset. The text is
//! a prop owned by the parent, so every method takes `value: &str` and the
//! cursor is re-clamped whenever the parent hands over a new snapshot.

use super::text_wrap::{
    CONTENT_X_OFFSET, CONTENT_Y_OFFSET, MAX_VISIBLE_LINES, inner_width, locate,
    offset_at_column, visual_rows,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Cursor position as byte offset in the value (0..=value.len())
    pub pos: usize,
    /// First visible row when content exceeds the viewport
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Keep `pos` inside `value` and on a char boundary.
    pub fn clamp(&mut self, value: &str) {
        let mut pos = self.pos.min(value.len());
        while !value.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
    }

    /// Move one visual row up (`up == true`) or down, keeping the column.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_vertically(&mut self, value: &str, up: bool, outer_width: u16) -> bool {
        let rows = visual_rows(value, inner_width(outer_width));
        let (row, column) = locate(value, &rows, self.pos);

        let target = if up {
            match row.checked_sub(1) {
                Some(r) => r,
                None => return false,
            }
        } else if row + 1 < rows.len() {
            row + 1
        } else {
            return false;
        };

        self.pos = offset_at_column(value, &rows[target], column);
        true
    }

    /// Update scroll offset to keep the cursor row inside the viewport.
    pub fn update_scroll_offset(&mut self, value: &str, outer_width: u16) {
        let rows = visual_rows(value, inner_width(outer_width));
        if rows.len() <= usize::from(MAX_VISIBLE_LINES) {
            self.scroll_offset = 0;
            return;
        }

        let (row, _) = locate(value, &rows, self.pos);
        let row = row as u16;
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = row + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Screen (column, row) of the cursor inside a box drawn at `area`.
    pub fn screen_pos(&self, value: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        let rows = visual_rows(value, width);
        let (row, column) = locate(value, &rows, self.pos);

        let column = (column as u16).min(width.saturating_sub(1));
        let visible_row = (row as u16).saturating_sub(self.scroll_offset);

        (
            area.x + CONTENT_X_OFFSET + column,
            area.y + CONTENT_Y_OFFSET + visible_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_shorter_value() {
        let mut cursor = CursorState::new();
        cursor.pos = 10;
        cursor.clamp("abc");
        assert_eq!(cursor.pos, 3);
    }

    #[test]
    fn test_clamp_to_char_boundary() {
        let mut cursor = CursorState::new();
        cursor.pos = 2;
        cursor.clamp("aé");
        assert_eq!(cursor.pos, 1);
    }

    #[test]
    fn test_move_vertically_keeps_column() {
        // Outer width 14 → 10 columns of text
        let value = "hello\nworld";
        let mut cursor = CursorState::new();
        cursor.pos = 3;

        assert!(cursor.move_vertically(value, false, 14));
        assert_eq!(cursor.pos, 9);

        assert!(!cursor.move_vertically(value, false, 14));
        assert!(cursor.move_vertically(value, true, 14));
        assert_eq!(cursor.pos, 3);
        assert!(!cursor.move_vertically(value, true, 14));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let value = "1\n2\n3\n4\n5\n6\n7";
        let mut cursor = CursorState::new();
        cursor.pos = value.len();
        cursor.update_scroll_offset(value, 20);
        assert_eq!(cursor.scroll_offset, 2);

        cursor.pos = 0;
        cursor.update_scroll_offset(value, 20);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn test_move_up_from_wrapped_row_stays_on_previous_row() {
        // 3 columns of text: "abc" | "def" | "g"
        let value = "abcdefg";
        let mut cursor = CursorState::new();
        cursor.pos = 6;
        assert!(cursor.move_vertically(value, true, 7));
        assert_eq!(cursor.pos, 3);
        cursor.pos = value.len();
        assert!(cursor.move_vertically(value, true, 7));
        assert_eq!(cursor.pos, 4);
    }

    #[test]
    fn test_screen_pos_after_full_row_moves_to_next_row() {
        // Outer width 7 → 3 columns; "abc" fills the row exactly
        let mut cursor = CursorState::new();
        cursor.pos = 3;
        let area = Rect::new(0, 0, 7, 4);
        assert_eq!(cursor.screen_pos("abc", area), (2, 2));
    }

    #[test]
    fn test_screen_pos_accounts_for_border_and_padding() {
        let mut cursor = CursorState::new();
        cursor.pos = 2;
        let area = Rect::new(5, 10, 20, 3);
        assert_eq!(cursor.screen_pos("abc", area), (9, 11));
    }
}
