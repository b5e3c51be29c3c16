//! # TextInput Component
//!
//! A controlled, auto-growing text field.
//!
//! ## Responsibilities
//!
//! - Render the value (a prop) in a rounded bordered box
//! - Show the placeholder in a muted color while the value is empty
//! - Grow with its content up to `MAX_VISIBLE_LINES`, then scroll internally
//! - Turn editing keys into the *next* value and report it upward
//!
//! ## State Management
//!
//! The value belongs to the parent. An edit produces
//! `TextInputEvent::Changed { text, cursor }` and nothing is buffered
//! here: until the parent passes a new value back in, the old one keeps
//! rendering. Only the cursor and scroll offset live in `TextInputState`.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, prev_char_boundary,
    visual_rows,
};

/// High-level events emitted by a text input.
#[derive(Debug, Clone, PartialEq)]
pub enum TextInputEvent {
    /// The edited value, with the cursor's byte offset inside it.
    Changed { text: String, cursor: usize },
    /// Return key pressed.
    Submit,
}

/// Persistent per-field state: cursor and scroll only.
pub struct TextInputState {
    cursor: CursorState,
}

impl Default for TextInputState {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInputState {
    pub fn new() -> Self {
        Self {
            cursor: CursorState::new(),
        }
    }

    /// Cursor byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor.pos
    }

    /// Place the cursor, e.g. after the parent rewrote the emitted text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor.pos = pos;
    }

    /// Translate an editing event against the current `value`.
    ///
    /// `outer_width` is the width the field was last rendered at; it only
    /// matters for moving between wrapped rows.
    pub fn handle_event(
        &mut self,
        value: &str,
        outer_width: u16,
        event: &TuiEvent,
    ) -> Option<TextInputEvent> {
        self.cursor.clamp(value);
        let pos = self.cursor.pos;

        match event {
            TuiEvent::InputChar(c) => {
                let mut text = value.to_string();
                text.insert(pos, *c);
                Some(self.changed(text, pos + c.len_utf8()))
            }
            TuiEvent::Paste(pasted) => {
                let mut text = value.to_string();
                text.insert_str(pos, pasted);
                Some(self.changed(text, pos + pasted.len()))
            }
            TuiEvent::Backspace => {
                if pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(value, pos);
                let mut text = value.to_string();
                text.drain(prev..pos);
                Some(self.changed(text, prev))
            }
            TuiEvent::Delete => {
                if pos >= value.len() {
                    return None;
                }
                let next = next_char_boundary(value, pos);
                let mut text = value.to_string();
                text.drain(pos..next);
                Some(self.changed(text, pos))
            }
            TuiEvent::CursorLeft => {
                self.cursor.pos = prev_char_boundary(value, pos);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.pos = next_char_boundary(value, pos);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = value[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = value[pos..]
                    .find('\n')
                    .map(|i| pos + i)
                    .unwrap_or(value.len());
                None
            }
            TuiEvent::CursorUp => {
                self.cursor.move_vertically(value, true, outer_width);
                None
            }
            TuiEvent::CursorDown => {
                self.cursor.move_vertically(value, false, outer_width);
                None
            }
            TuiEvent::Submit => Some(TextInputEvent::Submit),
            _ => None,
        }
    }

    fn changed(&mut self, text: String, cursor: usize) -> TextInputEvent {
        self.cursor.pos = cursor;
        TextInputEvent::Changed { text, cursor }
    }
}

/// Transient render wrapper for one text field.
///
/// # Props
///
/// - `value`: current text from the record snapshot
/// - `placeholder`: shown muted while `value` is empty
/// - `focused`: draws the accent border and places the terminal cursor
pub struct TextInput<'a> {
    state: &'a mut TextInputState,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(
        state: &'a mut TextInputState,
        value: &'a str,
        placeholder: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            state,
            value,
            placeholder,
            focused,
        }
    }

    /// Rows needed to show `value` in a box `outer_width` columns wide.
    pub fn height(value: &str, outer_width: u16) -> u16 {
        let rows = visual_rows(value, inner_width(outer_width)).len() as u16;
        (rows.clamp(1, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD).max(theme::MIN_FIELD_HEIGHT)
    }
}

impl Component for TextInput<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.cursor.clamp(self.value);
        self.state.cursor.update_scroll_offset(self.value, area.width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::border_style(self.focused))
            .padding(Padding::horizontal(1));

        let paragraph = if self.value.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(theme::PLACEHOLDER))
        } else {
            let lines: Vec<Line> = visual_rows(self.value, inner_width(area.width))
                .into_iter()
                .skip(usize::from(self.state.cursor.scroll_offset))
                .take(usize::from(MAX_VISIBLE_LINES))
                .map(|row| Line::raw(self.value[row].replace('\r', "")))
                .collect();
            Paragraph::new(lines).style(Style::default().fg(theme::TEXT))
        };

        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            frame.set_cursor_position(self.state.cursor.screen_pos(self.value, area));
        }
    }
}
