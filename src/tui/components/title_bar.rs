//! # TitleBar Component
//!
//! Top status bar showing what happened to the record last.
//!
//! ## Conditional Formatting
//!
//! 1. **Unsaved edits**: `"Reframe | Saved at 10:42:07 | ● Unsaved"`
//! 2. **Status message**: `"Reframe | Saved at 10:42:07"`
//! 3. **Default**: `"Reframe"`
//!
//! TitleBar is purely presentational; both props come from the core `App`.

use crate::tui::component::Component;
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Top status bar.
///
/// # Props
///
/// - `status_message`: Transient status (e.g. "Saved at 10:42:07")
/// - `dirty`: Whether the record changed since the last save
pub struct TitleBar {
    pub status_message: String,
    pub dirty: bool,
}

impl TitleBar {
    pub fn new(status_message: String, dirty: bool) -> Self {
        Self {
            status_message,
            dirty,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled("Reframe", theme::subheader_style())];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        if self.dirty {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("● Unsaved", Style::default().fg(theme::ACCENT)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_unsaved_edits() {
        let text = render_text(&mut TitleBar::new("Saved at 10:42:07".to_string(), true));
        assert!(text.starts_with("Reframe | Saved at 10:42:07 | ● Unsaved"));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = render_text(&mut TitleBar::new("New thought record".to_string(), false));
        assert!(text.contains("New thought record"));
        assert!(!text.contains("Unsaved"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = render_text(&mut TitleBar::new(String::new(), false));
        assert!(text.starts_with("Reframe"));
        assert!(!text.contains('|'));
    }
}
