use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ThoughtForm, TitleBar};
use crate::tui::theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::Span;

const HELP_TEXT: &str =
    " Tab Next  Shift+Tab Prev  Enter Submit  Ctrl+J Newline  Ctrl+S Save  Esc Done/Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, form_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.status_message.clone(), app.dirty).render(frame, title_area);
    ThoughtForm::new(&mut tui.form, &app.thought).render(frame, form_area);
    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(theme::PLACEHOLDER)),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_draw_ui_composes_title_form_and_help() {
        let app = test_app();
        let mut tui = TuiState::new();

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.starts_with("Reframe | New thought record"));
        assert!(text.contains("Automatic Thought"));
        assert!(text.contains("Ctrl+S Save"));
    }
}
