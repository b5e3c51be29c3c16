//! Layout primitives the form is assembled from: `FormContainer`,
//! `SubHeader`, `Row` and `RoundedButton`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme;

const SUB_HEADER_HEIGHT: u16 = 1;

/// One-line section title.
pub struct SubHeader<'a> {
    pub title: &'a str,
}

impl Component for SubHeader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(self.title, theme::subheader_style()), area);
    }
}

/// A titled section: sub-header, content, then spacing.
pub struct FormContainer<'a> {
    title: &'a str,
}

impl<'a> FormContainer<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Total rows for a container wrapping `content_height` rows.
    pub fn height(content_height: u16) -> u16 {
        SUB_HEADER_HEIGHT + content_height + theme::CONTAINER_SPACING
    }

    /// Draw the sub-header and return the area left for the content.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let [header, content, _] = Layout::vertical([
            Constraint::Length(SUB_HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(theme::CONTAINER_SPACING),
        ])
        .areas(area);
        SubHeader { title: self.title }.render(frame, header);
        content
    }
}

/// Horizontal row placement.
pub struct Row;

impl Row {
    /// Place a child of `width` columns at the end of `area`.
    pub fn justify_end(area: Rect, width: u16) -> Rect {
        let [child] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::End)
            .areas(area);
        child
    }
}

/// A rounded, bordered push button.
pub struct RoundedButton<'a> {
    pub title: &'a str,
    pub disabled: bool,
    pub focused: bool,
}

impl RoundedButton<'_> {
    /// Columns needed: border + one space either side of the title.
    pub fn width(&self) -> u16 {
        self.title.width() as u16 + 4
    }
}

impl Component for RoundedButton<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.disabled {
            Style::default().fg(theme::DISABLED)
        } else if self.focused {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(if self.disabled {
                style
            } else {
                theme::border_style(self.focused)
            });

        let button = Paragraph::new(self.title)
            .alignment(Alignment::Center)
            .style(style)
            .block(block);
        frame.render_widget(button, area);
    }
}
