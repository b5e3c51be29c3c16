//! # RoundedSelector Component
//!
//! A wrap-around row of rounded "pills", one per category label.
//! Selected pills are filled with the accent color; when the selector has
//! focus, the keyboard highlight is drawn reversed.
//!
//! Selection itself is a prop (`CognitiveDistortion::selected`). Pressing
//! a pill only reports its label; the parent decides what that means.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::thought::CognitiveDistortion;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

const PILL_OPEN: &str = "( ";
const PILL_CLOSE: &str = " )";
/// Blank columns between neighbouring pills.
const PILL_GAP: usize = 1;

/// Events emitted by the selector.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    Press(String),
}

/// Persistent state: which pill the keyboard highlight is on.
#[derive(Debug, Default)]
pub struct SelectorState {
    pub highlighted: usize,
}

impl SelectorState {
    pub fn handle_event(
        &mut self,
        items: &[CognitiveDistortion],
        event: &TuiEvent,
    ) -> Option<SelectorEvent> {
        if items.is_empty() {
            return None;
        }
        self.highlighted = self.highlighted.min(items.len() - 1);

        match event {
            TuiEvent::CursorLeft | TuiEvent::CursorUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight | TuiEvent::CursorDown => {
                self.highlighted = (self.highlighted + 1).min(items.len() - 1);
                None
            }
            TuiEvent::CursorHome => {
                self.highlighted = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.highlighted = items.len() - 1;
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                Some(SelectorEvent::Press(items[self.highlighted].label.clone()))
            }
            _ => None,
        }
    }
}

fn pill_width(label: &str) -> usize {
    PILL_OPEN.len() + label.width() + PILL_CLOSE.len()
}

/// Greedily pack pills into lines no wider than `width`.
///
/// Returns item indices per line. A pill wider than `width` gets a line of
/// its own.
pub fn layout_pills(labels: &[&str], width: u16) -> Vec<Vec<usize>> {
    let width = usize::from(width);
    let mut lines: Vec<Vec<usize>> = Vec::new();
    let mut used = 0;

    for (i, label) in labels.iter().enumerate() {
        let w = pill_width(label);
        match lines.last_mut() {
            Some(line) if used + PILL_GAP + w <= width => {
                line.push(i);
                used += PILL_GAP + w;
            }
            _ => {
                lines.push(vec![i]);
                used = w;
            }
        }
    }

    lines
}

/// Transient render wrapper for the selector.
pub struct RoundedSelector<'a> {
    state: &'a SelectorState,
    items: &'a [CognitiveDistortion],
    focused: bool,
}

impl<'a> RoundedSelector<'a> {
    pub fn new(state: &'a SelectorState, items: &'a [CognitiveDistortion], focused: bool) -> Self {
        Self {
            state,
            items,
            focused,
        }
    }

    pub fn height(items: &[CognitiveDistortion], width: u16) -> u16 {
        let labels: Vec<&str> = items.iter().map(|d| d.label.as_str()).collect();
        (layout_pills(&labels, width).len() as u16).max(1)
    }

    fn pill_style(&self, index: usize) -> Style {
        let item = &self.items[index];
        let mut style = if item.selected {
            Style::default()
                .fg(Color::Black)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT)
        };
        if self.focused && index == self.state.highlighted {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }
}

impl Component for RoundedSelector<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty = Paragraph::new("No categories configured")
                .style(Style::default().fg(theme::PLACEHOLDER));
            frame.render_widget(empty, area);
            return;
        }

        let labels: Vec<&str> = self.items.iter().map(|d| d.label.as_str()).collect();
        let lines: Vec<Line> = layout_pills(&labels, area.width)
            .into_iter()
            .map(|indices| {
                let mut spans = Vec::with_capacity(indices.len() * 2);
                for (n, i) in indices.into_iter().enumerate() {
                    if n > 0 {
                        spans.push(Span::raw(" ".repeat(PILL_GAP)));
                    }
                    spans.push(Span::styled(
                        format!("{PILL_OPEN}{}{PILL_CLOSE}", labels[i]),
                        self.pill_style(i),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}
