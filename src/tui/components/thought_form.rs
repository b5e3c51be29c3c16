//! # ThoughtForm Component
//!
//! The thought record editor: automatic thought, cognitive distortion,
//! challenge, alternative thought, and a Save button.
//!
//! ## Responsibilities
//!
//! - Map a `ThoughtRecord` snapshot to input widgets
//! - Report edits upward as `(FieldKey, text)`, never touching the record
//! - Strip line breaks from "challenge" and "alternative thought"
//! - Move focus: challenge → alternative thought on Enter, and so on
//!
//! ## Data Flow
//!
//! ```text
//!   parent ──(&ThoughtRecord)──▶ ThoughtForm ──(FormEvent)──▶ FormCallbacks
//!      ▲                                                          │
//!      └─────────────── next snapshot ◀───────────────────────────┘
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ThoughtFormState` (focus, cursors) lives in `TuiState`
//! - `ThoughtForm` is created each frame with borrowed state and props
//!
//! Rendering is therefore a function of the props plus focus/cursor state;
//! there is no copy of the record to reconcile.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::core::thought::{FieldKey, ThoughtRecord};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::layout::{FormContainer, Row, RoundedButton};
use crate::tui::components::selector::{RoundedSelector, SelectorEvent, SelectorState};
use crate::tui::components::text_input::{TextInput, TextInputEvent, TextInputState};
use crate::tui::event::TuiEvent;
use crate::tui::theme;

const AUTOMATIC_THOUGHT_PLACEHOLDER: &str = "What's going on?";
const CHALLENGE_PLACEHOLDER: &str = "Debate that thought!";
const ALTERNATIVE_THOUGHT_PLACEHOLDER: &str = "What should we think instead?";
const SAVE_TITLE: &str = "Save";

/// Remove every `\n` and `\r`, keeping all other characters in order.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// The parent's side of the form.
pub trait FormCallbacks {
    fn on_save(&mut self);
    fn on_select_cognitive_distortion(&mut self, label: &str);
    fn on_text_change(&mut self, key: FieldKey, text: &str);
}

/// High-level events emitted by the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Save,
    SelectCognitiveDistortion(String),
    TextChange(FieldKey, String),
}

impl FormEvent {
    /// Invoke the one callback this event stands for.
    pub fn dispatch(self, callbacks: &mut impl FormCallbacks) {
        match self {
            FormEvent::Save => callbacks.on_save(),
            FormEvent::SelectCognitiveDistortion(label) => {
                callbacks.on_select_cognitive_distortion(&label)
            }
            FormEvent::TextChange(key, text) => callbacks.on_text_change(key, &text),
        }
    }
}

/// Everything in the form that can hold keyboard focus, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    AutomaticThought,
    CognitiveDistortion,
    Challenge,
    AlternativeThought,
    Save,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::AutomaticThought,
        FormField::CognitiveDistortion,
        FormField::Challenge,
        FormField::AlternativeThought,
        FormField::Save,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The record field a text input edits, if this is one.
    pub fn text_key(self) -> Option<FieldKey> {
        match self {
            FormField::AutomaticThought => Some(FieldKey::AutomaticThought),
            FormField::Challenge => Some(FieldKey::Challenge),
            FormField::AlternativeThought => Some(FieldKey::AlternativeThought),
            FormField::CognitiveDistortion | FormField::Save => None,
        }
    }
}

/// Exclusive, short-lived handle to one focusable field.
pub struct FocusHandle<'a> {
    focused: &'a mut Option<FormField>,
    field: FormField,
}

impl FocusHandle<'_> {
    pub fn focus(self) {
        *self.focused = Some(self.field);
    }
}

/// Persistent form state: focus plus per-widget cursors.
pub struct ThoughtFormState {
    focused: Option<FormField>,
    automatic_thought: TextInputState,
    challenge: TextInputState,
    alternative_thought: TextInputState,
    distortions: SelectorState,
    /// Outer width of the text inputs at the last render.
    field_width: u16,
}

impl Default for ThoughtFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThoughtFormState {
    /// The automatic thought field starts focused.
    pub fn new() -> Self {
        Self {
            focused: Some(FormField::AutomaticThought),
            automatic_thought: TextInputState::new(),
            challenge: TextInputState::new(),
            alternative_thought: TextInputState::new(),
            distortions: SelectorState::default(),
            field_width: 80,
        }
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    pub fn handle(&mut self, field: FormField) -> FocusHandle<'_> {
        FocusHandle {
            focused: &mut self.focused,
            field,
        }
    }

    /// Drop focus from every field (the terminal stand-in for hiding the
    /// on-screen keyboard).
    pub fn dismiss_keyboard(&mut self) {
        self.focused = None;
    }

    fn input_mut(&mut self, key: FieldKey) -> &mut TextInputState {
        match key {
            FieldKey::AutomaticThought => &mut self.automatic_thought,
            FieldKey::Challenge => &mut self.challenge,
            FieldKey::AlternativeThought => &mut self.alternative_thought,
        }
    }
}

/// Transient render/event wrapper around the form.
///
/// # Props
///
/// - `thought`: the record snapshot to show; read-only
pub struct ThoughtForm<'a> {
    state: &'a mut ThoughtFormState,
    thought: &'a ThoughtRecord,
}

impl<'a> ThoughtForm<'a> {
    pub fn new(state: &'a mut ThoughtFormState, thought: &'a ThoughtRecord) -> Self {
        Self { state, thought }
    }

    /// Inset applied around the whole form.
    fn content_area(area: Rect) -> Rect {
        area.inner(Margin {
            horizontal: theme::FORM_SIDE_MARGIN,
            vertical: 0,
        })
    }

    /// Heights of the four containers and the button row for a given content width.
    fn section_heights(&self, width: u16) -> [u16; 5] {
        [
            FormContainer::height(TextInput::height(&self.thought.automatic_thought, width)),
            FormContainer::height(RoundedSelector::height(
                &self.thought.cognitive_distortions,
                width,
            )),
            FormContainer::height(TextInput::height(&self.thought.challenge, width)),
            FormContainer::height(TextInput::height(&self.thought.alternative_thought, width)),
            theme::BUTTON_HEIGHT,
        ]
    }

    /// Rows the form needs when drawn `width` columns wide.
    pub fn required_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2 * theme::FORM_SIDE_MARGIN);
        theme::FORM_TOP_MARGIN + self.section_heights(inner).iter().sum::<u16>()
    }

    fn is_focused(&self, field: FormField) -> bool {
        self.state.focused == Some(field)
    }

    fn handle_text_event(&mut self, key: FieldKey, event: &TuiEvent) -> Option<FormEvent> {
        let thought = self.thought;
        let value = thought.field(key);
        let width = self.state.field_width;
        let input = self.state.input_mut(key);

        match input.handle_event(value, width, event)? {
            TextInputEvent::Changed { text, cursor } => {
                let text = match key {
                    FieldKey::AutomaticThought => text,
                    FieldKey::Challenge | FieldKey::AlternativeThought => {
                        let (head, tail) = text.split_at(cursor);
                        let head = strip_line_breaks(head);
                        input.set_cursor(head.len());
                        head + &strip_line_breaks(tail)
                    }
                };
                Some(FormEvent::TextChange(key, text))
            }
            TextInputEvent::Submit => {
                match key {
                    // Multi-line field blurs on submit
                    FieldKey::AutomaticThought => self.state.dismiss_keyboard(),
                    FieldKey::Challenge => {
                        self.state.handle(FormField::AlternativeThought).focus()
                    }
                    FieldKey::AlternativeThought => self.state.dismiss_keyboard(),
                }
                None
            }
        }
    }
}

impl Component for ThoughtForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let needed = self.required_height(area.width);
        if area.height < needed {
            let notice = Paragraph::new(format!(
                "Terminal too small: need {} rows, have {}",
                needed, area.height
            ))
            .style(Style::default().fg(theme::PLACEHOLDER));
            frame.render_widget(notice, area);
            return;
        }

        let content = Self::content_area(area);
        let [auto_h, distortion_h, challenge_h, alternative_h, button_h] =
            self.section_heights(content.width);
        let [_, auto_area, distortion_area, challenge_area, alternative_area, button_area, _] =
            Layout::vertical([
                Constraint::Length(theme::FORM_TOP_MARGIN),
                Constraint::Length(auto_h),
                Constraint::Length(distortion_h),
                Constraint::Length(challenge_h),
                Constraint::Length(alternative_h),
                Constraint::Length(button_h),
                Constraint::Min(0),
            ])
            .areas(content);

        self.state.field_width = content.width;
        let thought = self.thought;

        let field = FormContainer::new("Automatic Thought").render(frame, auto_area);
        let focused = self.is_focused(FormField::AutomaticThought);
        TextInput::new(
            &mut self.state.automatic_thought,
            &thought.automatic_thought,
            AUTOMATIC_THOUGHT_PLACEHOLDER,
            focused,
        )
        .render(frame, field);

        let field = FormContainer::new("Cognitive Distortion").render(frame, distortion_area);
        let focused = self.is_focused(FormField::CognitiveDistortion);
        RoundedSelector::new(&self.state.distortions, &thought.cognitive_distortions, focused)
            .render(frame, field);

        let field = FormContainer::new("Challenge").render(frame, challenge_area);
        let focused = self.is_focused(FormField::Challenge);
        TextInput::new(
            &mut self.state.challenge,
            &thought.challenge,
            CHALLENGE_PLACEHOLDER,
            focused,
        )
        .render(frame, field);

        let field = FormContainer::new("Alternative Thought").render(frame, alternative_area);
        let focused = self.is_focused(FormField::AlternativeThought);
        TextInput::new(
            &mut self.state.alternative_thought,
            &thought.alternative_thought,
            ALTERNATIVE_THOUGHT_PLACEHOLDER,
            focused,
        )
        .render(frame, field);

        let mut button = RoundedButton {
            title: SAVE_TITLE,
            disabled: false,
            focused: self.is_focused(FormField::Save),
        };
        let button_area = Row::justify_end(button_area, button.width());
        button.render(frame, button_area);
    }
}

impl EventHandler for ThoughtForm<'_> {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Save => return Some(FormEvent::Save),
            TuiEvent::FocusNext => {
                let next = self.state.focused.map_or(FormField::AutomaticThought, FormField::next);
                self.state.handle(next).focus();
                return None;
            }
            TuiEvent::FocusPrev => {
                let prev = self.state.focused.map_or(FormField::Save, FormField::prev);
                self.state.handle(prev).focus();
                return None;
            }
            TuiEvent::Escape => {
                self.state.dismiss_keyboard();
                return None;
            }
            _ => {}
        }

        match self.state.focused? {
            FormField::CognitiveDistortion => {
                match self
                    .state
                    .distortions
                    .handle_event(&self.thought.cognitive_distortions, event)?
                {
                    SelectorEvent::Press(label) => Some(FormEvent::SelectCognitiveDistortion(label)),
                }
            }
            FormField::Save => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(FormEvent::Save),
                _ => None,
            },
            field => {
                let key = field.text_key()?;
                self.handle_text_event(key, event)
            }
        }
    }
}
