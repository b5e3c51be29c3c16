//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! and plays the form's parent: form events become `core::Action`s.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only
//! redraws after events (including terminal resize). All pending events
//! are drained before the next draw.

pub mod component;
pub mod components;
pub mod event;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::core::thought::FieldKey;
use crate::tui::component::EventHandler;
use crate::tui::components::{FormCallbacks, ThoughtForm, ThoughtFormState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: ThoughtFormState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form: ThoughtFormState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// The form's parent: turns callbacks into reducer actions.
pub struct AppCallbacks<'a> {
    app: &'a mut App,
}

impl<'a> AppCallbacks<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    fn apply(&mut self, action: Action) {
        let effect = update(self.app, action);
        debug!("Form callback effect: {:?}", effect);
    }
}

impl FormCallbacks for AppCallbacks<'_> {
    fn on_save(&mut self) {
        self.apply(Action::Save);
    }

    fn on_select_cognitive_distortion(&mut self, label: &str) {
        self.apply(Action::ToggleDistortion(label.to_string()));
    }

    fn on_text_change(&mut self, key: FieldKey, text: &str) {
        self.apply(Action::EditField(key, text.to_string()));
    }
}

/// Route one event through the host and the form. Returns `true` to quit.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> bool {
    match event {
        TuiEvent::ForceQuit => return update(app, Action::Quit) == Effect::Quit,
        TuiEvent::Resize => return false,
        // Esc with nothing focused leaves the form
        TuiEvent::Escape if tui.form.focused().is_none() => {
            return update(app, Action::Quit) == Effect::Quit;
        }
        _ => {}
    }

    let form_event = ThoughtForm::new(&mut tui.form, &app.thought).handle_event(event);
    if let Some(form_event) = form_event {
        debug!("Form event: {:?}", form_event);
        form_event.dispatch(&mut AppCallbacks::new(app));
    }
    false
}

/// Run the editor until the user quits. Returns the final state.
pub fn run(mut app: App) -> io::Result<App> {
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Editor closed");
    result.map(|()| app)
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL)?;

        // Process first event + drain ALL pending events before next draw
        let pending = std::iter::from_fn(|| poll_event_immediate().transpose());
        for event in first_event.map(Ok).into_iter().chain(pending) {
            needs_redraw = true;
            if handle_event(app, tui, &event?) {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_typing_flows_back_into_the_record() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        tui.form.handle(components::FormField::Challenge).focus();

        for event in [
            TuiEvent::InputChar('b'),
            TuiEvent::InputChar('\n'),
            TuiEvent::InputChar('c'),
        ] {
            assert!(!handle_event(&mut app, &mut tui, &event));
        }

        assert_eq!(app.thought.challenge, "bc");
        assert!(app.dirty);
    }

    #[test]
    fn test_save_shortcut_saves() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        handle_event(&mut app, &mut tui, &TuiEvent::Save);
        assert!(app.saved.is_some());
        assert!(!app.dirty);
    }

    #[test]
    fn test_selecting_distortion_toggles_it() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        handle_event(&mut app, &mut tui, &TuiEvent::FocusNext);
        handle_event(&mut app, &mut tui, &TuiEvent::InputChar(' '));
        assert_eq!(app.thought.selected_distortions(), vec!["catastrophizing"]);
    }

    #[test]
    fn test_escape_blurs_then_quits() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(!handle_event(&mut app, &mut tui, &TuiEvent::Escape));
        assert!(handle_event(&mut app, &mut tui, &TuiEvent::Escape));
    }

    #[test]
    fn test_force_quit() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert!(handle_event(&mut app, &mut tui, &TuiEvent::ForceQuit));
    }
}
