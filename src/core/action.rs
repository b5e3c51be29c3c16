//! # Actions
//!
//! Everything the form reports becomes an `Action`.
//! User types into "challenge"? That's `Action::EditField(FieldKey::Challenge, text)`.
//! User taps Save? That's `Action::Save`.
//!
//! The `update()` function takes the current state and an action and
//! produces the next record snapshot. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect for the event loop)
//! ```

use chrono::Utc;
use log::{debug, info, warn};

use crate::core::state::App;
use crate::core::thought::FieldKey;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace a text field with the (already sanitized) text.
    EditField(FieldKey, String),
    /// Flip the `selected` flag of the distortion with this label.
    ToggleDistortion(String),
    Save,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Saved,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditField(key, text) => {
            debug!("Field {} changed ({} bytes)", key, text.len());
            app.thought.set_field(key, text);
            app.dirty = true;
            Effect::None
        }
        Action::ToggleDistortion(label) => {
            match app
                .thought
                .cognitive_distortions
                .iter_mut()
                .find(|d| d.label == label)
            {
                Some(distortion) => {
                    distortion.selected = !distortion.selected;
                    debug!("Distortion {:?} selected={}", label, distortion.selected);
                    app.dirty = true;
                }
                None => warn!("Ignoring selection of unknown distortion {:?}", label),
            }
            Effect::None
        }
        Action::Save => {
            let now = Utc::now();
            app.thought.updated_at = now;
            app.saved = Some(app.thought.clone());
            app.dirty = false;
            app.status_message = format!("Saved at {}", now.format("%H:%M:%S"));
            info!(
                "Saved thought record {} ({} distortions selected)",
                app.thought.uuid,
                app.thought.selected_distortions().len()
            );
            Effect::Saved
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_edit_field_updates_snapshot() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::EditField(FieldKey::Challenge, "bc".to_string()),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.thought.challenge, "bc");
        assert_eq!(app.thought.automatic_thought, "a");
        assert!(app.dirty);
    }

    #[test]
    fn test_toggle_distortion_flips_selection() {
        let mut app = test_app();
        update(&mut app, Action::ToggleDistortion("catastrophizing".to_string()));
        assert_eq!(app.thought.selected_distortions(), vec!["catastrophizing"]);

        update(&mut app, Action::ToggleDistortion("catastrophizing".to_string()));
        assert!(app.thought.selected_distortions().is_empty());
    }

    #[test]
    fn test_toggle_unknown_distortion_is_ignored() {
        let mut app = test_app();
        let before = app.thought.clone();
        update(&mut app, Action::ToggleDistortion("nope".to_string()));
        assert_eq!(app.thought, before);
        assert!(!app.dirty);
    }

    #[test]
    fn test_save_records_snapshot() {
        let mut app = test_app();
        update(
            &mut app,
            Action::EditField(FieldKey::AlternativeThought, "maybe not".to_string()),
        );
        let effect = update(&mut app, Action::Save);

        assert_eq!(effect, Effect::Saved);
        assert!(!app.dirty);
        let saved = app.saved.as_ref().unwrap();
        assert_eq!(saved.alternative_thought, "maybe not");
        assert!(saved.updated_at >= saved.created_at);
        assert!(app.status_message.starts_with("Saved at"));
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
