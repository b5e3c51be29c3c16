//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;
use crate::core::thought::{FieldKey, ThoughtRecord};
use crate::tui::components::FormCallbacks;

/// One recorded callback invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Save,
    SelectCognitiveDistortion(String),
    TextChange(FieldKey, String),
}

/// `FormCallbacks` that just remembers what was called, in order.
#[derive(Debug, Default)]
pub struct RecordingCallbacks {
    pub calls: Vec<Call>,
}

impl FormCallbacks for RecordingCallbacks {
    fn on_save(&mut self) {
        self.calls.push(Call::Save);
    }

    fn on_select_cognitive_distortion(&mut self, label: &str) {
        self.calls.push(Call::SelectCognitiveDistortion(label.to_string()));
    }

    fn on_text_change(&mut self, key: FieldKey, text: &str) {
        self.calls.push(Call::TextChange(key, text.to_string()));
    }
}

/// `{automaticThought: "a", cognitiveDistortions: ["catastrophizing"], challenge: "", alternativeThought: ""}`
pub fn sample_thought() -> ThoughtRecord {
    let mut thought = ThoughtRecord::new(["catastrophizing"]);
    thought.automatic_thought = "a".to_string();
    thought
}

/// Creates a test App around `sample_thought()`.
pub fn test_app() -> App {
    App::new(sample_thought())
}
