//! # Thought Records
//!
//! The one domain entity Reframe edits: a CBT journaling entry made of an
//! automatic thought, the distortions it shows, a challenge, and an
//! alternative thought.
//!
//! ```text
//! ThoughtRecord
//! ├── uuid: String                              // v4, assigned on creation
//! ├── automatic_thought: String                 // multi-line
//! ├── cognitive_distortions: Vec<CognitiveDistortion>
//! ├── challenge: String                         // single line
//! ├── alternative_thought: String               // single line
//! ├── created_at: DateTime<Utc>
//! └── updated_at: DateTime<Utc>                 // stamped on save
//! ```
//!
//! Records are plain snapshots. Whoever owns one (the host, see
//! `core::action`) produces the next snapshot; UI code only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category labels offered when the config doesn't list its own.
pub const DEFAULT_DISTORTIONS: &[&str] = &[
    "All or Nothing Thinking",
    "Catastrophizing",
    "Emotional Reasoning",
    "Fortune Telling",
    "Labeling",
    "Magnification of the Negative",
    "Mind Reading",
    "Minimization of the Positive",
    "Other-Blaming",
    "Over-Generalization",
    "Self-Blaming",
    "Should Statements",
];

/// Identifies one of the three free-text fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    AutomaticThought,
    Challenge,
    AlternativeThought,
}

impl FieldKey {
    /// Stable identifier reported with every text change.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::AutomaticThought => "automaticThought",
            FieldKey::Challenge => "challenge",
            FieldKey::AlternativeThought => "alternativeThought",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selectable thinking-pattern category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CognitiveDistortion {
    pub label: String,
    pub slug: String,
    #[serde(default)]
    pub selected: bool,
}

impl CognitiveDistortion {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let slug = slugify(&label);
        Self {
            label,
            slug,
            selected: false,
        }
    }
}

/// Kebab-case slug: lowercase alphanumerics, runs of anything else collapse to `-`.
fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtRecord {
    pub uuid: String,
    pub automatic_thought: String,
    pub cognitive_distortions: Vec<CognitiveDistortion>,
    pub challenge: String,
    pub alternative_thought: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ThoughtRecord {
    /// Empty record offering the given distortion labels, none selected.
    pub fn new<I, S>(distortion_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = Utc::now();
        Self {
            uuid: uuid::Uuid::new_v4().to_string(),
            automatic_thought: String::new(),
            cognitive_distortions: distortion_labels
                .into_iter()
                .map(CognitiveDistortion::new)
                .collect(),
            challenge: String::new(),
            alternative_thought: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn field(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::AutomaticThought => &self.automatic_thought,
            FieldKey::Challenge => &self.challenge,
            FieldKey::AlternativeThought => &self.alternative_thought,
        }
    }

    pub fn set_field(&mut self, key: FieldKey, text: String) {
        match key {
            FieldKey::AutomaticThought => self.automatic_thought = text,
            FieldKey::Challenge => self.challenge = text,
            FieldKey::AlternativeThought => self.alternative_thought = text,
        }
    }

    /// Labels of the currently selected distortions, in list order.
    pub fn selected_distortions(&self) -> Vec<&str> {
        self.cognitive_distortions
            .iter()
            .filter(|d| d.selected)
            .map(|d| d.label.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_stable() {
        assert_eq!(FieldKey::AutomaticThought.as_str(), "automaticThought");
        assert_eq!(FieldKey::Challenge.as_str(), "challenge");
        assert_eq!(FieldKey::AlternativeThought.as_str(), "alternativeThought");
        assert_eq!(FieldKey::Challenge.to_string(), "challenge");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("All or Nothing Thinking"), "all-or-nothing-thinking");
        assert_eq!(slugify("Other-Blaming"), "other-blaming");
        assert_eq!(slugify("  Mind  Reading! "), "mind-reading");
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = ThoughtRecord::new(DEFAULT_DISTORTIONS.iter().copied());
        assert!(record.automatic_thought.is_empty());
        assert!(record.challenge.is_empty());
        assert!(record.alternative_thought.is_empty());
        assert_eq!(record.cognitive_distortions.len(), DEFAULT_DISTORTIONS.len());
        assert!(record.selected_distortions().is_empty());
        assert_eq!(record.created_at, record.updated_at);
        assert!(!record.uuid.is_empty());
    }

    #[test]
    fn test_set_field_targets_one_field() {
        let mut record = ThoughtRecord::new(["Labeling"]);
        record.set_field(FieldKey::Challenge, "is that true?".to_string());
        assert_eq!(record.field(FieldKey::Challenge), "is that true?");
        assert!(record.field(FieldKey::AutomaticThought).is_empty());
        assert!(record.field(FieldKey::AlternativeThought).is_empty());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let mut record = ThoughtRecord::new(["Catastrophizing"]);
        record.automatic_thought = "a".to_string();
        record.cognitive_distortions[0].selected = true;

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["automaticThought"], "a");
        assert_eq!(json["alternativeThought"], "");
        assert_eq!(json["cognitiveDistortions"][0]["slug"], "catastrophizing");
        assert_eq!(json["cognitiveDistortions"][0]["selected"], true);
        assert!(json.get("createdAt").is_some());
    }
}
