//! Pedagogical artifacts produced by the tutor. Built fresh per request, never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Difficulty tier that parameterizes prompts and fallbacks.
///
/// Deserializes from any string: unknown values are kept verbatim as
/// `Unrecognized` so callers never fail on an odd level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Unrecognized(String),
}

impl From<String> for SkillLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Beginner" => SkillLevel::Beginner,
            "Intermediate" => SkillLevel::Intermediate,
            "Advanced" => SkillLevel::Advanced,
            _ => SkillLevel::Unrecognized(value),
        }
    }
}

impl SkillLevel {
    /// Reads a level from an arbitrary JSON value. `null` is absent; any other
    /// non-string value is kept as its JSON text.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(SkillLevel::from(s.clone())),
            other => Some(SkillLevel::Unrecognized(other.to_string())),
        }
    }
}

impl From<&str> for SkillLevel {
    fn from(value: &str) -> Self {
        SkillLevel::from(value.to_string())
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLevel::Beginner => f.write_str("Beginner"),
            SkillLevel::Intermediate => f.write_str("Intermediate"),
            SkillLevel::Advanced => f.write_str("Advanced"),
            SkillLevel::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// A vocabulary entry. All three fields are non-empty once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordExercise {
    pub word: String,
    pub definition: String,
    pub example_sentence: String,
}

/// A multiple-choice grammar question. Option order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarExercise {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl GrammarExercise {
    pub fn has_consistent_answer(&self) -> bool {
        self.options.iter().any(|o| *o == self.correct_answer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    #[serde(rename = "AI")]
    Ai,
}

/// One round-trip unit of a conversation. History is held by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub message: String,
}

impl ConversationTurn {
    pub fn user(message: String) -> Self {
        Self {
            speaker: Speaker::User,
            message,
        }
    }

    pub fn ai(message: String) -> Self {
        Self {
            speaker: Speaker::Ai,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_known_values() {
        assert_eq!(SkillLevel::from("Beginner"), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from("Intermediate"), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::from("Advanced"), SkillLevel::Advanced);
    }

    #[test]
    fn test_skill_level_is_case_sensitive() {
        assert_eq!(
            SkillLevel::from("advanced"),
            SkillLevel::Unrecognized("advanced".to_string())
        );
    }

    #[test]
    fn test_skill_level_deserializes_unknown_without_error() {
        let level: SkillLevel = serde_json::from_str(r#""Expert""#).unwrap();
        assert_eq!(level, SkillLevel::Unrecognized("Expert".to_string()));
        assert_eq!(level.to_string(), "Expert");
    }

    #[test]
    fn test_skill_level_from_json_is_lenient() {
        assert_eq!(SkillLevel::from_json(&Value::Null), None);
        assert_eq!(
            SkillLevel::from_json(&serde_json::json!("Advanced")),
            Some(SkillLevel::Advanced)
        );
        assert_eq!(
            SkillLevel::from_json(&serde_json::json!(3)),
            Some(SkillLevel::Unrecognized("3".to_string()))
        );
    }

    #[test]
    fn test_word_exercise_uses_camel_case() {
        let exercise = WordExercise {
            word: "ephemeral".to_string(),
            definition: "lasting a very short time".to_string(),
            example_sentence: "Fame can be ephemeral.".to_string(),
        };
        let value = serde_json::to_value(&exercise).unwrap();
        assert_eq!(value["exampleSentence"], "Fame can be ephemeral.");
        assert!(value.get("example_sentence").is_none());
    }

    #[test]
    fn test_grammar_exercise_answer_consistency() {
        let mut exercise = GrammarExercise {
            question: "Yesterday, I ___ to the store.".to_string(),
            options: vec!["go".to_string(), "went".to_string(), "gone".to_string()],
            correct_answer: "went".to_string(),
        };
        assert!(exercise.has_consistent_answer());

        exercise.correct_answer = "goes".to_string();
        assert!(!exercise.has_consistent_answer());
    }

    #[test]
    fn test_conversation_turn_speakers_serialize_by_name() {
        let turn = ConversationTurn::ai("Hello!".to_string());
        let value = serde_json::to_value(&turn).unwrap();
        assert_eq!(value["speaker"], "AI");

        let learner = ConversationTurn::user("Hi".to_string());
        assert_eq!(serde_json::to_value(&learner).unwrap()["speaker"], "User");
    }
}
