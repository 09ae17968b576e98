//! Shape checks for parsed model output.
//!
//! Vocabulary batches keep their valid entries and drop the rest. A grammar
//! exercise is all-or-nothing. Field values are never coerced or trimmed.

use serde_json::Value;

use crate::models::exercise::{GrammarExercise, WordExercise};
use crate::tutor::ExerciseError;

pub fn validate_word_exercises(value: &Value) -> Result<Vec<WordExercise>, ExerciseError> {
    let entries = value
        .as_array()
        .ok_or_else(|| ExerciseError::InvalidStructure("expected a JSON array".to_string()))?;

    if entries.is_empty() {
        return Err(ExerciseError::InvalidStructure(
            "word exercise array is empty".to_string(),
        ));
    }

    let valid: Vec<WordExercise> = entries.iter().filter_map(word_exercise).collect();

    if valid.is_empty() {
        return Err(ExerciseError::InvalidStructure(format!(
            "none of {} word exercises had word, definition and exampleSentence",
            entries.len()
        )));
    }

    if valid.len() < entries.len() {
        tracing::warn!(
            "Dropped {} malformed word exercises out of {}",
            entries.len() - valid.len(),
            entries.len()
        );
    }

    Ok(valid)
}

/// Rejects missing or empty fields, and a `correctAnswer` absent from `options`.
pub fn validate_grammar_exercise(value: &Value) -> Result<GrammarExercise, ExerciseError> {
    let object = value
        .as_object()
        .ok_or_else(|| ExerciseError::InvalidStructure("expected a JSON object".to_string()))?;

    let question = non_empty_str(object.get("question"))
        .ok_or_else(|| ExerciseError::InvalidStructure("missing question".to_string()))?;

    let options = object
        .get("options")
        .and_then(Value::as_array)
        .ok_or_else(|| ExerciseError::InvalidStructure("missing options array".to_string()))?
        .iter()
        .map(|o| o.as_str().map(String::from))
        .collect::<Option<Vec<String>>>()
        .ok_or_else(|| ExerciseError::InvalidStructure("options must be strings".to_string()))?;

    let correct_answer = non_empty_str(object.get("correctAnswer"))
        .ok_or_else(|| ExerciseError::InvalidStructure("missing correctAnswer".to_string()))?;

    let exercise = GrammarExercise {
        question: question.to_string(),
        options,
        correct_answer: correct_answer.to_string(),
    };

    if !exercise.has_consistent_answer() {
        return Err(ExerciseError::InvalidStructure(format!(
            "correctAnswer {:?} is not one of the options",
            exercise.correct_answer
        )));
    }

    Ok(exercise)
}

fn word_exercise(entry: &Value) -> Option<WordExercise> {
    Some(WordExercise {
        word: non_empty_str(entry.get("word"))?.to_string(),
        definition: non_empty_str(entry.get("definition"))?.to_string(),
        example_sentence: non_empty_str(entry.get("exampleSentence"))?.to_string(),
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
