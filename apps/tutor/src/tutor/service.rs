//! Exercise service — orchestrates one request per action.
//!
//! Flow: build prompt → single model call → extract → validate →
//!       recovery policy on any failure.
//!
//! Every call is independent. The only shared data are the immutable fallbacks.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::llm_client::{ChatMessage, CompletionClient, CompletionRequest, LlmError, MODEL};
use crate::models::exercise::{ConversationTurn, GrammarExercise, SkillLevel, WordExercise};
use crate::tutor::extractor::{decode_json, JsonShape};
use crate::tutor::fallback::default_grammar_exercise;
use crate::tutor::policy::{recovery_strategy, Action, RecoveryStrategy};
use crate::tutor::prompts::{build_prompt, generation_params};
use crate::tutor::validation::{validate_grammar_exercise, validate_word_exercises};
use crate::tutor::ExerciseError;

#[derive(Clone)]
pub struct ExerciseService {
    llm: Arc<dyn CompletionClient>,
}

impl ExerciseService {
    pub fn new(llm: Arc<dyn CompletionClient>) -> Self {
        Self { llm }
    }

    /// Replies to the learner's latest turn. Free text is returned verbatim.
    pub async fn converse(
        &self,
        learner_turn: &ConversationTurn,
        skill_level: Option<&SkillLevel>,
    ) -> Result<ConversationTurn, ExerciseError> {
        let action = Action::Conversation;
        let outcome = self
            .generate(action, skill_level, Some(&learner_turn.message))
            .await
            .map(ConversationTurn::ai);
        apply_policy(action, outcome, || None)
    }

    pub async fn vocabulary(
        &self,
        skill_level: &SkillLevel,
    ) -> Result<Vec<WordExercise>, ExerciseError> {
        let action = Action::Vocabulary;
        let outcome = match self.generate(action, Some(skill_level), None).await {
            Ok(raw) => decode_json(&raw, JsonShape::Array)
                .and_then(|value: Value| validate_word_exercises(&value)),
            Err(e) => Err(e),
        };
        if let Ok(words) = &outcome {
            info!("Generated {} word exercises for {skill_level}", words.len());
        }
        apply_policy(action, outcome, || None)
    }

    /// Under the default policy this never fails: any error yields the level's
    /// fallback, or the generic one when the level is absent or unrecognized.
    pub async fn grammar(
        &self,
        skill_level: Option<&SkillLevel>,
    ) -> Result<GrammarExercise, ExerciseError> {
        let action = Action::Grammar;
        let outcome = match self.generate(action, skill_level, None).await {
            Ok(raw) => decode_json(&raw, JsonShape::Object)
                .and_then(|value: Value| validate_grammar_exercise(&value)),
            Err(e) => Err(e),
        };
        apply_policy(action, outcome, || {
            Some(default_grammar_exercise(skill_level))
        })
    }

    /// Builds the action's prompt and makes exactly one model call.
    async fn generate(
        &self,
        action: Action,
        skill_level: Option<&SkillLevel>,
        user_input: Option<&str>,
    ) -> Result<String, ExerciseError> {
        let params = generation_params(action);
        let request = CompletionRequest {
            messages: vec![ChatMessage::user(build_prompt(
                action,
                skill_level,
                user_input,
            ))],
            model: MODEL.to_string(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let raw = self.llm.complete(&request).await?;
        if raw.trim().is_empty() {
            return Err(LlmError::EmptyContent.into());
        }

        debug!(%action, "Raw model output: {raw}");
        Ok(raw)
    }
}

/// Resolves a failed outcome according to the action's entry in the recovery table.
fn apply_policy<T>(
    action: Action,
    outcome: Result<T, ExerciseError>,
    fallback: impl FnOnce() -> Option<T>,
) -> Result<T, ExerciseError> {
    let err = match outcome {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    match recovery_strategy(action) {
        RecoveryStrategy::Surface => Err(err),
        RecoveryStrategy::SubstituteFallback => match fallback() {
            Some(value) => {
                warn!(%action, "Serving fallback after generation failure: {err}");
                Ok(value)
            }
            None => Err(err),
        },
    }
}
