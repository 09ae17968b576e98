//! Axum route handlers for the tutor endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::exercise::{ConversationTurn, SkillLevel};
use crate::state::AppState;
use crate::tutor::policy::Action;
use crate::tutor::ExerciseError;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `action` and `skillLevel` stay raw JSON; wrong-typed values are resolved
/// by dispatch, not by body deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorRequest {
    #[serde(default)]
    pub action: Option<Value>,
    #[serde(default)]
    pub skill_level: Option<Value>,
    #[serde(default)]
    pub user_input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/language-tutor
///
/// Dispatches on `action`:
/// - `conversation` → `{ message }`
/// - `vocabulary` → `[WordExercise]`
/// - `grammar` → `GrammarExercise` (falls back instead of failing)
pub async fn handle_tutor(
    State(state): State<AppState>,
    payload: Result<Json<TutorRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let action: Action = request
        .action
        .as_ref()
        .and_then(Value::as_str)
        .ok_or(AppError::InvalidAction)?
        .parse()
        .map_err(|_| AppError::InvalidAction)?;

    let skill_level = request.skill_level.as_ref().and_then(SkillLevel::from_json);

    let generation_failed = |source: ExerciseError| AppError::Generation { action, source };

    match action {
        Action::Conversation => {
            let learner_turn = request
                .user_input
                .filter(|s| !s.trim().is_empty())
                .map(ConversationTurn::user)
                .ok_or_else(|| AppError::Validation("userInput is required".to_string()))?;

            let turn = state
                .tutor
                .converse(&learner_turn, skill_level.as_ref())
                .await
                .map_err(generation_failed)?;

            Ok(Json(ConversationResponse {
                message: turn.message,
            })
            .into_response())
        }
        Action::Vocabulary => {
            let skill_level = require_skill_level(skill_level)?;
            let words = state
                .tutor
                .vocabulary(&skill_level)
                .await
                .map_err(generation_failed)?;
            Ok(Json(words).into_response())
        }
        Action::Grammar => {
            let exercise = state
                .tutor
                .grammar(skill_level.as_ref())
                .await
                .map_err(generation_failed)?;
            Ok(Json(exercise).into_response())
        }
    }
}

/// Any method other than POST on the tutor endpoint.
pub async fn handle_method_not_allowed(method: Method) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {method} Not Allowed"),
    )
}

fn require_skill_level(skill_level: Option<SkillLevel>) -> Result<SkillLevel, AppError> {
    skill_level.ok_or_else(|| AppError::Validation("skillLevel is required".to_string()))
}
