// Exercise synthesis: prompt → model call → extraction → validation → fallback.
// All model calls go through llm_client — no direct provider calls here.

pub mod extractor;
pub mod fallback;
pub mod handlers;
pub mod policy;
pub mod prompts;
pub mod service;
pub mod validation;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Failure kinds along the generation chain. Each stage returns exactly one of these.
#[derive(Debug, Error)]
pub enum ExerciseError {
    /// The model call itself failed, or returned no content.
    #[error("provider failure: {0}")]
    Provider(#[from] LlmError),

    /// No bracket-delimited JSON fragment in the model output.
    #[error("no JSON payload found in model output")]
    NotFound,

    /// A fragment was located but is not valid JSON.
    #[error("model output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON with missing, empty or inconsistent fields.
    #[error("invalid exercise structure: {0}")]
    InvalidStructure(String),
}
