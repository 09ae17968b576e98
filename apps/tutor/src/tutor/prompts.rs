// All prompt templates for the tutor, plus the pure builders that fill them.
// Placeholders are replaced with `str::replace`; user input is always
// substituted last so its text is never re-scanned for placeholders.

use crate::models::exercise::SkillLevel;
use crate::tutor::policy::Action;

/// Number of vocabulary entries requested per call.
pub const DEFAULT_WORD_COUNT: usize = 5;

/// Conversation prompt. Replace `{learner}` then `{user_input}`.
pub const CONVERSATION_PROMPT_TEMPLATE: &str = r#"You are a helpful language tutor assisting {learner}.
Respond to the following input in a way that's appropriate for their skill level, using vocabulary and sentence structures they can follow: "{user_input}""#;

/// Vocabulary prompt. Replace `{count}` and `{learner}`.
pub const VOCABULARY_PROMPT_TEMPLATE: &str = r#"Generate {count} vocabulary word exercises for {learner}.
Choose random words that are appropriate for this level, but avoid common words like "hello" or "goodbye".
For each word, provide the word, its definition, and an example sentence. Format the response as a JSON array with the following structure, using exactly these field names:
[
  {
    "word": "example1",
    "definition": "a short definition for example1",
    "exampleSentence": "An example sentence using example1."
  },
  {
    "word": "example2",
    "definition": "a short definition for example2",
    "exampleSentence": "An example sentence using example2."
  }
]"#;

/// Grammar prompt for `Advanced` learners. No placeholders.
pub const ADVANCED_GRAMMAR_PROMPT: &str = r#"Generate an advanced grammar exercise for an English learner.
Focus on complex grammatical structures such as conditionals, passive voice, reported speech, or advanced tenses.
Provide a challenging question, three options, and the correct answer. The correct answer must be one of the three options. Format the response as JSON with the following structure:
{
  "question": "Complete the sentence with the correct form: If I ___ (know) about the party earlier, I would have attended.",
  "options": ["had known", "knew", "would know"],
  "correctAnswer": "had known"
}"#;

/// Grammar prompt for every other level. Replace `{skill_level}`.
pub const BASIC_GRAMMAR_PROMPT_TEMPLATE: &str = r#"Generate a {skill_level} level grammar exercise for an English learner.
Write a single-clause fill-in-the-blank question appropriate for the skill level, three options, and the correct answer. The correct answer must be one of the three options. Format the response as JSON with the following structure:
{
  "question": "Complete the sentence: I ___ (am/is/are) learning English.",
  "options": ["am", "is", "are"],
  "correctAnswer": "am"
}"#;

/// Sampling parameters sent alongside each action's prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

pub fn generation_params(action: Action) -> GenerationParams {
    match action {
        Action::Conversation => GenerationParams {
            temperature: 0.7,
            max_tokens: 150,
        },
        Action::Vocabulary => GenerationParams {
            temperature: 0.9,
            max_tokens: 1000,
        },
        Action::Grammar => GenerationParams {
            temperature: 0.7,
            max_tokens: 300,
        },
    }
}

/// Builds the prompt for any action. Total: every input combination yields a prompt.
pub fn build_prompt(
    action: Action,
    skill_level: Option<&SkillLevel>,
    user_input: Option<&str>,
) -> String {
    match action {
        Action::Conversation => conversation_prompt(user_input.unwrap_or_default(), skill_level),
        Action::Vocabulary => vocabulary_prompt(skill_level, DEFAULT_WORD_COUNT),
        Action::Grammar => grammar_prompt(skill_level),
    }
}

pub fn conversation_prompt(user_input: &str, skill_level: Option<&SkillLevel>) -> String {
    CONVERSATION_PROMPT_TEMPLATE
        .replace("{learner}", &learner_phrase(skill_level))
        .replace("{user_input}", user_input)
}

pub fn vocabulary_prompt(skill_level: Option<&SkillLevel>, count: usize) -> String {
    VOCABULARY_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{learner}", &learner_phrase(skill_level))
}

/// Unknown levels fall through to the basic branch.
pub fn grammar_prompt(skill_level: Option<&SkillLevel>) -> String {
    match skill_level {
        Some(SkillLevel::Advanced) => ADVANCED_GRAMMAR_PROMPT.to_string(),
        Some(level) => BASIC_GRAMMAR_PROMPT_TEMPLATE.replace("{skill_level}", &level.to_string()),
        None => BASIC_GRAMMAR_PROMPT_TEMPLATE.replace("{skill_level} level", "basic"),
    }
}

fn learner_phrase(skill_level: Option<&SkillLevel>) -> String {
    match skill_level {
        Some(level) => format!("a {level} level English learner"),
        None => "an English learner".to_string(),
    }
}
