//! Hand-authored grammar exercises served when generation fails.
//! Vocabulary and conversation have no fallback.

use crate::models::exercise::{GrammarExercise, SkillLevel};

struct StaticExercise {
    question: &'static str,
    options: [&'static str; 3],
    correct_answer: &'static str,
}

impl StaticExercise {
    fn to_exercise(&self) -> GrammarExercise {
        GrammarExercise {
            question: self.question.to_string(),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: self.correct_answer.to_string(),
        }
    }
}

const BEGINNER: StaticExercise = StaticExercise {
    question: "Complete the sentence: I ___ a student.",
    options: ["am", "is", "are"],
    correct_answer: "am",
};

const INTERMEDIATE: StaticExercise = StaticExercise {
    question: "Choose the correct past tense: Yesterday, I ___ to the store.",
    options: ["go", "went", "gone"],
    correct_answer: "went",
};

const ADVANCED: StaticExercise = StaticExercise {
    question: "Select the correct conditional form: If I ___ about the exam, I would have studied more.",
    options: ["knew", "had known", "would know"],
    correct_answer: "had known",
};

const GENERIC: StaticExercise = StaticExercise {
    question: "Failed to generate a question. Please try again.",
    options: ["Option 1", "Option 2", "Option 3"],
    correct_answer: "Option 1",
};

pub fn default_grammar_exercise(skill_level: Option<&SkillLevel>) -> GrammarExercise {
    let entry = match skill_level {
        Some(SkillLevel::Beginner) => &BEGINNER,
        Some(SkillLevel::Intermediate) => &INTERMEDIATE,
        Some(SkillLevel::Advanced) => &ADVANCED,
        Some(SkillLevel::Unrecognized(_)) | None => &GENERIC,
    };
    entry.to_exercise()
}
