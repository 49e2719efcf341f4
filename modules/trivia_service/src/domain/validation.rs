//! Validation of question and category submissions

use crate::contract::{NewQuestion, QuestionInput, TriviaError};
use std::ops::RangeInclusive;

/// Accepted difficulty scores
pub const DIFFICULTY_RANGE: RangeInclusive<i32> = 1..=5;

/// Validate a question submission
pub fn validate_question(input: QuestionInput) -> Result<NewQuestion, TriviaError> {
    let question = non_blank(input.question);
    let answer = non_blank(input.answer);

    let mut missing = Vec::new();
    if question.is_none() {
        missing.push("question");
    }
    if answer.is_none() {
        missing.push("answer");
    }
    if input.category.is_none() {
        missing.push("category");
    }
    if input.difficulty.is_none() {
        missing.push("difficulty");
    }

    match (question, answer, input.category, input.difficulty) {
        (Some(question), Some(answer), Some(category), Some(difficulty)) => {
            if !DIFFICULTY_RANGE.contains(&difficulty) {
                return Err(TriviaError::validation(format!(
                    "difficulty must be between {} and {}",
                    DIFFICULTY_RANGE.start(),
                    DIFFICULTY_RANGE.end()
                )));
            }
            Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            })
        }
        _ => Err(TriviaError::validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        ))),
    }
}

/// Validate a category label
pub fn validate_category(label: &str) -> Result<String, TriviaError> {
    non_blank(Some(label.to_string()))
        .ok_or_else(|| TriviaError::validation("missing required fields: type"))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
