//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;
use std::collections::BTreeMap;

impl From<contract::Category> for CategoryDto {
    fn from(category: contract::Category) -> Self {
        Self {
            id: category.id,
            r#type: category.r#type,
        }
    }
}

impl From<contract::Question> for QuestionDto {
    fn from(question: contract::Question) -> Self {
        Self {
            id: question.id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}

impl From<CreateQuestionRequest> for contract::QuestionInput {
    fn from(req: CreateQuestionRequest) -> Self {
        Self {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}

impl From<QuizRequestDto> for contract::QuizRequest {
    fn from(req: QuizRequestDto) -> Self {
        Self {
            previous_questions: req.previous_questions,
            category: contract::QuizCategory::from_id(req.quiz_category.and_then(|c| c.id)),
        }
    }
}

/// `id -> type` map in id order
pub fn category_map(categories: Vec<contract::Category>) -> BTreeMap<i32, String> {
    categories
        .into_iter()
        .map(|category| (category.id, category.r#type))
        .collect()
}

pub fn question_dtos(questions: Vec<contract::Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{QuizCategory, QuizRequest};

    #[test]
    fn zero_quiz_category_means_all() {
        let request: QuizRequest = QuizRequestDto {
            previous_questions: vec![1, 2],
            quiz_category: Some(QuizCategoryDto {
                id: Some(0),
                r#type: Some("click".to_string()),
            }),
        }
        .into();
        assert_eq!(request.category, QuizCategory::All);
        assert_eq!(request.previous_questions, vec![1, 2]);
    }

    #[test]
    fn missing_quiz_category_means_all() {
        let request: QuizRequest = QuizRequestDto::default().into();
        assert_eq!(request.category, QuizCategory::All);
    }
}
