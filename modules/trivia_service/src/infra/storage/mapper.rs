//! Entity to model mappers

use super::entity::{category, question};
use crate::contract::{Category, NewQuestion, Question};
use sea_orm::ActiveValue::{NotSet, Set};

impl From<category::Model> for Category {
    fn from(entity: category::Model) -> Self {
        Self {
            id: entity.id,
            r#type: entity.r#type,
        }
    }
}

impl From<question::Model> for Question {
    fn from(entity: question::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            category: entity.category,
            difficulty: entity.difficulty,
        }
    }
}

impl From<&NewQuestion> for question::ActiveModel {
    fn from(model: &NewQuestion) -> Self {
        Self {
            id: NotSet,
            question: Set(model.question.clone()),
            answer: Set(model.answer.clone()),
            category: Set(model.category),
            difficulty: Set(model.difficulty),
        }
    }
}
