//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

// ===== Category DTOs =====

/// Category record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: i32,
    #[schema(example = "Science")]
    pub r#type: String,
}

/// Every category as an `id -> type` map
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
    pub total_categories: usize,
}

/// Category creation request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "Geography")]
    pub r#type: Option<String>,
}

/// Newly created category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub category: CategoryDto,
}

// ===== Question DTOs =====

/// Question record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    #[schema(example = "What boxer's original name is Cassius Clay?")]
    pub question: String,
    #[schema(example = "Muhammad Ali")]
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Main question list page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
    /// Always null on the unfiltered list
    pub current_category: Option<String>,
}

/// Question creation request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    /// Category id, as a number or a numeric string
    #[serde(default, deserialize_with = "flexible_id")]
    #[schema(value_type = Option<i32>)]
    pub category: Option<i32>,
    #[schema(minimum = 1, maximum = 5)]
    pub difficulty: Option<i32>,
}

/// Result of adding a question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Result of deleting a question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Question search request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(alias = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
}

/// Search or category-filtered question page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    /// Category label when filtered by category, otherwise null
    pub current_category: Option<String>,
}

// ===== Quiz DTOs =====

/// Category selector sent by the quiz page
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// 0 or absent selects every category
    #[serde(default, deserialize_with = "flexible_id")]
    #[schema(value_type = Option<i32>)]
    pub id: Option<i32>,
    pub r#type: Option<String>,
}

/// Next-question request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    #[serde(default, alias = "previous_question")]
    pub previous_questions: Vec<i32>,
    #[serde(default, alias = "category")]
    pub quiz_category: Option<QuizCategoryDto>,
}

/// Next quiz question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuestionDto,
}

/// Accept an id written either as a number or as a numeric string
fn flexible_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(i32),
        Text(String),
    }

    match Option::<Id>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Id::Number(id)) => Ok(Some(id)),
        Some(Id::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id '{text}'"))),
    }
}
