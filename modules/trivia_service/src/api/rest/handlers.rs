//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
    mapper::{category_map, question_dtos},
};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use catalog_common::PageQuery;
use std::sync::Arc;

// ===== Category Handlers =====

/// Every category as an id -> type map
pub async fn list_categories(service: Arc<Service>) -> Result<Json<CategoriesResponse>, Problem> {
    let categories = service.list_categories().await.map_err(map_domain_error)?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(categories),
    }))
}

/// Add a category
pub async fn create_category(
    service: Arc<Service>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryCreatedResponse>), Problem> {
    let category = service
        .create_category(req.r#type.as_deref().unwrap_or_default())
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(CategoryCreatedResponse {
            success: true,
            created: category.id,
            category: category.into(),
        }),
    ))
}

/// One page of a category's questions
pub async fn questions_by_category(
    service: Arc<Service>,
    Path(category_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionPageResponse>, Problem> {
    let result = service
        .questions_by_category(category_id, query.page)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: question_dtos(result.page.questions),
        total_questions: result.page.total_questions,
        current_category: Some(result.category.r#type),
    }))
}

// ===== Question Handlers =====

/// One page of every question
pub async fn list_questions(
    service: Arc<Service>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsResponse>, Problem> {
    let listing = service
        .list_questions(query.page)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: question_dtos(listing.page.questions),
        total_questions: listing.page.total_questions,
        categories: category_map(listing.categories),
        current_category: None,
    }))
}

/// Delete a question
pub async fn delete_question(
    service: Arc<Service>,
    Path(question_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionDeletedResponse>, Problem> {
    let result = service
        .delete_question(question_id, query.page)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(QuestionDeletedResponse {
        success: true,
        deleted: result.deleted,
        questions: question_dtos(result.page.questions),
        total_questions: result.page.total_questions,
    }))
}

/// Add a question
pub async fn create_question(
    service: Arc<Service>,
    Query(query): Query<PageQuery>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionCreatedResponse>), Problem> {
    let result = service
        .create_question(req.into(), query.page)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(QuestionCreatedResponse {
            success: true,
            created: result.question.id,
            questions: question_dtos(result.page.questions),
            total_questions: result.page.total_questions,
        }),
    ))
}

/// Search question text
pub async fn search_questions(
    service: Arc<Service>,
    Query(query): Query<PageQuery>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<QuestionPageResponse>, Problem> {
    let page = service
        .search_questions(req.search_term.as_deref(), query.page)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: question_dtos(page.questions),
        total_questions: page.total_questions,
        current_category: None,
    }))
}

// ===== Quiz Handlers =====

/// Next unseen quiz question
pub async fn play_quiz(
    service: Arc<Service>,
    Json(req): Json<QuizRequestDto>,
) -> Result<Json<QuizResponse>, Problem> {
    let question = service
        .next_quiz_question(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(QuizResponse {
        success: true,
        question: question.into(),
    }))
}
