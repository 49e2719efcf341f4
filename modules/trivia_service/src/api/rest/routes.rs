//! Route registration and OpenAPI schema collection

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use catalog_common::PageQuery;
use std::sync::Arc;
use utoipa::OpenApi;

/// Schemas exposed by the trivia REST API
#[derive(OpenApi)]
#[openapi(components(schemas(
    CategoryDto,
    CategoriesResponse,
    CreateCategoryRequest,
    CategoryCreatedResponse,
    QuestionDto,
    QuestionsResponse,
    CreateQuestionRequest,
    QuestionCreatedResponse,
    QuestionDeletedResponse,
    SearchRequest,
    QuestionPageResponse,
    QuizCategoryDto,
    QuizRequestDto,
    QuizResponse,
)))]
pub struct TriviaApiDoc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        // Category endpoints
        .route(
            "/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route("/categories/{id}/questions", get(questions_by_category_handler))
        // Question endpoints
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route("/questions/search", post(search_questions_handler))
        .route("/questions/{id}", delete(delete_question_handler))
        // Quiz endpoint
        .route("/quizzes", post(play_quiz_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_categories_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<CategoriesResponse>, Problem> {
    handlers::list_categories(service).await
}

async fn create_category_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryCreatedResponse>), Problem> {
    handlers::create_category(service, json).await
}

async fn questions_by_category_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    query: Query<PageQuery>,
) -> Result<Json<QuestionPageResponse>, Problem> {
    handlers::questions_by_category(service, path, query).await
}

async fn list_questions_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<PageQuery>,
) -> Result<Json<QuestionsResponse>, Problem> {
    handlers::list_questions(service, query).await
}

async fn create_question_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<PageQuery>,
    json: Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionCreatedResponse>), Problem> {
    handlers::create_question(service, query, json).await
}

async fn search_questions_handler(
    Extension(service): Extension<Arc<Service>>,
    query: Query<PageQuery>,
    json: Json<SearchRequest>,
) -> Result<Json<QuestionPageResponse>, Problem> {
    handlers::search_questions(service, query, json).await
}

async fn delete_question_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    query: Query<PageQuery>,
) -> Result<Json<QuestionDeletedResponse>, Problem> {
    handlers::delete_question(service, path, query).await
}

async fn play_quiz_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<QuizRequestDto>,
) -> Result<Json<QuizResponse>, Problem> {
    handlers::play_quiz(service, json).await
}
