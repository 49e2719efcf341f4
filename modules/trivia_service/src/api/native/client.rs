//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    Category, CategoryQuestions, Question, QuestionCreated, QuestionDeleted, QuestionInput,
    QuestionListing, QuestionPage, QuizRequest, TriviaApi, TriviaError,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TriviaApi for NativeClient {
    async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        self.service.list_categories().await
    }

    async fn create_category(&self, label: &str) -> Result<Category, TriviaError> {
        self.service.create_category(label).await
    }

    async fn list_questions(&self, page: u64) -> Result<QuestionListing, TriviaError> {
        self.service.list_questions(page).await
    }

    async fn delete_question(
        &self,
        question_id: i32,
        page: u64,
    ) -> Result<QuestionDeleted, TriviaError> {
        self.service.delete_question(question_id, page).await
    }

    async fn create_question(
        &self,
        input: QuestionInput,
        page: u64,
    ) -> Result<QuestionCreated, TriviaError> {
        self.service.create_question(input, page).await
    }

    async fn search_questions(
        &self,
        term: Option<&str>,
        page: u64,
    ) -> Result<QuestionPage, TriviaError> {
        self.service.search_questions(term, page).await
    }

    async fn questions_by_category(
        &self,
        category_id: i32,
        page: u64,
    ) -> Result<CategoryQuestions, TriviaError> {
        self.service.questions_by_category(category_id, page).await
    }

    async fn next_quiz_question(&self, request: QuizRequest) -> Result<Question, TriviaError> {
        self.service.next_quiz_question(request).await
    }
}
