//! Native client trait for inter-module communication

use super::{
    error::TriviaError,
    model::{
        Category, CategoryQuestions, Question, QuestionCreated, QuestionDeleted, QuestionInput,
        QuestionListing, QuestionPage, QuizRequest,
    },
};
use async_trait::async_trait;

/// Trivia service API for inter-module communication.
///
/// Paged operations take a 1-based page number; an empty page is reported as
/// `NotFound`.
#[async_trait]
pub trait TriviaApi: Send + Sync {
    /// Every category ordered by id
    async fn list_categories(&self) -> Result<Vec<Category>, TriviaError>;

    /// Add a category
    async fn create_category(&self, label: &str) -> Result<Category, TriviaError>;

    /// One page of all questions, with the category list
    async fn list_questions(&self, page: u64) -> Result<QuestionListing, TriviaError>;

    /// Remove a question and return the refreshed page
    async fn delete_question(&self, question_id: i32, page: u64)
        -> Result<QuestionDeleted, TriviaError>;

    /// Add a question and return the refreshed page
    async fn create_question(
        &self,
        input: QuestionInput,
        page: u64,
    ) -> Result<QuestionCreated, TriviaError>;

    /// Questions whose text contains the term, ignoring case
    async fn search_questions(
        &self,
        term: Option<&str>,
        page: u64,
    ) -> Result<QuestionPage, TriviaError>;

    /// One page of the questions in a category
    async fn questions_by_category(
        &self,
        category_id: i32,
        page: u64,
    ) -> Result<CategoryQuestions, TriviaError>;

    /// A random question not yet served in this quiz
    async fn next_quiz_question(&self, request: QuizRequest) -> Result<Question, TriviaError>;
}
