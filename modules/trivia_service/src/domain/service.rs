//! Domain service - business logic orchestration

use super::quiz;
use super::repository::{CategoryRepository, QuestionRepository};
use super::validation::{validate_category, validate_question};
use crate::config::Config;
use crate::contract::{
    Category, CategoryQuestions, Question, QuestionCreated, QuestionDeleted, QuestionInput,
    QuestionListing, QuestionPage, QuizCategory, QuizRequest, TriviaError,
};
use catalog_common::{filter_by_term, page_count, page_slice, PageRequest};
use std::collections::HashSet;
use std::sync::Arc;

const LOAD_FAILED: &str = "An error occurred while loading questions.";

/// Domain service for categories, questions and quiz play
pub struct Service {
    categories: Arc<dyn CategoryRepository>,
    questions: Arc<dyn QuestionRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
        config: Config,
    ) -> Self {
        Self {
            categories,
            questions,
            config,
        }
    }

    // ===== Category Operations =====

    /// Every category by id; none at all is `NotFound`
    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let categories = self
            .categories
            .list_all()
            .await
            .map_err(read_failed("list categories"))?;
        if categories.is_empty() {
            return Err(TriviaError::not_found("category", "any"));
        }
        Ok(categories)
    }

    /// Add a category
    pub async fn create_category(&self, label: &str) -> Result<Category, TriviaError> {
        let label = validate_category(label)?;
        let category = self.categories.create(&label).await.map_err(write_failed(format!(
            "An error occurred. Category {label} could not be created."
        )))?;
        tracing::info!(category_id = category.id, label = %category.r#type, "category created");
        Ok(category)
    }

    // ===== Question Operations =====

    /// One page of every question plus all categories
    pub async fn list_questions(&self, page: u64) -> Result<QuestionListing, TriviaError> {
        let questions = self.all_questions().await?;
        let page = self.require_page(questions, page)?;
        let categories = self
            .categories
            .list_all()
            .await
            .map_err(read_failed("list categories"))?;
        Ok(QuestionListing { page, categories })
    }

    /// Delete a question and return `page` of what remains
    pub async fn delete_question(
        &self,
        question_id: i32,
        page: u64,
    ) -> Result<QuestionDeleted, TriviaError> {
        let deleted = self
            .questions
            .delete(question_id)
            .await
            .map_err(write_failed(
                "Question was not deleted. Something went wrong!".to_string(),
            ))?;
        if !deleted {
            return Err(TriviaError::not_found("question", question_id));
        }
        tracing::info!(question_id, "question deleted");

        let questions = self.all_questions().await?;
        Ok(QuestionDeleted {
            deleted: question_id,
            page: self.slice_page(&questions, page),
        })
    }

    /// Add a question and return `page` of the updated list
    pub async fn create_question(
        &self,
        input: QuestionInput,
        page: u64,
    ) -> Result<QuestionCreated, TriviaError> {
        let new_question = validate_question(input)?;
        let question = self.questions.create(&new_question).await.map_err(write_failed(
            "An error occurred. Question could not be created.".to_string(),
        ))?;
        tracing::info!(
            question_id = question.id,
            category = question.category,
            "question created"
        );

        let questions = self.all_questions().await?;
        Ok(QuestionCreated {
            question,
            page: self.slice_page(&questions, page),
        })
    }

    /// Questions whose text contains `term`, ignoring case
    pub async fn search_questions(
        &self,
        term: Option<&str>,
        page: u64,
    ) -> Result<QuestionPage, TriviaError> {
        let questions = self.all_questions().await?;
        let matches = filter_by_term(questions, term, |question: &Question| {
            question.question.as_str()
        });
        tracing::debug!(term = term.unwrap_or_default(), hits = matches.len(), "question search");
        if matches.is_empty() {
            return Err(TriviaError::not_found(
                "question",
                format!("matching '{}'", term.unwrap_or_default()),
            ));
        }
        self.require_page(matches, page)
    }

    /// One page of the questions in a category
    pub async fn questions_by_category(
        &self,
        category_id: i32,
        page: u64,
    ) -> Result<CategoryQuestions, TriviaError> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await
            .map_err(read_failed("find category"))?
            .ok_or_else(|| TriviaError::not_found("category", category_id))?;
        let questions = self
            .questions
            .list_by_category(category_id)
            .await
            .map_err(read_failed("list category questions"))?;
        if questions.is_empty() {
            return Err(TriviaError::not_found(
                "question",
                format!("in category {category_id}"),
            ));
        }
        let page = self.require_page(questions, page)?;
        Ok(CategoryQuestions { category, page })
    }

    // ===== Quiz Operations =====

    /// Random question from the requested category that was not served before
    pub async fn next_quiz_question(&self, request: QuizRequest) -> Result<Question, TriviaError> {
        let candidates = match request.category {
            QuizCategory::All => self.all_questions().await?,
            QuizCategory::Only(category_id) => self
                .questions
                .list_by_category(category_id)
                .await
                .map_err(read_failed("list category questions"))?,
        };
        let previous: HashSet<i32> = request.previous_questions.iter().copied().collect();

        let picked = {
            let mut rng = rand::rng();
            quiz::select_next(&candidates, request.category, &previous, &mut rng).cloned()
        };
        match picked {
            Some(question) => {
                tracing::debug!(
                    question_id = question.id,
                    served = previous.len(),
                    "quiz question selected"
                );
                Ok(question)
            }
            None => Err(TriviaError::not_found(
                "quiz question",
                match request.category {
                    QuizCategory::All => "any category".to_string(),
                    QuizCategory::Only(id) => format!("category {id}"),
                },
            )),
        }
    }

    // ===== Helper Methods =====

    async fn all_questions(&self) -> Result<Vec<Question>, TriviaError> {
        self.questions
            .list_all()
            .await
            .map_err(read_failed("list questions"))
    }

    fn page_request(&self, page: u64) -> PageRequest {
        PageRequest::new(page, self.config.questions_per_page)
    }

    /// Slice `page`; an empty slice is a valid answer
    fn slice_page(&self, questions: &[Question], page: u64) -> QuestionPage {
        QuestionPage {
            questions: page_slice(questions, self.page_request(page)).to_vec(),
            total_questions: questions.len(),
        }
    }

    /// Slice `page`; an empty slice is `NotFound`
    fn require_page(&self, questions: Vec<Question>, page: u64) -> Result<QuestionPage, TriviaError> {
        let sliced = self.slice_page(&questions, page);
        if sliced.questions.is_empty() {
            tracing::debug!(
                page,
                pages = page_count(questions.len(), self.config.questions_per_page),
                "page out of range"
            );
            return Err(TriviaError::not_found("page", page));
        }
        Ok(sliced)
    }
}

/// Log a failed read and hide the cause from the caller
fn read_failed(operation: &'static str) -> impl FnOnce(anyhow::Error) -> TriviaError {
    move |error| {
        tracing::error!(error = ?error, operation, "trivia read failed");
        TriviaError::store_failure(LOAD_FAILED)
    }
}

/// Log a failed (and rolled back) write and surface `message` instead
fn write_failed(message: String) -> impl FnOnce(anyhow::Error) -> TriviaError {
    move |error| {
        tracing::error!(error = ?error, "trivia write failed");
        TriviaError::store_failure(message)
    }
}
