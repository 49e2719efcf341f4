//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs. Lists come back
//! ordered by id; every write runs in its own transaction.

use crate::contract::{Category, NewQuestion, Question};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id
    async fn list_all(&self) -> Result<Vec<Category>>;

    /// Find a category by id
    async fn find_by_id(&self, category_id: i32) -> Result<Option<Category>>;

    /// Insert a category and return it with its new id
    async fn create(&self, label: &str) -> Result<Category>;
}

/// Repository for questions
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions ordered by id
    async fn list_all(&self) -> Result<Vec<Question>>;

    /// Questions of one category ordered by id
    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// Insert a question. Fails when the category does not exist.
    async fn create(&self, question: &NewQuestion) -> Result<Question>;

    /// Delete a question, `false` if it did not exist
    async fn delete(&self, question_id: i32) -> Result<bool>;
}
