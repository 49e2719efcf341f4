//! Shared fixtures: in-memory repositories, sample questions and a SQLite store
#![allow(dead_code)]

use anyhow::bail;
use async_trait::async_trait;
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::BTreeMap;
use std::sync::Arc;
use trivia_service::config::Config;
use trivia_service::contract::*;
use trivia_service::domain::repository::{CategoryRepository, QuestionRepository};
use trivia_service::domain::Service;

pub fn question_input(text: &str, answer: &str, category: i32) -> QuestionInput {
    QuestionInput {
        question: Some(text.to_string()),
        answer: Some(answer.to_string()),
        category: Some(category),
        difficulty: Some(2),
    }
}

pub fn new_question(text: &str, category: i32) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: "42".to_string(),
        category,
        difficulty: 3,
    }
}

// ===== In-memory repositories =====

#[derive(Default)]
struct MockState {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_category: i32,
    next_question: i32,
}

/// One store backing both repository traits
#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<RwLock<MockState>>,
    fail_reads: Arc<RwLock<bool>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        *self.fail_reads.write() = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.write() = fail;
    }

    pub fn question_count(&self) -> usize {
        self.state.read().questions.len()
    }

    /// Insert a category directly, bypassing validation
    pub fn seed_category(&self, label: &str) -> i32 {
        let mut state = self.state.write();
        state.next_category += 1;
        let id = state.next_category;
        state.categories.insert(
            id,
            Category {
                id,
                r#type: label.to_string(),
            },
        );
        id
    }

    /// Insert a question directly, bypassing validation
    pub fn seed_question(&self, text: &str, category: i32) -> i32 {
        let mut state = self.state.write();
        state.next_question += 1;
        let id = state.next_question;
        state.questions.insert(
            id,
            Question {
                id,
                question: text.to_string(),
                answer: format!("answer {id}"),
                category,
                difficulty: 1,
            },
        );
        id
    }

    fn check_read(&self) -> anyhow::Result<()> {
        if *self.fail_reads.read() {
            bail!("connection reset by peer");
        }
        Ok(())
    }

    fn check_write(&self) -> anyhow::Result<()> {
        if *self.fail_writes.read() {
            bail!("disk I/O error");
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MockStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Category>> {
        self.check_read()?;
        Ok(self.state.read().categories.values().cloned().collect())
    }

    async fn find_by_id(&self, category_id: i32) -> anyhow::Result<Option<Category>> {
        self.check_read()?;
        Ok(self.state.read().categories.get(&category_id).cloned())
    }

    async fn create(&self, label: &str) -> anyhow::Result<Category> {
        self.check_write()?;
        let id = self.seed_category(label);
        Ok(Category {
            id,
            r#type: label.to_string(),
        })
    }
}

#[async_trait]
impl QuestionRepository for MockStore {
    async fn list_all(&self) -> anyhow::Result<Vec<Question>> {
        self.check_read()?;
        Ok(self.state.read().questions.values().cloned().collect())
    }

    async fn list_by_category(&self, category_id: i32) -> anyhow::Result<Vec<Question>> {
        self.check_read()?;
        Ok(self
            .state
            .read()
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn create(&self, question: &NewQuestion) -> anyhow::Result<Question> {
        self.check_write()?;
        let mut state = self.state.write();
        if !state.categories.contains_key(&question.category) {
            bail!("category {} does not exist", question.category);
        }
        state.next_question += 1;
        let id = state.next_question;
        let question = Question {
            id,
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        };
        state.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete(&self, question_id: i32) -> anyhow::Result<bool> {
        self.check_write()?;
        Ok(self.state.write().questions.remove(&question_id).is_some())
    }
}

/// Service over a fresh in-memory store
pub fn mock_service() -> (Arc<Service>, MockStore) {
    mock_service_with(Config::default())
}

pub fn mock_service_with(config: Config) -> (Arc<Service>, MockStore) {
    let store = MockStore::new();
    let service = Arc::new(Service::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        config,
    ));
    (service, store)
}

// ===== SQLite =====

/// Fresh in-memory SQLite database with the trivia schema applied
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    trivia_service::TriviaServiceModule::default()
        .migrate(&db)
        .await
        .unwrap();
    Arc::new(db)
}
