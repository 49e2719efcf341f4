//! Trivia Service Module
//!
//! Categorized trivia questions with paging, free-text search and a quiz mode
//! that serves a random unseen question per call.

// Public exports
pub mod contract;
pub use contract::{
    client::TriviaApi, error::TriviaError, Category, Question, QuestionPage, QuizCategory,
    QuizRequest,
};

pub mod module;
pub use module::TriviaServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
