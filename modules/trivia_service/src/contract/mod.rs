//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::TriviaApi;
pub use error::TriviaError;
pub use model::{
    Category, CategoryQuestions, NewQuestion, Question, QuestionCreated, QuestionDeleted,
    QuestionInput, QuestionListing, QuestionPage, QuizCategory, QuizRequest,
};
