//! Domain layer - business logic and services

pub mod quiz;
pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{CategoryRepository, QuestionRepository};
pub use service::Service;
