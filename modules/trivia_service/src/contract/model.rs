//! Contract models for trivia service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// A question category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    /// Display label, e.g. "Science"
    pub r#type: String,
}

/// A trivia question with its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Id of the owning category
    pub category: i32,
    /// 1 (easy) to 5 (hard)
    pub difficulty: i32,
}

/// One page of questions plus the size of the full result set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Question page shown on the main list, with every category for the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub page: QuestionPage,
    pub categories: Vec<Category>,
}

/// Question page restricted to one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub category: Category,
    pub page: QuestionPage,
}

/// Result of adding a question: the new row and the refreshed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCreated {
    pub question: Question,
    pub page: QuestionPage,
}

/// Result of removing a question: its id and the refreshed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDeleted {
    pub deleted: i32,
    pub page: QuestionPage,
}

/// Category constraint for quiz play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizCategory {
    /// Draw from every category
    #[default]
    All,
    /// Draw from a single category
    Only(i32),
}

impl QuizCategory {
    /// Id 0 and a missing id both mean every category
    pub fn from_id(id: Option<i32>) -> Self {
        match id {
            None | Some(0) => Self::All,
            Some(id) => Self::Only(id),
        }
    }
}

/// Request for the next quiz question
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizRequest {
    /// Ids already served in this quiz session
    pub previous_questions: Vec<i32>,
    pub category: QuizCategory,
}

// ===== Submissions =====

/// Question submission as received, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// Validated question fields ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
