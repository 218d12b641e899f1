use thiserror::Error;
use uuid::Uuid;

use sportsmind_core::models::question::Target;
use sportsmind_core::models::subscale::{Category, Subcategory};

use crate::scoring::RangeViolation;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },

    #[error("answer for question {question_id} is {value}, outside range [0, 10]")]
    AnswerOutOfRange { question_id: Uuid, value: i64 },

    #[error("malformed {field}: {value:?}")]
    MalformedId { field: &'static str, value: String },

    #[error("target must be a respondent audience, got '{0}'")]
    NotARespondent(Target),

    #[error("subcategory '{subcategory}' does not belong to category '{category}'")]
    CategoryMismatch {
        category: Category,
        subcategory: Subcategory,
    },

    #[error("invalid {field}: {value:?}")]
    InvalidParameter { field: &'static str, value: String },

    #[error(transparent)]
    OutOfRange(#[from] RangeViolation),
}

impl ScoringError {
    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ScoringError::AnswerCount { .. } => "answers",
            ScoringError::AnswerOutOfRange { .. } => "answers.value",
            ScoringError::MalformedId { field, .. } => *field,
            ScoringError::NotARespondent(_) => "target",
            ScoringError::CategoryMismatch { .. } => "subcategory",
            ScoringError::InvalidParameter { field, .. } => *field,
            ScoringError::OutOfRange(_) => "scores",
        }
    }
}
