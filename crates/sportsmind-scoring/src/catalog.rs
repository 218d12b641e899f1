//! The question catalog and its audience filters.

use std::sync::LazyLock;

use uuid::Uuid;

use sportsmind_core::models::question::{Question, Target};
use sportsmind_core::models::subscale::Category;

use crate::error::ScoringError;

static SEED: LazyLock<Vec<Question>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/questions.json"))
        .expect("bundled question catalog is valid JSON")
});

/// Listing filter for the admin view of the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionFilter {
    pub category: Option<Category>,
    /// Exact match on the question's own target.
    pub target: Option<Target>,
    /// Only questions applicable to this respondent (`all` or the same target).
    pub respondent: Option<Target>,
    pub active: Option<bool>,
}

/// An ordered, read-only set of questions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|q| q.number);
        Self { questions }
    }

    /// The bundled 99-item questionnaire.
    pub fn seed() -> Self {
        Self::new(SEED.clone())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn number_taken(&self, number: u32) -> bool {
        self.questions.iter().any(|q| q.number == number)
    }

    /// Questions scored for a respondent: every active sportsmanship item,
    /// plus active items of other categories written for `all` or for the
    /// respondent's own target.
    pub fn applicable(&self, respondent: Target) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| {
            q.active
                && (q.category == Category::Sportsmanship || q.target.applies_to(respondent))
        })
    }

    /// Active questions written for `all` or for `target`, optionally
    /// narrowed to one category.
    pub fn for_target(&self, target: Target, category: Option<Category>) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.active && q.target.applies_to(target))
            .filter(|q| category.is_none_or(|c| q.category == c))
            .collect()
    }

    pub fn filter(&self, filter: &QuestionFilter) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| filter.category.is_none_or(|c| q.category == c))
            .filter(|q| filter.target.is_none_or(|t| q.target == t))
            .filter(|q| filter.respondent.is_none_or(|r| q.target.applies_to(r)))
            .filter(|q| filter.active.is_none_or(|a| q.active == a))
            .collect()
    }
}

/// Reject a question whose subcategory sits under a different category.
pub fn check_consistency(question: &Question) -> Result<(), ScoringError> {
    if question.subcategory.category() != question.category {
        return Err(ScoringError::CategoryMismatch {
            category: question.category,
            subcategory: question.subcategory,
        });
    }
    Ok(())
}
