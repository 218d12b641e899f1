use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::subscale::{Category, Subcategory};
use crate::error::CoreError;

/// Audience a question is written for, or the respondent's own audience.
///
/// `All` only makes sense on a question; a respondent is always one of the
/// concrete audiences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Target {
    #[default]
    All,
    Player,
    Coach,
    Mother,
    Father,
    Adult,
}

impl Target {
    /// Concrete respondent audiences.
    pub const RESPONDENTS: [Target; 5] = [
        Target::Player,
        Target::Coach,
        Target::Mother,
        Target::Father,
        Target::Adult,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Target::All => "all",
            Target::Player => "player",
            Target::Coach => "coach",
            Target::Mother => "mother",
            Target::Father => "father",
            Target::Adult => "adult",
        }
    }

    pub fn is_respondent(self) -> bool {
        self != Target::All
    }

    /// Whether a question written for `self` is shown to `respondent`.
    pub fn applies_to(self, respondent: Target) -> bool {
        self == Target::All || self == respondent
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Target {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Target::All),
            "player" => Ok(Target::Player),
            "coach" => Ok(Target::Coach),
            "mother" => Ok(Target::Mother),
            "father" => Ok(Target::Father),
            "adult" => Ok(Target::Adult),
            other => Err(CoreError::UnknownTarget(other.to_string())),
        }
    }
}

/// A questionnaire item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: Uuid,
    /// Display and ordering key; unique across the catalog.
    pub number: u32,
    pub text: String,
    pub category: Category,
    pub subcategory: Subcategory,
    #[serde(default)]
    pub target: Target,
    #[serde(default)]
    pub reverse_scored: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Payload for creating a question through the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewQuestion {
    pub number: u32,
    pub text: String,
    pub category: Category,
    pub subcategory: Subcategory,
    #[serde(default)]
    pub target: Target,
    #[serde(default)]
    pub reverse_scored: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl NewQuestion {
    pub fn into_question(self, id: Uuid) -> Question {
        Question {
            id,
            number: self.number,
            text: self.text,
            category: self.category,
            subcategory: self.subcategory,
            target: self.target,
            reverse_scored: self.reverse_scored,
            active: self.active,
        }
    }
}

/// Partial update of a question. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionPatch {
    pub text: Option<String>,
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
    pub target: Option<Target>,
    pub reverse_scored: Option<bool>,
    pub active: Option<bool>,
}

impl QuestionPatch {
    pub fn apply(self, question: &mut Question) {
        if let Some(text) = self.text {
            question.text = text;
        }
        if let Some(category) = self.category {
            question.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            question.subcategory = subcategory;
        }
        if let Some(target) = self.target {
            question.target = target;
        }
        if let Some(reverse_scored) = self.reverse_scored {
            question.reverse_scored = reverse_scored;
        }
        if let Some(active) = self.active {
            question.active = active;
        }
    }
}

/// A page of questions plus the count matching the filter.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionList {
    pub questions: Vec<Question>,
    pub total_count: usize,
}
