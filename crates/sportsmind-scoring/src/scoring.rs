use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use sportsmind_core::models::subscale::{Category, Subcategory, SubscaleScores};

/// Largest raw answer value.
pub const MAX_ANSWER: u8 = 10;

/// Upper bound of a normalized sub-scale score.
pub const MAX_SUBSCALE_SCORE: f64 = 50.0;

pub const ANSWER_RANGE: ScoreRange = ScoreRange {
    min: 0.0,
    max: MAX_ANSWER as f64,
    step: Some(1.0),
};

pub const SUBSCALE_RANGE: ScoreRange = ScoreRange {
    min: 0.0,
    max: MAX_SUBSCALE_SCORE,
    step: None,
};

pub const SELF_ESTEEM_RANGE: ScoreRange = ScoreRange {
    min: 0.0,
    max: 4.0 * MAX_SUBSCALE_SCORE,
    step: None,
};

/// The kind of value a range describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreType {
    /// Likert-style answer, 0–10.
    Rating,
    /// Item mean rescaled to 0–50.
    Normalized,
    /// Sum of normalized sub-scales.
    Composite,
}

/// Defines the valid range for a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub fn contains(&self, value: f64) -> bool {
        if value.is_nan() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A sub-scale as exposed in the questionnaire schema.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Subscale {
    pub id: Subcategory,
    pub name: String,
    pub score_type: ScoreType,
    pub range: ScoreRange,
    pub answer_type: ScoreType,
    pub answer_range: ScoreRange,
}

/// A question category with its sub-scales.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Domain {
    pub id: Category,
    pub name: String,
    pub subscales: Vec<Subscale>,
    pub composite_score_type: Option<ScoreType>,
    pub composite_range: Option<ScoreRange>,
    pub description: Option<String>,
}

/// A score that falls outside its sub-scale's range.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct RangeViolation {
    pub subscale_id: Subcategory,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub message: String,
}

/// The questionnaire schema: three categories, nineteen sub-scales.
pub fn domains() -> &'static [Domain] {
    static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
        Category::ALL
            .into_iter()
            .map(|category| Domain {
                id: category,
                name: category.label().to_string(),
                subscales: category
                    .subcategories()
                    .iter()
                    .map(|&sub| Subscale {
                        id: sub,
                        name: sub.label().to_string(),
                        score_type: ScoreType::Normalized,
                        range: SUBSCALE_RANGE,
                        answer_type: ScoreType::Rating,
                        answer_range: ANSWER_RANGE,
                    })
                    .collect(),
                composite_score_type: (category == Category::SelfAffirmation)
                    .then_some(ScoreType::Composite),
                composite_range: (category == Category::SelfAffirmation)
                    .then_some(SELF_ESTEEM_RANGE),
                description: Some(domain_description(category).to_string()),
            })
            .collect()
    });
    &DOMAINS
}

fn domain_description(category: Category) -> &'static str {
    match category {
        Category::Sportsmanship => {
            "Reverse-scored items; higher scores indicate more mature sportsmanship"
        }
        Category::AthleteMind => "Ten traits that drive the athlete type classification",
        Category::SelfAffirmation => "Composite self-esteem total is the sum of the four sub-scales",
    }
}

/// Check every sub-scale score against [`SUBSCALE_RANGE`].
pub fn validate_scores(scores: &SubscaleScores) -> Vec<RangeViolation> {
    Subcategory::ALL
        .into_iter()
        .filter_map(|sub| {
            let value = scores.get(sub);
            (!SUBSCALE_RANGE.contains(value)).then(|| RangeViolation {
                subscale_id: sub,
                value,
                expected_range: SUBSCALE_RANGE,
                message: format!(
                    "{} score {} is outside range [{}, {}]",
                    sub.label(),
                    value,
                    SUBSCALE_RANGE.min,
                    SUBSCALE_RANGE.max,
                ),
            })
        })
        .collect()
}

/// Round half away from zero to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
