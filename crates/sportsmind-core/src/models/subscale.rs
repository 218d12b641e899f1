use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Top-level question category. Every subcategory belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Sportsmanship,
    AthleteMind,
    SelfAffirmation,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Sportsmanship,
        Category::AthleteMind,
        Category::SelfAffirmation,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Sportsmanship => "sportsmanship",
            Category::AthleteMind => "athlete_mind",
            Category::SelfAffirmation => "self_affirmation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Sportsmanship => "Sportsmanship",
            Category::AthleteMind => "Athlete Mind",
            Category::SelfAffirmation => "Self-Affirmation",
        }
    }

    /// Subcategories of this category, in canonical order.
    pub fn subcategories(self) -> &'static [Subcategory] {
        match self {
            Category::Sportsmanship => &Subcategory::SPORTSMANSHIP,
            Category::AthleteMind => &Subcategory::ATHLETE_MIND,
            Category::SelfAffirmation => &Subcategory::SELF_AFFIRMATION,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One of the 19 psychological sub-scales measured by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Subcategory {
    // Sportsmanship
    Courage,
    Resilience,
    Cooperation,
    NaturalAcceptance,
    NonRationality,

    // Athlete mind
    Commitment,
    Result,
    Steadiness,
    Devotion,
    SelfControl,
    Assertion,
    Sensitivity,
    Intuition,
    Introspection,
    Comparison,

    // Self-affirmation
    SelfDetermination,
    SelfAcceptance,
    SelfWorth,
    SelfEfficacy,
}

impl Subcategory {
    pub const SPORTSMANSHIP: [Subcategory; 5] = [
        Subcategory::Courage,
        Subcategory::Resilience,
        Subcategory::Cooperation,
        Subcategory::NaturalAcceptance,
        Subcategory::NonRationality,
    ];

    pub const ATHLETE_MIND: [Subcategory; 10] = [
        Subcategory::Commitment,
        Subcategory::Result,
        Subcategory::Steadiness,
        Subcategory::Devotion,
        Subcategory::SelfControl,
        Subcategory::Assertion,
        Subcategory::Sensitivity,
        Subcategory::Intuition,
        Subcategory::Introspection,
        Subcategory::Comparison,
    ];

    pub const SELF_AFFIRMATION: [Subcategory; 4] = [
        Subcategory::SelfDetermination,
        Subcategory::SelfAcceptance,
        Subcategory::SelfWorth,
        Subcategory::SelfEfficacy,
    ];

    pub const ALL: [Subcategory; 19] = [
        Subcategory::Courage,
        Subcategory::Resilience,
        Subcategory::Cooperation,
        Subcategory::NaturalAcceptance,
        Subcategory::NonRationality,
        Subcategory::Commitment,
        Subcategory::Result,
        Subcategory::Steadiness,
        Subcategory::Devotion,
        Subcategory::SelfControl,
        Subcategory::Assertion,
        Subcategory::Sensitivity,
        Subcategory::Intuition,
        Subcategory::Introspection,
        Subcategory::Comparison,
        Subcategory::SelfDetermination,
        Subcategory::SelfAcceptance,
        Subcategory::SelfWorth,
        Subcategory::SelfEfficacy,
    ];

    pub fn category(self) -> Category {
        match self {
            Subcategory::Courage
            | Subcategory::Resilience
            | Subcategory::Cooperation
            | Subcategory::NaturalAcceptance
            | Subcategory::NonRationality => Category::Sportsmanship,
            Subcategory::SelfDetermination
            | Subcategory::SelfAcceptance
            | Subcategory::SelfWorth
            | Subcategory::SelfEfficacy => Category::SelfAffirmation,
            _ => Category::AthleteMind,
        }
    }

    /// Wire identifier (matches the serde representation).
    pub fn id(self) -> &'static str {
        match self {
            Subcategory::Courage => "courage",
            Subcategory::Resilience => "resilience",
            Subcategory::Cooperation => "cooperation",
            Subcategory::NaturalAcceptance => "natural_acceptance",
            Subcategory::NonRationality => "non_rationality",
            Subcategory::Commitment => "commitment",
            Subcategory::Result => "result",
            Subcategory::Steadiness => "steadiness",
            Subcategory::Devotion => "devotion",
            Subcategory::SelfControl => "self_control",
            Subcategory::Assertion => "assertion",
            Subcategory::Sensitivity => "sensitivity",
            Subcategory::Intuition => "intuition",
            Subcategory::Introspection => "introspection",
            Subcategory::Comparison => "comparison",
            Subcategory::SelfDetermination => "self_determination",
            Subcategory::SelfAcceptance => "self_acceptance",
            Subcategory::SelfWorth => "self_worth",
            Subcategory::SelfEfficacy => "self_efficacy",
        }
    }

    /// Human-readable name used in narrative text.
    pub fn label(self) -> &'static str {
        match self {
            Subcategory::Courage => "Courage",
            Subcategory::Resilience => "Resilience",
            Subcategory::Cooperation => "Cooperation",
            Subcategory::NaturalAcceptance => "Natural Acceptance",
            Subcategory::NonRationality => "Non-Rationality",
            Subcategory::Commitment => "Commitment",
            Subcategory::Result => "Result Orientation",
            Subcategory::Steadiness => "Steadiness",
            Subcategory::Devotion => "Devotion",
            Subcategory::SelfControl => "Self-Control",
            Subcategory::Assertion => "Assertion",
            Subcategory::Sensitivity => "Sensitivity",
            Subcategory::Intuition => "Intuition",
            Subcategory::Introspection => "Introspection",
            Subcategory::Comparison => "Comparison",
            Subcategory::SelfDetermination => "Self-Determination",
            Subcategory::SelfAcceptance => "Self-Acceptance",
            Subcategory::SelfWorth => "Self-Worth",
            Subcategory::SelfEfficacy => "Self-Efficacy",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Subcategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subcategory::ALL
            .into_iter()
            .find(|sub| sub.id() == s)
            .ok_or_else(|| CoreError::UnknownSubcategory(s.to_string()))
    }
}

/// Normalized sub-scale scores (0–50 each) for one test attempt.
///
/// One named field per sub-scale; look-ups by [`Subcategory`] go through
/// [`SubscaleScores::get`] so there are no string keys to mistype.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubscaleScores {
    pub courage: f64,
    pub resilience: f64,
    pub cooperation: f64,
    pub natural_acceptance: f64,
    pub non_rationality: f64,

    pub commitment: f64,
    pub result: f64,
    pub steadiness: f64,
    pub devotion: f64,
    pub self_control: f64,
    pub assertion: f64,
    pub sensitivity: f64,
    pub intuition: f64,
    pub introspection: f64,
    pub comparison: f64,

    pub self_determination: f64,
    pub self_acceptance: f64,
    pub self_worth: f64,
    pub self_efficacy: f64,
}

impl SubscaleScores {
    /// All scores set to the same value.
    pub fn uniform(value: f64) -> Self {
        let mut scores = Self::default();
        for sub in Subcategory::ALL {
            scores.set(sub, value);
        }
        scores
    }

    pub fn get(&self, sub: Subcategory) -> f64 {
        match sub {
            Subcategory::Courage => self.courage,
            Subcategory::Resilience => self.resilience,
            Subcategory::Cooperation => self.cooperation,
            Subcategory::NaturalAcceptance => self.natural_acceptance,
            Subcategory::NonRationality => self.non_rationality,
            Subcategory::Commitment => self.commitment,
            Subcategory::Result => self.result,
            Subcategory::Steadiness => self.steadiness,
            Subcategory::Devotion => self.devotion,
            Subcategory::SelfControl => self.self_control,
            Subcategory::Assertion => self.assertion,
            Subcategory::Sensitivity => self.sensitivity,
            Subcategory::Intuition => self.intuition,
            Subcategory::Introspection => self.introspection,
            Subcategory::Comparison => self.comparison,
            Subcategory::SelfDetermination => self.self_determination,
            Subcategory::SelfAcceptance => self.self_acceptance,
            Subcategory::SelfWorth => self.self_worth,
            Subcategory::SelfEfficacy => self.self_efficacy,
        }
    }

    pub fn set(&mut self, sub: Subcategory, value: f64) {
        let slot = match sub {
            Subcategory::Courage => &mut self.courage,
            Subcategory::Resilience => &mut self.resilience,
            Subcategory::Cooperation => &mut self.cooperation,
            Subcategory::NaturalAcceptance => &mut self.natural_acceptance,
            Subcategory::NonRationality => &mut self.non_rationality,
            Subcategory::Commitment => &mut self.commitment,
            Subcategory::Result => &mut self.result,
            Subcategory::Steadiness => &mut self.steadiness,
            Subcategory::Devotion => &mut self.devotion,
            Subcategory::SelfControl => &mut self.self_control,
            Subcategory::Assertion => &mut self.assertion,
            Subcategory::Sensitivity => &mut self.sensitivity,
            Subcategory::Intuition => &mut self.intuition,
            Subcategory::Introspection => &mut self.introspection,
            Subcategory::Comparison => &mut self.comparison,
            Subcategory::SelfDetermination => &mut self.self_determination,
            Subcategory::SelfAcceptance => &mut self.self_acceptance,
            Subcategory::SelfWorth => &mut self.self_worth,
            Subcategory::SelfEfficacy => &mut self.self_efficacy,
        };
        *slot = value;
    }

    /// `(subcategory, score)` pairs for one category, in canonical order.
    pub fn category_scores(&self, category: Category) -> Vec<(Subcategory, f64)> {
        category
            .subcategories()
            .iter()
            .map(|&sub| (sub, self.get(sub)))
            .collect()
    }

    /// Sum of the four self-affirmation scores, rounded to one decimal.
    pub fn self_esteem_total(&self) -> f64 {
        let sum: f64 = Subcategory::SELF_AFFIRMATION
            .iter()
            .map(|&sub| self.get(sub))
            .sum();
        (sum * 10.0).round() / 10.0
    }

    /// Mean of the five sportsmanship scores.
    pub fn sportsmanship_mean(&self) -> f64 {
        let sum: f64 = Subcategory::SPORTSMANSHIP
            .iter()
            .map(|&sub| self.get(sub))
            .sum();
        sum / Subcategory::SPORTSMANSHIP.len() as f64
    }
}
