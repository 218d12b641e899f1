use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::athlete_type::{AthleteType, TypeScore};
use super::question::Target;
use super::subscale::{Subcategory, SubscaleScores};

/// One answer as submitted by a client. The identifier stays a string until
/// the submission is validated so malformed ids surface as validation errors.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerInput {
    pub question_id: String,
    pub value: i64,
}

/// A validated answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub question_id: Uuid,
    pub value: u8,
}

/// A test submission.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestSubmission {
    pub target: Target,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub taken_at: Option<jiff::Timestamp>,
    pub answers: Vec<AnswerInput>,
}

/// Derived, recomputable interpretation of a result's scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Analysis {
    pub athlete_type: AthleteType,
    pub athlete_type_description: String,
    pub athlete_type_distribution: Vec<TypeScore>,
    pub strengths: Vec<Subcategory>,
    pub weaknesses: Vec<Subcategory>,
    pub self_esteem_analysis: String,
    pub self_esteem_improvements: Vec<String>,
    pub sportsmanship_balance: String,
}

/// A scored test attempt.
///
/// `scores` and `self_esteem_total` are fixed when the result is created;
/// only `analysis` is ever rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestResult {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub target: Target,
    pub taken_at: jiff::Timestamp,
    pub scores: SubscaleScores,
    pub self_esteem_total: f64,
    pub analysis: Option<Analysis>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl TestResult {
    /// Self-esteem total plus the five sportsmanship scores.
    pub fn overall_score(&self) -> f64 {
        self.self_esteem_total
            + Subcategory::SPORTSMANSHIP
                .iter()
                .map(|&sub| self.scores.get(sub))
                .sum::<f64>()
    }

    pub fn athlete_type(&self) -> Option<AthleteType> {
        self.analysis.as_ref().map(|a| a.athlete_type)
    }
}

/// A page of results plus the unpaginated count.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestHistory {
    pub results: Vec<TestResult>,
    pub total_count: usize,
}
