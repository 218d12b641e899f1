#![allow(dead_code)]

use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

use sportsmind_core::models::question::{Question, Target};
use sportsmind_core::models::subscale::SubscaleScores;
use sportsmind_core::models::test_result::{AnswerInput, TestResult};
use sportsmind_scoring::catalog::Catalog;
use sportsmind_scoring::narrative;

/// One answer per applicable question, valued by `value_for`.
pub fn answers_for(
    catalog: &Catalog,
    target: Target,
    value_for: impl Fn(&Question) -> i64,
) -> Vec<AnswerInput> {
    catalog
        .applicable(target)
        .map(|q| AnswerInput {
            question_id: q.id.to_string(),
            value: value_for(q),
        })
        .collect()
}

pub fn now() -> Timestamp {
    Timestamp::from_second(1_760_000_000).unwrap()
}

pub fn days_ago(days: i64) -> Timestamp {
    now().checked_sub(SignedDuration::from_hours(days * 24)).unwrap()
}

/// An analysed result taken at `taken_at`.
pub fn result_at(scores: SubscaleScores, taken_at: Timestamp) -> TestResult {
    TestResult {
        id: Uuid::new_v4(),
        user_id: Some(Uuid::nil()),
        target: Target::Player,
        taken_at,
        self_esteem_total: scores.self_esteem_total(),
        analysis: Some(narrative::analyze(&scores, Target::Player)),
        scores,
        created_at: taken_at,
        updated_at: taken_at,
    }
}
