//! Raw answers to normalized sub-scale scores.

use std::collections::{BTreeMap, HashMap};

use uuid::Uuid;

use sportsmind_core::models::question::{Question, Target};
use sportsmind_core::models::subscale::{Subcategory, SubscaleScores};
use sportsmind_core::models::test_result::{Answer, AnswerInput};

use crate::catalog::Catalog;
use crate::error::ScoringError;
use crate::scoring::{ANSWER_RANGE, MAX_ANSWER, MAX_SUBSCALE_SCORE, round1};

/// Number of answers every submission must carry.
pub const EXPECTED_ANSWER_COUNT: usize = 99;

/// Validate a submission at the request boundary.
///
/// Checks, in order: the target is a respondent audience, the answer count
/// is exactly [`EXPECTED_ANSWER_COUNT`], each question id is a UUID and
/// each value lies in [0, 10].
pub fn validate_submission(
    target: Target,
    answers: &[AnswerInput],
) -> Result<Vec<Answer>, ScoringError> {
    if !target.is_respondent() {
        return Err(ScoringError::NotARespondent(target));
    }
    if answers.len() != EXPECTED_ANSWER_COUNT {
        return Err(ScoringError::AnswerCount {
            expected: EXPECTED_ANSWER_COUNT,
            actual: answers.len(),
        });
    }

    answers.iter().map(validate_answer).collect()
}

fn validate_answer(input: &AnswerInput) -> Result<Answer, ScoringError> {
    let question_id =
        Uuid::parse_str(input.question_id.trim()).map_err(|_| ScoringError::MalformedId {
            field: "answers.question_id",
            value: input.question_id.clone(),
        })?;

    if !ANSWER_RANGE.contains(input.value as f64) {
        return Err(ScoringError::AnswerOutOfRange {
            question_id,
            value: input.value,
        });
    }

    Ok(Answer {
        question_id,
        // In range, so the cast is lossless.
        value: input.value as u8,
    })
}

/// Item score after reverse-scoring.
pub fn item_score(question: &Question, raw: u8) -> f64 {
    let raw = f64::from(raw.min(MAX_ANSWER));
    if question.reverse_scored {
        f64::from(MAX_ANSWER) - raw
    } else {
        raw
    }
}

/// Rescale a 0–10 item mean to the 0–50 sub-scale range.
pub fn normalize(mean: f64) -> f64 {
    round1(mean / f64::from(MAX_ANSWER) * MAX_SUBSCALE_SCORE)
}

/// Aggregate validated answers into sub-scale scores.
///
/// Answers to questions outside the respondent's applicable catalog are
/// skipped without error. When a question is answered twice the later
/// answer wins. Sub-scales with no answered items score 0.
pub fn aggregate(catalog: &Catalog, target: Target, answers: &[Answer]) -> SubscaleScores {
    let applicable: HashMap<Uuid, &Question> =
        catalog.applicable(target).map(|q| (q.id, q)).collect();

    let latest: BTreeMap<Uuid, u8> = answers
        .iter()
        .map(|a| (a.question_id, a.value))
        .collect();

    let mut totals: BTreeMap<Subcategory, (f64, u32)> = BTreeMap::new();
    let mut ignored = 0usize;
    for (question_id, value) in &latest {
        let Some(question) = applicable.get(question_id) else {
            ignored += 1;
            tracing::debug!(%question_id, %target, "ignoring answer to unknown question");
            continue;
        };
        let entry = totals.entry(question.subcategory).or_insert((0.0, 0));
        entry.0 += item_score(question, *value);
        entry.1 += 1;
    }

    if ignored > 0 {
        tracing::info!(ignored, %target, "answers skipped during aggregation");
    }

    let mut scores = SubscaleScores::default();
    for (sub, (sum, count)) in totals {
        if count > 0 {
            scores.set(sub, normalize(sum / f64::from(count)));
        }
    }
    scores
}

/// Validate and aggregate in one step.
pub fn score(
    catalog: &Catalog,
    target: Target,
    answers: &[AnswerInput],
) -> Result<SubscaleScores, ScoringError> {
    let answers = validate_submission(target, answers)?;
    Ok(aggregate(catalog, target, &answers))
}
