//! sportsmind-scoring
//!
//! The questionnaire engine. Pure computation with no storage or HTTP dependency.
//! Maps raw answers to normalized sub-scale scores, classifies the respondent
//! into an athlete type and renders the narrative analysis.

pub mod aggregate;
pub mod athlete_type;
pub mod catalog;
pub mod comparison;
pub mod error;
pub mod history;
pub mod narrative;
pub mod scoring;

use sportsmind_core::models::question::Target;
use sportsmind_core::models::subscale::SubscaleScores;
use sportsmind_core::models::test_result::{AnswerInput, Analysis};

use catalog::Catalog;
use error::ScoringError;

/// Scores plus analysis for one validated submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub scores: SubscaleScores,
    pub self_esteem_total: f64,
    pub analysis: Analysis,
}

/// Run the full pipeline: validate, aggregate, classify and narrate.
///
/// Fails only on validation; once the answers are accepted every later
/// stage is infallible.
pub fn evaluate(
    catalog: &Catalog,
    target: Target,
    answers: &[AnswerInput],
) -> Result<Evaluation, ScoringError> {
    let scores = aggregate::score(catalog, target, answers)?;
    let analysis = narrative::analyze(&scores, target);
    Ok(Evaluation {
        self_esteem_total: scores.self_esteem_total(),
        scores,
        analysis,
    })
}
