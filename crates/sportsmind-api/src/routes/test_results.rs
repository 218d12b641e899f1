use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use jiff::Timestamp;
use serde_json::json;
use uuid::Uuid;

use sportsmind_core::models::test_result::{TestResult, TestSubmission};
use sportsmind_scoring::error::ScoringError;
use sportsmind_scoring::{evaluate, narrative, scoring};

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Score a submission and persist the result with its analysis.
pub async fn submit_test(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<TestSubmission>,
) -> Result<(StatusCode, Json<TestResult>), ApiError> {
    let catalog = state.catalog().await;
    let evaluation = evaluate(&catalog, submission.target, &submission.answers)?;
    if let Some(violation) = scoring::validate_scores(&evaluation.scores).into_iter().next() {
        return Err(ScoringError::from(violation).into());
    }

    let now = Timestamp::now();
    let result = TestResult {
        id: Uuid::new_v4(),
        user_id: submission.user_id,
        target: submission.target,
        taken_at: submission.taken_at.unwrap_or(now),
        scores: evaluation.scores,
        self_esteem_total: evaluation.self_esteem_total,
        analysis: Some(evaluation.analysis),
        created_at: now,
        updated_at: now,
    };

    state.repo.put_result(&result).await?;
    AuditEvent::new("create", "test_result", result.id)
        .by(result.user_id)
        .with_details(json!({
            "target": result.target,
            "athlete_type": result.athlete_type(),
            "self_esteem_total": result.self_esteem_total,
        }))
        .emit();
    Ok((StatusCode::CREATED, Json(result)))
}

pub async fn get_test_result(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<TestResult>, ApiError> {
    Ok(Json(state.repo.get_result(id).await?))
}

/// Rebuild the analysis from the stored scores. Scores are never rewritten.
pub async fn recompute_analysis(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<TestResult>, ApiError> {
    let mut result = state.repo.get_result(id).await?;
    result.analysis = Some(narrative::analyze(&result.scores, result.target));
    result.updated_at = Timestamp::now();

    state.repo.put_result(&result).await?;
    AuditEvent::new("recompute_analysis", "test_result", id)
        .by(result.user_id)
        .emit();
    Ok(Json(result))
}
