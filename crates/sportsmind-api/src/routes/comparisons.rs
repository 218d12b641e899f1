use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use jiff::Timestamp;
use serde::Deserialize;
use uuid::Uuid;

use sportsmind_core::models::comparison::{Comparison, ComparisonHistory};
use sportsmind_scoring::comparison;
use sportsmind_scoring::history::DEFAULT_LIMIT;

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::routes::{MAX_PAGE_LIMIT, page_limit};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateComparison {
    pub result_ids: [Uuid; 2],
}

#[derive(Debug, Default, Deserialize)]
pub struct ComparisonHistoryParams {
    /// Only comparisons that include this result.
    pub result_id: Option<Uuid>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

pub async fn create_comparison(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateComparison>,
) -> Result<(StatusCode, Json<Comparison>), ApiError> {
    let [first_id, second_id] = req.result_ids;
    if first_id == second_id {
        return Err(ApiError::validation(
            "result_ids",
            "a comparison needs two different results",
        ));
    }

    let first = state.repo.get_result(first_id).await?;
    let second = state.repo.get_result(second_id).await?;
    let comparison = comparison::compare(Uuid::new_v4(), &first, &second, Timestamp::now());

    state.repo.put_comparison(&comparison).await?;
    AuditEvent::new("create", "comparison", comparison.id)
        .with_details(serde_json::json!({ "result_ids": comparison.result_ids }))
        .emit();
    Ok((StatusCode::CREATED, Json(comparison)))
}

pub async fn get_comparison(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Comparison>, ApiError> {
    Ok(Json(state.repo.get_comparison(id).await?))
}

/// Stored comparisons, newest first.
pub async fn comparison_history(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ComparisonHistoryParams>,
) -> Result<Json<ComparisonHistory>, ApiError> {
    let limit = page_limit(params.limit, DEFAULT_LIMIT, MAX_PAGE_LIMIT)?;
    let comparisons = state.repo.list_comparisons().await?;
    Ok(Json(comparison::history(
        comparisons,
        params.result_id,
        params.offset.unwrap_or(0),
        limit,
    )))
}
