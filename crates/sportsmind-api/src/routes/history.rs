use axum::Json;
use axum::extract::State;
use jiff::Timestamp;
use serde::Deserialize;
use uuid::Uuid;

use sportsmind_core::models::test_result::{TestHistory, TestResult};
use sportsmind_scoring::error::ScoringError;
use sportsmind_scoring::history::{self, DEFAULT_LIMIT, HistoryQuery, Period, SortBy};

use crate::error::ApiError;
use crate::extract::{ApiPath, ApiQuery};
use crate::routes::{MAX_PAGE_LIMIT, page_limit};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub period: Option<String>,
    /// Comma-separated athlete type ids.
    pub athlete_types: Option<String>,
    pub score_min: Option<f64>,
    pub score_max: Option<f64>,
    pub sort_by: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl HistoryParams {
    fn into_query(self) -> Result<HistoryQuery, ScoringError> {
        let limit = page_limit(self.limit, DEFAULT_LIMIT, MAX_PAGE_LIMIT)?;
        Ok(HistoryQuery {
            period: self
                .period
                .as_deref()
                .map(str::parse::<Period>)
                .transpose()?
                .unwrap_or_default(),
            athlete_types: self
                .athlete_types
                .as_deref()
                .map(history::parse_athlete_types)
                .transpose()?
                .unwrap_or_default(),
            score_min: self.score_min,
            score_max: self.score_max,
            sort_by: self
                .sort_by
                .as_deref()
                .map(str::parse::<SortBy>)
                .transpose()?
                .unwrap_or_default(),
            offset: self.offset.unwrap_or(0),
            limit,
        })
    }
}

pub async fn list_user_results(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<HistoryParams>,
) -> Result<Json<TestHistory>, ApiError> {
    let query = params.into_query()?;
    let results = state.repo.list_results_for_user(user_id).await?;
    Ok(Json(query.apply(results, Timestamp::now())))
}

pub async fn latest_user_result(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> Result<Json<TestResult>, ApiError> {
    let results = state.repo.list_results_for_user(user_id).await?;
    history::latest(&results)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no results for user {user_id}")))
}
