use std::collections::HashMap;

use axum::Json;
use serde::{Deserialize, Serialize};

use sportsmind_core::models::athlete_type::{AthleteType, Classification};
use sportsmind_core::models::question::Target;
use sportsmind_scoring::athlete_type;
use sportsmind_scoring::scoring::SUBSCALE_RANGE;

use crate::error::ApiError;
use crate::extract::ApiJson;

#[derive(Serialize)]
pub struct AthleteTypeInfo {
    id: AthleteType,
    label: &'static str,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub athlete_mind_scores: HashMap<String, f64>,
    #[serde(default)]
    pub target: Target,
}

pub async fn list_athlete_types() -> Json<Vec<AthleteTypeInfo>> {
    Json(
        AthleteType::ALL
            .into_iter()
            .map(|t| AthleteTypeInfo {
                id: t,
                label: t.label(),
            })
            .collect(),
    )
}

/// Classify a loose score map without storing anything.
pub async fn analyze_scores(
    ApiJson(req): ApiJson<AnalyzeRequest>,
) -> Result<Json<Classification>, ApiError> {
    if let Some((key, value)) = req
        .athlete_mind_scores
        .iter()
        .find(|(_, v)| !SUBSCALE_RANGE.contains(**v))
    {
        return Err(ApiError::validation(
            format!("athlete_mind_scores.{key}"),
            format!("score {value} is outside range [0, 50]"),
        ));
    }
    Ok(Json(athlete_type::classify_map(&req.athlete_mind_scores, req.target)))
}
