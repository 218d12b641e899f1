use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use sportsmind_core::models::question::{NewQuestion, Question, QuestionList, QuestionPatch, Target};
use sportsmind_core::models::subscale::Category;
use sportsmind_scoring::catalog::{QuestionFilter, check_consistency};

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::routes::page_limit;
use crate::state::AppState;

const DEFAULT_QUESTION_LIMIT: usize = 100;
const MAX_QUESTION_LIMIT: usize = 1000;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub category: Option<Category>,
    pub target: Option<Target>,
    /// Defaults to active questions only.
    pub active: Option<bool>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForTargetParams {
    pub category: Option<Category>,
}

pub async fn list_questions(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<QuestionList>, ApiError> {
    let limit = page_limit(params.limit, DEFAULT_QUESTION_LIMIT, MAX_QUESTION_LIMIT)?;
    let catalog = state.catalog().await;
    let filter = QuestionFilter {
        category: params.category,
        target: params.target,
        respondent: None,
        active: Some(params.active.unwrap_or(true)),
    };

    let matching = catalog.filter(&filter);
    let total_count = matching.len();
    let questions = matching
        .into_iter()
        .skip(params.offset.unwrap_or(0))
        .take(limit)
        .cloned()
        .collect();
    Ok(Json(QuestionList {
        questions,
        total_count,
    }))
}

/// Active questions a given audience sees, ordered by number.
pub async fn questions_for_target(
    State(state): State<AppState>,
    ApiPath(target): ApiPath<Target>,
    ApiQuery(params): ApiQuery<ForTargetParams>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let catalog = state.catalog().await;
    let questions = catalog
        .for_target(target, params.category)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(questions))
}

pub async fn get_question(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Question>, ApiError> {
    Ok(Json(state.repo.get_question(id).await?))
}

pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewQuestion>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    let question = new.into_question(Uuid::new_v4());
    check_consistency(&question)?;
    if question.text.trim().is_empty() {
        return Err(ApiError::validation("text", "question text must not be empty"));
    }

    if state.catalog().await.number_taken(question.number) {
        return Err(ApiError::Conflict(format!(
            "question number {} is already in use",
            question.number
        )));
    }

    state.repo.put_question(&question).await?;
    state.refresh_catalog().await?;
    AuditEvent::new("create", "question", question.id)
        .with_details(json!({ "number": question.number, "subcategory": question.subcategory }))
        .emit();
    Ok((StatusCode::CREATED, Json(question)))
}

pub async fn update_question(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<QuestionPatch>,
) -> Result<Json<Question>, ApiError> {
    let mut question = state.repo.get_question(id).await?;
    patch.apply(&mut question);
    check_consistency(&question)?;
    if question.text.trim().is_empty() {
        return Err(ApiError::validation("text", "question text must not be empty"));
    }

    state.repo.put_question(&question).await?;
    state.refresh_catalog().await?;
    AuditEvent::new("update", "question", id).emit();
    Ok(Json(question))
}

/// Soft delete: the question stays stored but is no longer served or scored.
pub async fn deactivate_question(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Question>, ApiError> {
    let mut question = state.repo.get_question(id).await?;
    if question.active {
        question.active = false;
        state.repo.put_question(&question).await?;
        state.refresh_catalog().await?;
        AuditEvent::new("deactivate", "question", id).emit();
    }
    Ok(Json(question))
}
