use axum::Json;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use sportsmind_core::error::CoreError;
use sportsmind_scoring::error::ScoringError;
use sportsmind_storage::error::StorageError;

/// One field-level validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    Validation {
        message: String,
        details: Vec<ErrorDetail>,
    },
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        ApiError::Validation {
            details: vec![ErrorDetail {
                field: field.into(),
                message: message.clone(),
            }],
            message,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    error_code: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<ErrorDetail>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            ApiError::Validation { message, details } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VAL_001", message, details)
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "RES_002", msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "VAL_002", msg, Vec::new()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "RES_003", msg, Vec::new()),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SRV_001",
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = ErrorBody {
            error: message,
            error_code: code,
            details,
        };
        (status, Json(body)).into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        match e {
            e @ ScoringError::InvalidParameter { .. } => ApiError::BadRequest(e.to_string()),
            ScoringError::OutOfRange(violation) => ApiError::Internal(violation.to_string()),
            other => ApiError::validation(other.field(), other.to_string()),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("object not found: {key}")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => ApiError::validation("body", err.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                let field = match err.kind() {
                    ErrorKind::ParseErrorAtKey { key, .. }
                    | ErrorKind::DeserializeError { key, .. }
                    | ErrorKind::InvalidUtf8InPathParam { key } => key.clone(),
                    _ => "path".to_string(),
                };
                ApiError::validation(field, err.body_text())
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
