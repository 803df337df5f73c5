use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use prakriti_core::error::CoreError;
use prakriti_instruments::error::{AssessmentError, InstrumentError, ValidationError};
use prakriti_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// A concurrent writer changed the record first.
    Conflict(String),
    /// Answers or ids that do not fit the questionnaire.
    Validation(ValidationError),
    /// Well-formed input that cannot be acted on yet, such as an unfinished
    /// assessment.
    Unprocessable {
        message: String,
        details: serde_json::Value,
    },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                e.to_string(),
                serde_json::to_value(&e).ok(),
            ),
            ApiError::Unprocessable { message, details } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, Some(details))
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                details,
            }),
        )
            .into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => ApiError::NotFound(format!("record not found: {key}")),
            e @ (StorageError::ETagMismatch { .. }
            | StorageError::PreconditionFailed { .. }
            | StorageError::Contended { .. }) => ApiError::Conflict(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Validation(e)
    }
}

impl From<InstrumentError> for ApiError {
    fn from(e: InstrumentError) -> Self {
        match e {
            InstrumentError::UnknownSection(id) => {
                ApiError::NotFound(format!("section not found: {id}"))
            }
            InstrumentError::Validation(e) => ApiError::Validation(e),
        }
    }
}

impl From<AssessmentError> for ApiError {
    fn from(e: AssessmentError) -> Self {
        let message = e.to_string();
        match e {
            AssessmentError::Incomplete { question_id } => ApiError::Unprocessable {
                message,
                details: serde_json::json!({ "question_id": question_id }),
            },
            AssessmentError::InvalidPersonalInfo(errors) => ApiError::Unprocessable {
                message,
                details: serde_json::json!({ "fields": errors.fields }),
            },
            AssessmentError::Validation(e) => ApiError::Validation(e),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
