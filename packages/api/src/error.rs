use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use listkeep_lists::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The request could not be decoded (bad JSON, bad path id, bad query string)
    #[error("{0}")]
    BadRequest(String),
}

/// Error body shared by all endpoints: `{ "error": "..." }`
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Convert AppError to the HTTP status it is reported with
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Service(service_error) => match service_error {
                ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
                ServiceError::Forbidden(_) => StatusCode::BAD_REQUEST,
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let message = self.to_string();

        if status_code.is_server_error() {
            error!(status = %status_code, error = %message, "Storage failure while handling request");
        } else {
            // Expected business logic errors
            info!(status = %status_code, error = %message, "API error response");
        }

        (status_code, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;
