use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::application::AppError;

/// Errors surfaced by HTTP handlers. Every variant renders as
/// `{"detail": "..."}` with a matching status code.
#[derive(Debug)]
pub enum ApiError {
    App(AppError),
    Validation(String),
}

impl ApiError {
    fn status_and_detail(self) -> (StatusCode, String) {
        match self {
            Self::App(AppError::WalletNotFound(_)) => {
                (StatusCode::NOT_FOUND, "Wallet not Found".to_string())
            }
            Self::App(AppError::InsufficientBalance { .. }) => (
                StatusCode::BAD_REQUEST,
                "There is not enough points".to_string(),
            ),
            Self::App(err @ AppError::WalletAlreadyExists(_)) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            Self::App(err @ AppError::InvalidAmount(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::App(AppError::Database(err)) => {
                error!("Storage failure: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            Self::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
