//! API error type

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bank_account_core::CoreError;
use serde::Serialize;

/// Message trả về khi body không parse được; chi tiết serde chỉ ghi log
pub const INVALID_BODY_MESSAGE: &str = "invalid request body";

/// JSON body cho lỗi 400/500
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Lỗi trả về từ handlers
#[derive(Debug)]
pub enum ApiError {
    /// 404, body rỗng
    NotFound,
    /// 400 với message cho client
    Validation(String),
    /// 500; chi tiết chỉ ghi log
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(_) => ApiError::NotFound,
            CoreError::InvalidInput(message) => ApiError::Validation(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");
        ApiError::Validation(INVALID_BODY_MESSAGE.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound => status.into_response(),
            ApiError::Validation(message) => (
                status,
                Json(ErrorBody {
                    code: "validation_error",
                    message,
                }),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "account store failure");
                (
                    status,
                    Json(ErrorBody {
                        code: "internal",
                        message: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::NotFound("123".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(CoreError::InvalidInput("bad".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(CoreError::Internal("db down".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_status() {
        assert_eq!(
            ApiError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
