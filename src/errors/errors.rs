//! 데모 애플리케이션의 에러 타입
//!
//! 모든 요청 처리 에러는 [`AppError`]로 모이고, actix-web이
//! `{"error": "...", "status": 400}` 형태의 JSON 응답으로 변환합니다.
//! 컨테이너 에러([`DiError`])는 설정 실수이므로 항상 500으로 응답합니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::core::errors::DiError;

#[derive(Error, Debug)]
pub enum AppError {
    /// 400 Bad Request
    #[error("invalid request: {0}")]
    ValidationError(String),

    /// 404 Not Found
    #[error("not found: {0}")]
    NotFound(String),

    /// 409 Conflict
    #[error("already exists: {0}")]
    ConflictError(String),

    #[error("dependency injection failed: {0}")]
    Container(#[from] DiError),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::Container(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러에 설명을 붙여 [`AppError::InternalError`]로 바꿉니다.
pub trait ErrorContext<T> {
    fn context(self, what: &str) -> AppResult<T>;
}

impl<T, E: std::fmt::Display> ErrorContext<T> for Result<T, E> {
    fn context(self, what: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{what}: {e}")))
    }
}
