//! 核心错误处理模块
//!
//! [`CoreError`] 是 JSON API 的统一错误类型，负责把领域错误、校验失败和
//! 请求解析失败转换成带结构的响应体。

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use super::validation::FieldErrors;

/// 核心错误类型
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    InternalServerError(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Validation(_) | CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            CoreError::NotFound(msg) | CoreError::BadRequest(msg) => {
                (status, Json(json!({ "error": msg }))).into_response()
            }
            CoreError::Validation(errors) => (status, Json(errors)).into_response(),
            CoreError::InternalServerError(msg) => {
                error!("Internal error: {}", msg);
                (status, Json(json!({ "error": "Internal server error" }))).into_response()
            }
        }
    }
}

impl From<FieldErrors> for CoreError {
    fn from(errors: FieldErrors) -> Self {
        CoreError::Validation(errors)
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}
