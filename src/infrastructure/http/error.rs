//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let response = match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
                ErrorResponse::new(errno::BAD_REQUEST, msg.clone())
            }
        };

        (StatusCode::OK, Json(response)).into_response()
    }
}

impl From<crate::application::ApplicationError> for ApiError {
    fn from(e: crate::application::ApplicationError) -> Self {
        match e {
            crate::application::ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
        }
    }
}
