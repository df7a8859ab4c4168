//! HTTP Error Handling
//!
//! 所有业务错误都返回 HTTP 200，错误码放在 errno

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::{ApplicationError, RemoteFailure};
use crate::domain::book::BookError;

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
    pub const NOT_FOUND: i32 = 404;
    pub const UNPROCESSABLE: i32 = 422;
    pub const INTERNAL_ERROR: i32 = 500;
    pub const BAD_GATEWAY: i32 = 502;
    pub const GATEWAY_TIMEOUT: i32 = 504;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// 书籍内容无法解析或渲染
    Unprocessable(String),
    Internal(String),
    /// 远程服务调用失败
    BadGateway(String),
    /// 远程服务调用超时
    GatewayTimeout(String),
}

impl ApiError {
    pub fn errno(&self) -> i32 {
        match self {
            ApiError::NotFound(_) => errno::NOT_FOUND,
            ApiError::BadRequest(_) => errno::BAD_REQUEST,
            ApiError::Unprocessable(_) => errno::UNPROCESSABLE,
            ApiError::Internal(_) => errno::INTERNAL_ERROR,
            ApiError::BadGateway(_) => errno::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => errno::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.errno();
        let msg = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(errno = code, error = %msg, "Resource not found");
                msg
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = code, error = %msg, "Bad request");
                msg
            }
            ApiError::Unprocessable(msg) => {
                tracing::warn!(errno = code, error = %msg, "Unprocessable book content");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = code, error = %msg, "Internal server error");
                msg
            }
            ApiError::BadGateway(msg) => {
                tracing::error!(errno = code, error = %msg, "Remote service failed");
                msg
            }
            ApiError::GatewayTimeout(msg) => {
                tracing::error!(errno = code, error = %msg, "Remote service timed out");
                msg
            }
        };

        (StatusCode::OK, Json(ErrorResponse::new(code, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, id } => {
                ApiError::NotFound(format!("{} not found: {}", resource_type, id))
            }
            ApplicationError::InvalidInput(msg) => ApiError::BadRequest(msg),
            ApplicationError::Book(err) => match err {
                BookError::InvalidPosition(_) => ApiError::BadRequest(err.to_string()),
                BookError::Parse(_) | BookError::Render(_) | BookError::InvalidTableOfContents => {
                    ApiError::Unprocessable(err.to_string())
                }
            },
            ApplicationError::Service(err) => match err.failure() {
                RemoteFailure::Timeout => ApiError::GatewayTimeout(err.to_string()),
                _ => ApiError::BadGateway(err.to_string()),
            },
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}
