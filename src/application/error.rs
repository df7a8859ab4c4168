//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{BookStoreError, ServiceError};
use crate::domain::book::BookError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入参数无效
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 书籍解析、渲染或目录错误
    #[error(transparent)]
    Book(#[from] BookError),

    /// 远程服务错误
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 创建输入错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<BookStoreError> for ApplicationError {
    fn from(err: BookStoreError) -> Self {
        match err {
            BookStoreError::NotFound(id) => Self::not_found("Book", id),
            BookStoreError::AlreadyExists(id) => {
                Self::internal(format!("Book already exists: {}", id))
            }
        }
    }
}
