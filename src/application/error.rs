//! 应用层错误定义

use thiserror::Error;

use crate::domain::GraphParamsError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<GraphParamsError> for ApplicationError {
    fn from(err: GraphParamsError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
