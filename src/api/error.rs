// ==========================================
// 罐装生产线日报系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换Repository/导出错误为用户可读的错误消息
// ==========================================

use crate::export::ExportError;
use crate::repository::error::RepositoryError;
use serde::Serialize;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 存储错误
    // ==========================================
    /// 存储文件结构损坏（表头不符 / 日期无法解析），属配置级致命错误
    #[error("存储文件结构错误: {0}")]
    SchemaError(String),

    #[error("存储读写失败: {0}")]
    StorageError(String),

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 错误代码（供界面层展示/分支）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::SchemaError(_) => "SCHEMA_ERROR",
            ApiError::StorageError(_) => "STORAGE_ERROR",
            ApiError::ExportError(_) => "EXPORT_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }

    /// 转换为错误响应
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// 错误响应（返回给界面层）
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,
    /// 错误消息
    pub message: String,
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        if err.is_schema_error() {
            return ApiError::SchemaError(err.to_string());
        }
        match err {
            RepositoryError::LockError(msg) => ApiError::InternalError(format!("写锁获取失败: {}", msg)),
            RepositoryError::Other(e) => ApiError::Other(e),
            other => ApiError::StorageError(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
