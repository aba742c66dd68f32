// ==========================================
// 罐装生产线日报系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 文件错误 =====
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件写入失败: {0}")]
    FileWriteError(String),

    #[error("CSV 解析失败: {0}")]
    CsvError(String),

    // ===== 结构错误（致命，不做恢复） =====
    #[error("存储文件表头不匹配: 期望 [{expected}]，实际 [{actual}]")]
    SchemaMismatch { expected: String, actual: String },

    #[error("日期格式错误 (行 {row}): {value}")]
    MalformedDate { row: usize, value: String },

    // ===== 并发控制错误 =====
    #[error("写锁获取失败: {0}")]
    LockError(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RepositoryError {
    /// 是否为存储文件结构问题（配置级致命错误）
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            RepositoryError::SchemaMismatch { .. } | RepositoryError::MalformedDate { .. }
        )
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for RepositoryError {
    fn from(err: csv::Error) -> Self {
        RepositoryError::CsvError(err.to_string())
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
