// ==========================================
// 罐装生产线日报系统 - 数据仓储层
// ==========================================
// 职责: 日报存储文件的读写与列类型转换
// 红线: Repository 不含业务逻辑
// ==========================================

pub mod error;
pub mod report_codec;
pub mod report_repo;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use report_repo::ReportStore;
