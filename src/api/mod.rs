// ==========================================
// 罐装生产线日报系统 - API 层
// ==========================================
// 职责: 为录入 / 浏览 / 分析界面提供业务接口
// ==========================================

pub mod error;
pub mod report_api;

// 重导出
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use report_api::{ExportArtifact, ReportApi, ReportRow};
