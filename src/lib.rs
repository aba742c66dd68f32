// ==========================================
// 罐装生产线日报系统 - 核心库
// ==========================================
// 职责: 生产日报的持久化、筛选、删除、派生指标与导出
// 存储: 带表头的 CSV 文件（21 列）
// 系统定位: 录入/浏览/分析界面的共用核心
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与条件
pub mod domain;

// 数据仓储层 - 存储文件读写
pub mod repository;

// 引擎层 - 筛选/删除/指标/汇总
pub mod engine;

// 导出层 - CSV 下载 / 分页文档
pub mod export;

// 配置层 - 进程级配置
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DateRange, DeleteCriteria, FieldGroup, ProductionReport, QuantityField, ReportFilter,
    REPORT_COLUMNS,
};

// 仓储
pub use repository::{RepositoryError, ReportStore};

// 引擎
pub use engine::{
    total_cans, DeletionEngine, DeletionOutcome, FilterEngine, SummaryEngine, VariantSummary,
};

// API
pub use api::{ApiError, ApiResult, ReportApi};

// 应用
pub use app::AppState;
pub use config::AppConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "罐装生产线日报系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
