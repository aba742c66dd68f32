// ==========================================
// 罐装生产线日报系统 - 引擎层
// ==========================================
// 职责: 筛选 / 删除 / 派生指标 / 汇总统计
// 红线: Engine 不直接解析存储文件，持久化统一经 ReportStore
// ==========================================

pub mod deletion;
pub mod filter;
pub mod metrics;
pub mod summary;

// 重导出核心引擎
pub use deletion::{DeletionEngine, DeletionOutcome};
pub use filter::FilterEngine;
pub use metrics::{total_cans, TOTAL_CANS_ADDENDS};
pub use summary::{DailyProduction, RejectionTotal, SummaryEngine, VariantSummary};
