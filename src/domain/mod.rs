// ==========================================
// 罐装生产线日报系统 - 领域模型层
// ==========================================
// 职责: 定义日报实体、数量字段、筛选/删除条件
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod criteria;
pub mod report;

// 重导出核心类型
pub use criteria::{DateRange, DeleteCriteria, ReportFilter};
pub use report::{FieldGroup, ProductionReport, QuantityField, REPORT_COLUMNS};
