// ==========================================
// 罐装生产线日报系统 - 应用层
// ==========================================
// 职责: 装配配置、存储与 API，供命令行/界面入口使用
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
