// ==========================================
// 罐装生产线日报系统 - 配置层
// ==========================================
// 职责: 进程级配置（存储文件路径、语言），构造时显式注入
// ==========================================

pub mod app_config;

// 重导出
pub use app_config::{default_data_file, AppConfig, DATA_FILE_ENV, LOCALE_ENV};
