// ==========================================
// 罐装生产线日报系统 - 应用配置
// ==========================================
// 职责: 确定存储文件路径等进程级配置，并显式注入到存储层
// 优先级: 显式指定 > 环境变量 > 用户数据目录 > 相对默认路径
// ==========================================

use std::path::{Path, PathBuf};

/// 存储文件路径环境变量
pub const DATA_FILE_ENV: &str = "CANNING_REPORT_DATA_FILE";

/// 界面语言环境变量
pub const LOCALE_ENV: &str = "CANNING_REPORT_LOCALE";

/// 相对默认路径（无法获取用户数据目录时使用）
pub const DEFAULT_DATA_FILE: &str = "data/reports.csv";

/// 用户数据目录下的应用子目录
pub const APP_DIR_NAME: &str = "canning-report";

/// 默认界面语言
pub const DEFAULT_LOCALE: &str = "zh-CN";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 日报存储文件
    pub data_file: PathBuf,
    /// 界面/导出语言
    pub locale: String,
}

impl AppConfig {
    /// 使用指定存储文件
    pub fn with_data_file(data_file: impl AsRef<Path>) -> Self {
        Self {
            data_file: data_file.as_ref().to_path_buf(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// 从环境变量加载
    ///
    /// # 环境变量
    /// - CANNING_REPORT_DATA_FILE: 存储文件路径（空白视为未设置）
    /// - CANNING_REPORT_LOCALE: 语言（zh-CN / en）
    pub fn from_env() -> Self {
        let data_file = non_blank_env(DATA_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_file);

        let locale = non_blank_env(LOCALE_ENV)
            .filter(|l| crate::i18n::is_supported(l))
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Self { data_file, locale }
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_data_file(DEFAULT_DATA_FILE)
    }
}

/// 默认存储文件路径
///
/// - 可获取用户数据目录: {data_dir}/canning-report/reports.csv
/// - 否则: data/reports.csv（相对当前工作目录）
pub fn default_data_file() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join(APP_DIR_NAME).join("reports.csv"),
        None => PathBuf::from(DEFAULT_DATA_FILE),
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
