// ==========================================
// 罐装生产线日报系统 - 应用状态
// ==========================================
// 职责: 由 AppConfig 装配存储与 API 实例，生命周期与进程一致
// ==========================================

use std::sync::Arc;

use crate::api::{ApiError, ApiResult, ReportApi};
use crate::config::AppConfig;
use crate::i18n;
use crate::repository::ReportStore;

/// 应用状态
///
/// 包含配置、存储和 API 实例
pub struct AppState {
    /// 应用配置
    pub config: AppConfig,

    /// 日报存储
    pub store: Arc<ReportStore>,

    /// 日报 API
    pub report_api: Arc<ReportApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 校验语言配置
    /// 2. 创建存储并确保存储文件存在（表头正确）
    /// 3. 创建 API 实例
    pub fn new(config: AppConfig) -> ApiResult<Self> {
        tracing::info!("初始化AppState，存储文件: {}", config.data_file.display());

        if !i18n::is_supported(&config.locale) {
            return Err(ApiError::InvalidInput(format!(
                "不支持的语言: {}（可选: {}）",
                config.locale,
                i18n::SUPPORTED_LOCALES.join(", ")
            )));
        }

        let store = Arc::new(ReportStore::new(config.data_file.clone()));
        store.ensure()?;

        let report_api = Arc::new(ReportApi::new(store.clone(), config.locale.clone()));

        Ok(Self {
            config,
            store,
            report_api,
        })
    }
}
