// ==========================================
// 罐装生产线日报系统 - 日报 API
// ==========================================
// 职责: 录入 / 浏览 / 删除 / 导出 / 分析 各界面的统一入口
// 架构: API 层 → Engine 层 → Repository 层
// ==========================================

use std::sync::Arc;

use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::criteria::{DeleteCriteria, ReportFilter};
use crate::domain::report::ProductionReport;
use crate::engine::deletion::{DeletionEngine, DeletionOutcome};
use crate::engine::filter::FilterEngine;
use crate::engine::metrics::total_cans;
use crate::engine::summary::{DailyProduction, RejectionTotal, SummaryEngine, VariantSummary};
use crate::export::{CsvExporter, ReportDocument};
use crate::perf::PerfGuard;
use crate::repository::report_repo::ReportStore;

/// 导出产物（文件名 + 内容）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: Vec<u8>,
    pub report_count: usize,
}

/// 带派生指标的日报行（浏览页展示用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(flatten)]
    pub report: ProductionReport,
    pub total_cans: u64,
}

// ==========================================
// ReportApi - 日报 API
// ==========================================
pub struct ReportApi {
    store: Arc<ReportStore>,
    filter_engine: FilterEngine,
    deletion_engine: DeletionEngine,
    summary_engine: SummaryEngine,
    locale: String,
}

impl ReportApi {
    /// 创建新的ReportApi实例
    ///
    /// # 参数
    /// - store: 日报存储
    /// - locale: 导出文档语言
    pub fn new(store: Arc<ReportStore>, locale: impl Into<String>) -> Self {
        Self {
            deletion_engine: DeletionEngine::new(store.clone()),
            store,
            filter_engine: FilterEngine::new(),
            summary_engine: SummaryEngine::new(),
            locale: locale.into(),
        }
    }

    // ==========================================
    // 录入
    // ==========================================

    /// 提交一条日报（追加到存储末尾）
    pub fn submit_report(&self, report: ProductionReport) -> ApiResult<()> {
        let _perf = PerfGuard::new("api.submit_report");

        tracing::info!(
            date = %report.date,
            variant_name = %report.variant_name,
            batch_code = %report.batch_code,
            "提交日报"
        );
        self.store.append(report)?;
        Ok(())
    }

    // ==========================================
    // 浏览
    // ==========================================

    /// 按条件查询日报
    pub fn list_reports(&self, filter: &ReportFilter) -> ApiResult<Vec<ProductionReport>> {
        let mut perf = PerfGuard::new("api.list_reports");

        let all = self.store.load_all()?;
        let reports = self.filter_engine.filter(&all, filter);
        perf.set_rows(reports.len());
        Ok(reports)
    }

    /// 按条件查询日报，并附带总罐数
    pub fn list_report_rows(&self, filter: &ReportFilter) -> ApiResult<Vec<ReportRow>> {
        Ok(self
            .list_reports(filter)?
            .into_iter()
            .map(|report| ReportRow {
                total_cans: total_cans(&report),
                report,
            })
            .collect())
    }

    // ==========================================
    // 删除
    // ==========================================

    /// 按删除条件删除
    pub fn delete_reports(&self, criteria: &DeleteCriteria) -> ApiResult<DeletionOutcome> {
        let mut perf = PerfGuard::new("api.delete_reports");

        let outcome = self.deletion_engine.delete_stored(criteria)?;
        perf.set_rows(outcome.removed_count());
        Ok(outcome)
    }

    /// 删除浏览页当前筛选出的日报
    ///
    /// 日期区间只有在 start == end 时才作为删除条件；多日区间会被忽略。
    /// 折算后没有任何谓词时拒绝执行（清空请使用 delete_all）
    pub fn delete_filtered(&self, filter: &ReportFilter) -> ApiResult<DeletionOutcome> {
        if let Some(range) = &filter.date_range {
            if range.as_single_day().is_none() {
                tracing::warn!(
                    start = %range.start,
                    end = %range.end,
                    "删除不支持多日区间，日期条件已忽略"
                );
            }
        }
        let criteria = DeleteCriteria::from_filter(filter);
        if !criteria.has_predicates() {
            return Err(ApiError::InvalidInput(
                "删除条件为空：请指定单日日期、批次号或品种，或显式删除全部".to_string(),
            ));
        }
        self.delete_reports(&criteria)
    }

    /// 删除全部日报
    pub fn delete_all(&self) -> ApiResult<DeletionOutcome> {
        self.delete_reports(&DeleteCriteria::all())
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出筛选结果为 CSV
    pub fn export_csv(&self, filter: &ReportFilter) -> ApiResult<ExportArtifact> {
        let _perf = PerfGuard::new("api.export_csv");

        let reports = self.list_reports(filter)?;
        let content = CsvExporter::to_bytes(&reports)?;
        Ok(ExportArtifact {
            file_name: CsvExporter::file_name(filter.date_range.as_ref()),
            mime_type: "text/csv",
            content,
            report_count: reports.len(),
        })
    }

    /// 导出筛选结果为分页报告文档
    pub fn export_document(&self, filter: &ReportFilter) -> ApiResult<ExportArtifact> {
        let _perf = PerfGuard::new("api.export_document");

        let reports = self.list_reports(filter)?;
        let document = ReportDocument::build(&reports, filter.date_range.as_ref(), &self.locale);
        Ok(ExportArtifact {
            file_name: ReportDocument::file_name(filter.date_range.as_ref()),
            mime_type: "text/plain",
            content: document.to_bytes(),
            report_count: reports.len(),
        })
    }

    // ==========================================
    // 分析
    // ==========================================

    /// 按品种汇总
    pub fn variant_summary(&self, filter: &ReportFilter) -> ApiResult<Vec<VariantSummary>> {
        let reports = self.list_reports(filter)?;
        Ok(self.summary_engine.variant_summary(&reports))
    }

    /// 剔除类型分布
    pub fn rejection_breakdown(&self, filter: &ReportFilter) -> ApiResult<Vec<RejectionTotal>> {
        let reports = self.list_reports(filter)?;
        Ok(self.summary_engine.rejection_breakdown(&reports))
    }

    /// 每日产量
    pub fn daily_production(&self, filter: &ReportFilter) -> ApiResult<Vec<DailyProduction>> {
        let reports = self.list_reports(filter)?;
        Ok(self.summary_engine.daily_production(&reports))
    }

    /// 存储文件路径（用于界面提示）
    pub fn data_file(&self) -> String {
        self.store.data_file().display().to_string()
    }
}
