// ==========================================
// 罐装生产线日报系统 - 筛选引擎
// ==========================================
// 职责: 内存集合上的纯筛选（不修改输入）
// 规则: 谓词 AND；日期闭区间；文本精确匹配；无谓词返回全集且保序
// ==========================================

use crate::domain::criteria::ReportFilter;
use crate::domain::report::ProductionReport;

// ==========================================
// FilterEngine - 筛选引擎
// ==========================================
// 红线: 无状态引擎
pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        Self
    }

    /// 按条件筛选日报
    ///
    /// # 参数
    /// - `reports`: 全部日报
    /// - `filter`: 筛选条件（未提供的谓词不参与筛选）
    ///
    /// # 返回
    /// 满足全部谓词的日报（保持输入顺序）
    pub fn filter(&self, reports: &[ProductionReport], filter: &ReportFilter) -> Vec<ProductionReport> {
        if filter.is_empty() {
            return reports.to_vec();
        }

        let matched: Vec<ProductionReport> = reports
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();

        tracing::debug!(
            input = reports.len(),
            matched = matched.len(),
            "日报筛选完成"
        );
        matched
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
