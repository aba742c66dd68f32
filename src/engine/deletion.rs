// ==========================================
// 罐装生产线日报系统 - 删除引擎
// ==========================================
// 职责: 按条件（或全部）删除日报并持久化剩余集合
// 规则:
// - all=true 直接清空，忽略其他谓词
// - 否则按已提供谓词构造 AND 掩码，命中者删除，其余保留（保序）
// - 日期谓词仅等值匹配，不支持区间删除
// - 无论是否命中，都整表回写一次
// ==========================================

use std::sync::Arc;

use serde::Serialize;

use crate::domain::criteria::DeleteCriteria;
use crate::domain::report::ProductionReport;
use crate::repository::error::RepositoryResult;
use crate::repository::report_repo::ReportStore;

/// 删除结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletionOutcome {
    /// 保留的日报（原顺序）
    pub remaining: Vec<ProductionReport>,
    /// 被删除的日报（原顺序）
    pub removed: Vec<ProductionReport>,
}

impl DeletionOutcome {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

// ==========================================
// DeletionEngine - 删除引擎
// ==========================================
pub struct DeletionEngine {
    store: Arc<ReportStore>,
}

impl DeletionEngine {
    pub fn new(store: Arc<ReportStore>) -> Self {
        Self { store }
    }

    /// 按删除掩码拆分集合（纯函数，不落盘）
    pub fn partition(reports: Vec<ProductionReport>, criteria: &DeleteCriteria) -> DeletionOutcome {
        if criteria.all {
            return DeletionOutcome {
                remaining: Vec::new(),
                removed: reports,
            };
        }

        let (removed, remaining): (Vec<_>, Vec<_>) =
            reports.into_iter().partition(|r| criteria.matches(r));
        DeletionOutcome { remaining, removed }
    }

    /// 在给定集合上删除并持久化剩余集合
    ///
    /// # 返回
    /// - Ok(Vec): 剩余日报
    /// - Err: 存储写入失败
    pub fn delete(
        &self,
        reports: Vec<ProductionReport>,
        criteria: &DeleteCriteria,
    ) -> RepositoryResult<Vec<ProductionReport>> {
        let outcome = Self::partition(reports, criteria);
        self.store.overwrite(&outcome.remaining)?;
        log_outcome(criteria, &outcome);
        Ok(outcome.remaining)
    }

    /// 对存储中的当前集合删除（读-改-写在同一写锁内完成）
    pub fn delete_stored(&self, criteria: &DeleteCriteria) -> RepositoryResult<DeletionOutcome> {
        let outcome = self.store.update(|reports| {
            let outcome = Self::partition(reports, criteria);
            (outcome.remaining.clone(), outcome)
        })?;
        log_outcome(criteria, &outcome);
        Ok(outcome)
    }
}

fn log_outcome(criteria: &DeleteCriteria, outcome: &DeletionOutcome) {
    tracing::info!(
        all = criteria.all,
        date = ?criteria.date_equals,
        batch_code = ?criteria.batch_code,
        variant_name = ?criteria.variant_name,
        removed = outcome.removed.len(),
        remaining = outcome.remaining.len(),
        "日报删除完成"
    );
}
