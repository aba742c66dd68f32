// ==========================================
// 罐装生产线日报系统 - 汇总统计引擎
// ==========================================
// 职责: 为分析页提供聚合数据（品种汇总 / 剔除分布 / 每日产量）
// 红线: 无状态引擎,所有方法都是纯函数
// ==========================================

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::report::{ProductionReport, QuantityField};

/// 剔除分布统计的列（11 项缺陷剔除，不含 RejectShipper 与抽样）
pub const REJECTION_BREAKDOWN_FIELDS: [QuantityField; 11] = [
    QuantityField::EmptyRejection,
    QuantityField::FilledRejection,
    QuantityField::BreakdownRejection,
    QuantityField::ManpowerDentRejection,
    QuantityField::HighPressureRejection,
    QuantityField::WaterCanRejection,
    QuantityField::MachineDentCans,
    QuantityField::FadeCans,
    QuantityField::UnprintedCans,
    QuantityField::ScratchedCans,
    QuantityField::LidRejection,
];

/// 品种汇总
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSummary {
    pub variant_name: String,
    pub report_count: usize,
    pub total_case: u64,
    pub empty_rejection: u64,
    pub filled_rejection: u64,
    pub qa_sample: u64,
}

/// 剔除类型合计
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectionTotal {
    pub field: QuantityField,
    pub count: u64,
}

/// 每日产量（按日期 + 品种）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProduction {
    pub date: NaiveDate,
    pub variant_name: String,
    pub total_case: u64,
    pub loose_cans: u64,
}

// ==========================================
// SummaryEngine - 汇总统计引擎
// ==========================================
pub struct SummaryEngine;

impl SummaryEngine {
    pub fn new() -> Self {
        Self
    }

    /// 按品种汇总（按品种名排序）
    pub fn variant_summary(&self, reports: &[ProductionReport]) -> Vec<VariantSummary> {
        let mut groups: BTreeMap<&str, VariantSummary> = BTreeMap::new();

        for report in reports {
            let entry = groups
                .entry(report.variant_name.as_str())
                .or_insert_with(|| VariantSummary {
                    variant_name: report.variant_name.clone(),
                    ..VariantSummary::default()
                });
            entry.report_count += 1;
            entry.total_case = entry.total_case.saturating_add(report.total_case);
            entry.empty_rejection = entry.empty_rejection.saturating_add(report.empty_rejection);
            entry.filled_rejection = entry.filled_rejection.saturating_add(report.filled_rejection);
            entry.qa_sample = entry.qa_sample.saturating_add(report.qa_sample);
        }

        groups.into_values().collect()
    }

    /// 各剔除类型合计（列顺序）
    pub fn rejection_breakdown(&self, reports: &[ProductionReport]) -> Vec<RejectionTotal> {
        REJECTION_BREAKDOWN_FIELDS
            .iter()
            .map(|field| RejectionTotal {
                field: *field,
                count: reports
                    .iter()
                    .fold(0u64, |acc, r| acc.saturating_add(r.quantity(*field))),
            })
            .collect()
    }

    /// 每日产量（按日期、品种排序）
    pub fn daily_production(&self, reports: &[ProductionReport]) -> Vec<DailyProduction> {
        let mut groups: BTreeMap<(NaiveDate, &str), (u64, u64)> = BTreeMap::new();

        for report in reports {
            let entry = groups
                .entry((report.date, report.variant_name.as_str()))
                .or_insert((0, 0));
            entry.0 = entry.0.saturating_add(report.total_case);
            entry.1 = entry.1.saturating_add(report.loose_cans);
        }

        groups
            .into_iter()
            .map(|((date, variant), (total_case, loose_cans))| DailyProduction {
                date,
                variant_name: variant.to_string(),
                total_case,
                loose_cans,
            })
            .collect()
    }
}

impl Default for SummaryEngine {
    fn default() -> Self {
        Self::new()
    }
}
