// ==========================================
// 罐装生产线日报系统 - 派生指标
// ==========================================
// 职责: 计算单条日报的总罐数（纯函数，无副作用）
// 公式: total_cans = total_case + loose_cans + Σ(剔除/抽样字段)
// ==========================================
// 注意: wip_cans / empty_sample / reject_shipper 不计入总罐数，
//       字段集合按业务口径原样保留，待产品确认前不要“补全”
// ==========================================

use crate::domain::report::{ProductionReport, QuantityField};

/// 计入总罐数的剔除/抽样字段（13 项）
pub const TOTAL_CANS_ADDENDS: [QuantityField; 13] = [
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
    QuantityField::QaSample,
    QuantityField::QaOtherSample,
];

/// 计算总罐数
pub fn total_cans(report: &ProductionReport) -> u64 {
    let base = report.total_case.saturating_add(report.loose_cans);
    TOTAL_CANS_ADDENDS
        .iter()
        .fold(base, |acc, field| acc.saturating_add(report.quantity(*field)))
}
