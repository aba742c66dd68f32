// ==========================================
// 罐装生产线日报系统 - 生产日报领域模型
// ==========================================
// 职责: 定义日报记录、数量字段枚举、固定列顺序
// 红线: 列集合固定且有序（21 列），数量字段恒为非负整数
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// 列名常量
// ==========================================
pub const COLUMN_DATE: &str = "Date";
pub const COLUMN_VARIANT_NAME: &str = "VariantName";
pub const COLUMN_BATCH_CODE: &str = "BatchCode";

/// 存储文件表头（固定顺序，共 21 列）
pub const REPORT_COLUMNS: [&str; 21] = [
    COLUMN_DATE,
    COLUMN_VARIANT_NAME,
    COLUMN_BATCH_CODE,
    "TotalCase",
    "LooseCans",
    "EmptyRejection",
    "EmptySample",
    "WIPCans",
    "FilledRejection",
    "BreakdownRejection",
    "ManpowerDentRejection",
    "HighPressureRejection",
    "WaterCanRejection",
    "MachineDentCans",
    "FadeCans",
    "UnprintedCans",
    "ScratchedCans",
    "LidRejection",
    "QASample",
    "QAOtherSample",
    "RejectShipper",
];

/// 文本列数量（Date / VariantName / BatchCode）
pub const TEXT_COLUMN_COUNT: usize = 3;

// ==========================================
// QuantityField - 数量字段
// ==========================================
// 顺序与存储列顺序一致（紧随 3 个文本列之后）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuantityField {
    TotalCase,
    LooseCans,
    EmptyRejection,
    EmptySample,
    WipCans,
    FilledRejection,
    BreakdownRejection,
    ManpowerDentRejection,
    HighPressureRejection,
    WaterCanRejection,
    MachineDentCans,
    FadeCans,
    UnprintedCans,
    ScratchedCans,
    LidRejection,
    QaSample,
    QaOtherSample,
    RejectShipper,
}

/// 字段分组（用于展示与导出分表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldGroup {
    Production,
    Sample,
    Rejection,
}

impl QuantityField {
    /// 全部数量字段（存储列顺序）
    pub const ALL: [QuantityField; 18] = [
        QuantityField::TotalCase,
        QuantityField::LooseCans,
        QuantityField::EmptyRejection,
        QuantityField::EmptySample,
        QuantityField::WipCans,
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
        QuantityField::RejectShipper,
    ];

    /// 存储文件中的列名
    pub fn column_name(self) -> &'static str {
        REPORT_COLUMNS[TEXT_COLUMN_COUNT + self.column_offset()]
    }

    /// 在数量列中的偏移（0 起）
    pub fn column_offset(self) -> usize {
        Self::ALL
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// 录入表单顺序（生产 / 抽样 / 剔除 三组依次排列）
    pub const ENTRY_ORDER: [QuantityField; 18] = [
        QuantityField::TotalCase,
        QuantityField::LooseCans,
        QuantityField::WipCans,
        QuantityField::QaSample,
        QuantityField::QaOtherSample,
        QuantityField::EmptySample,
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
        QuantityField::RejectShipper,
    ];

    /// 组内字段（录入表单顺序）
    pub fn in_group(group: FieldGroup) -> impl Iterator<Item = QuantityField> {
        Self::ENTRY_ORDER
            .into_iter()
            .filter(move |f| f.group() == group)
    }

    /// 展示标签的 i18n 键
    pub fn label_key(self) -> &'static str {
        match self {
            QuantityField::TotalCase => "field.total_case",
            QuantityField::LooseCans => "field.loose_cans",
            QuantityField::EmptyRejection => "field.empty_rejection",
            QuantityField::EmptySample => "field.empty_sample",
            QuantityField::WipCans => "field.wip_cans",
            QuantityField::FilledRejection => "field.filled_rejection",
            QuantityField::BreakdownRejection => "field.breakdown_rejection",
            QuantityField::ManpowerDentRejection => "field.manpower_dent_rejection",
            QuantityField::HighPressureRejection => "field.high_pressure_rejection",
            QuantityField::WaterCanRejection => "field.water_can_rejection",
            QuantityField::MachineDentCans => "field.machine_dent_cans",
            QuantityField::FadeCans => "field.fade_cans",
            QuantityField::UnprintedCans => "field.unprinted_cans",
            QuantityField::ScratchedCans => "field.scratched_cans",
            QuantityField::LidRejection => "field.lid_rejection",
            QuantityField::QaSample => "field.qa_sample",
            QuantityField::QaOtherSample => "field.qa_other_sample",
            QuantityField::RejectShipper => "field.reject_shipper",
        }
    }

    /// 字段所属分组
    pub fn group(self) -> FieldGroup {
        match self {
            QuantityField::TotalCase | QuantityField::LooseCans | QuantityField::WipCans => {
                FieldGroup::Production
            }
            QuantityField::QaSample | QuantityField::QaOtherSample | QuantityField::EmptySample => {
                FieldGroup::Sample
            }
            _ => FieldGroup::Rejection,
        }
    }
}

// ==========================================
// ProductionReport - 生产日报
// ==========================================
// 一次表单提交对应一条记录；(date, variant_name, batch_code) 允许重复
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReport {
    // ===== 基本信息 =====
    pub date: NaiveDate,
    pub variant_name: String,
    pub batch_code: String,

    // ===== 产量 =====
    pub total_case: u64,
    pub loose_cans: u64,
    pub wip_cans: u64,

    // ===== 抽样 =====
    pub qa_sample: u64,
    pub qa_other_sample: u64,
    pub empty_sample: u64,

    // ===== 剔除 =====
    pub empty_rejection: u64,
    pub filled_rejection: u64,
    pub breakdown_rejection: u64,
    pub manpower_dent_rejection: u64,
    pub high_pressure_rejection: u64,
    pub water_can_rejection: u64,
    pub machine_dent_cans: u64,
    pub fade_cans: u64,
    pub unprinted_cans: u64,
    pub scratched_cans: u64,
    pub lid_rejection: u64,
    pub reject_shipper: u64,
}

impl ProductionReport {
    /// 创建数量全为 0 的日报
    pub fn new(date: NaiveDate, variant_name: impl Into<String>, batch_code: impl Into<String>) -> Self {
        Self {
            date,
            variant_name: variant_name.into(),
            batch_code: batch_code.into(),
            total_case: 0,
            loose_cans: 0,
            wip_cans: 0,
            qa_sample: 0,
            qa_other_sample: 0,
            empty_sample: 0,
            empty_rejection: 0,
            filled_rejection: 0,
            breakdown_rejection: 0,
            manpower_dent_rejection: 0,
            high_pressure_rejection: 0,
            water_can_rejection: 0,
            machine_dent_cans: 0,
            fade_cans: 0,
            unprinted_cans: 0,
            scratched_cans: 0,
            lid_rejection: 0,
            reject_shipper: 0,
        }
    }

    /// 读取数量字段
    pub fn quantity(&self, field: QuantityField) -> u64 {
        match field {
            QuantityField::TotalCase => self.total_case,
            QuantityField::LooseCans => self.loose_cans,
            QuantityField::EmptyRejection => self.empty_rejection,
            QuantityField::EmptySample => self.empty_sample,
            QuantityField::WipCans => self.wip_cans,
            QuantityField::FilledRejection => self.filled_rejection,
            QuantityField::BreakdownRejection => self.breakdown_rejection,
            QuantityField::ManpowerDentRejection => self.manpower_dent_rejection,
            QuantityField::HighPressureRejection => self.high_pressure_rejection,
            QuantityField::WaterCanRejection => self.water_can_rejection,
            QuantityField::MachineDentCans => self.machine_dent_cans,
            QuantityField::FadeCans => self.fade_cans,
            QuantityField::UnprintedCans => self.unprinted_cans,
            QuantityField::ScratchedCans => self.scratched_cans,
            QuantityField::LidRejection => self.lid_rejection,
            QuantityField::QaSample => self.qa_sample,
            QuantityField::QaOtherSample => self.qa_other_sample,
            QuantityField::RejectShipper => self.reject_shipper,
        }
    }

    /// 写入数量字段
    pub fn set_quantity(&mut self, field: QuantityField, value: u64) {
        let slot = match field {
            QuantityField::TotalCase => &mut self.total_case,
            QuantityField::LooseCans => &mut self.loose_cans,
            QuantityField::EmptyRejection => &mut self.empty_rejection,
            QuantityField::EmptySample => &mut self.empty_sample,
            QuantityField::WipCans => &mut self.wip_cans,
            QuantityField::FilledRejection => &mut self.filled_rejection,
            QuantityField::BreakdownRejection => &mut self.breakdown_rejection,
            QuantityField::ManpowerDentRejection => &mut self.manpower_dent_rejection,
            QuantityField::HighPressureRejection => &mut self.high_pressure_rejection,
            QuantityField::WaterCanRejection => &mut self.water_can_rejection,
            QuantityField::MachineDentCans => &mut self.machine_dent_cans,
            QuantityField::FadeCans => &mut self.fade_cans,
            QuantityField::UnprintedCans => &mut self.unprinted_cans,
            QuantityField::ScratchedCans => &mut self.scratched_cans,
            QuantityField::LidRejection => &mut self.lid_rejection,
            QuantityField::QaSample => &mut self.qa_sample,
            QuantityField::QaOtherSample => &mut self.qa_other_sample,
            QuantityField::RejectShipper => &mut self.reject_shipper,
        };
        *slot = value;
    }

    /// 链式设置数量字段（表单/测试构造用）
    pub fn with_quantity(mut self, field: QuantityField, value: u64) -> Self {
        self.set_quantity(field, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_fixed_order() {
        assert_eq!(REPORT_COLUMNS.len(), 21);
        assert_eq!(REPORT_COLUMNS[0], "Date");
        assert_eq!(REPORT_COLUMNS[20], "RejectShipper");
        assert_eq!(
            TEXT_COLUMN_COUNT + QuantityField::ALL.len(),
            REPORT_COLUMNS.len()
        );
    }

    #[test]
    fn test_column_name_mapping() {
        assert_eq!(QuantityField::TotalCase.column_name(), "TotalCase");
        assert_eq!(QuantityField::WipCans.column_name(), "WIPCans");
        assert_eq!(QuantityField::QaOtherSample.column_name(), "QAOtherSample");
    }

    #[test]
    fn test_quantity_get_set() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut report = ProductionReport::new(date, "Cola 330ml", "B001");

        for (i, field) in QuantityField::ALL.iter().enumerate() {
            report.set_quantity(*field, i as u64 + 1);
        }
        for (i, field) in QuantityField::ALL.iter().enumerate() {
            assert_eq!(report.quantity(*field), i as u64 + 1);
        }
        assert_eq!(report.wip_cans, 5);
        assert_eq!(report.reject_shipper, 18);
    }

    #[test]
    fn test_field_groups() {
        let production = QuantityField::ALL
            .iter()
            .filter(|f| f.group() == FieldGroup::Production)
            .count();
        let samples = QuantityField::ALL
            .iter()
            .filter(|f| f.group() == FieldGroup::Sample)
            .count();
        let rejections = QuantityField::ALL
            .iter()
            .filter(|f| f.group() == FieldGroup::Rejection)
            .count();
        assert_eq!((production, samples, rejections), (3, 3, 12));
    }

    #[test]
    fn test_entry_order_is_grouped() {
        let mut sorted = QuantityField::ENTRY_ORDER;
        sorted.sort();
        let mut all = QuantityField::ALL;
        all.sort();
        assert_eq!(sorted, all);

        let groups: Vec<FieldGroup> = QuantityField::ENTRY_ORDER.iter().map(|f| f.group()).collect();
        let first_sample = groups.iter().position(|g| *g == FieldGroup::Sample).unwrap();
        let first_rejection = groups.iter().position(|g| *g == FieldGroup::Rejection).unwrap();
        assert_eq!((first_sample, first_rejection), (3, 6));

        let samples: Vec<_> = QuantityField::in_group(FieldGroup::Sample).collect();
        assert_eq!(
            samples,
            vec![
                QuantityField::QaSample,
                QuantityField::QaOtherSample,
                QuantityField::EmptySample
            ]
        );
        assert_eq!(
            QuantityField::in_group(FieldGroup::Rejection).last(),
            Some(QuantityField::RejectShipper)
        );
    }
}
