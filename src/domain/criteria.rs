// ==========================================
// 罐装生产线日报系统 - 筛选与删除条件
// ==========================================
// 职责: 定义筛选谓词（日期区间 / 批次号 / 品种名）与删除条件
// 红线: 谓词之间为 AND 关系；文本谓词精确匹配（区分大小写，不做 trim）
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::report::ProductionReport;

// ==========================================
// DateRange - 日期区间（闭区间）
// ==========================================
// 起止必须同时给出；start > end 时不匹配任何记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 单日区间
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// 是否包含指定日期（两端都包含）
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 区间是否只覆盖一天（start == end）
    pub fn as_single_day(&self) -> Option<NaiveDate> {
        (self.start == self.end).then_some(self.start)
    }
}

// ==========================================
// ReportFilter - 筛选条件
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub date_range: Option<DateRange>,
    pub batch_code: Option<String>,
    pub variant_name: Option<String>,
}

impl ReportFilter {
    /// 空条件（返回全部记录）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从浏览页表单输入构造
    ///
    /// 表单的空文本框视为未提供该谓词；日期只有起止都给出时才生效。
    pub fn from_form(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        batch_code: Option<&str>,
        variant_name: Option<&str>,
    ) -> Self {
        let date_range = match (start_date, end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        };

        Self {
            date_range,
            batch_code: non_empty(batch_code),
            variant_name: non_empty(variant_name),
        }
    }

    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some(DateRange::new(start, end));
        self
    }

    pub fn with_batch_code(mut self, batch_code: impl Into<String>) -> Self {
        self.batch_code = Some(batch_code.into());
        self
    }

    pub fn with_variant_name(mut self, variant_name: impl Into<String>) -> Self {
        self.variant_name = Some(variant_name.into());
        self
    }

    /// 是否未提供任何谓词
    pub fn is_empty(&self) -> bool {
        self.date_range.is_none() && self.batch_code.is_none() && self.variant_name.is_none()
    }

    /// 单条记录是否满足全部已提供的谓词
    pub fn matches(&self, report: &ProductionReport) -> bool {
        if let Some(range) = &self.date_range {
            if !range.contains(report.date) {
                return false;
            }
        }
        if let Some(batch_code) = &self.batch_code {
            if &report.batch_code != batch_code {
                return false;
            }
        }
        if let Some(variant_name) = &self.variant_name {
            if &report.variant_name != variant_name {
                return false;
            }
        }
        true
    }
}

// ==========================================
// DeleteCriteria - 删除条件
// ==========================================
// 日期谓词只做等值匹配，不支持区间删除
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCriteria {
    pub date_equals: Option<NaiveDate>,
    pub batch_code: Option<String>,
    pub variant_name: Option<String>,
    pub all: bool,
}

impl DeleteCriteria {
    /// 删除全部记录
    pub fn all() -> Self {
        Self {
            all: true,
            ..Self::default()
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date_equals = Some(date);
        self
    }

    pub fn with_batch_code(mut self, batch_code: impl Into<String>) -> Self {
        self.batch_code = Some(batch_code.into());
        self
    }

    pub fn with_variant_name(mut self, variant_name: impl Into<String>) -> Self {
        self.variant_name = Some(variant_name.into());
        self
    }

    /// 由浏览页当前筛选条件推导删除条件
    ///
    /// 日期区间仅在 start == end 时折算为等值谓词；多日区间被丢弃。
    pub fn from_filter(filter: &ReportFilter) -> Self {
        Self {
            date_equals: filter.date_range.and_then(|r| r.as_single_day()),
            batch_code: filter.batch_code.clone(),
            variant_name: filter.variant_name.clone(),
            all: false,
        }
    }

    /// 是否提供了任一谓词（不含 all 标记）
    pub fn has_predicates(&self) -> bool {
        self.date_equals.is_some() || self.batch_code.is_some() || self.variant_name.is_some()
    }

    /// 记录是否命中删除掩码（未提供的谓词视为全部匹配）
    pub fn matches(&self, report: &ProductionReport) -> bool {
        if self.all {
            return true;
        }
        self.date_equals.map_or(true, |d| report.date == d)
            && self
                .batch_code
                .as_ref()
                .map_or(true, |b| &report.batch_code == b)
            && self
                .variant_name
                .as_ref()
                .map_or(true, |v| &report.variant_name == v)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_inclusive() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31));
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
        assert!(!range.contains(date(2023, 12, 31)));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = DateRange::new(date(2024, 2, 1), date(2024, 1, 1));
        assert!(!range.contains(date(2024, 1, 15)));
    }

    #[test]
    fn test_from_form_blank_text_is_not_supplied() {
        let filter = ReportFilter::from_form(Some(date(2024, 1, 1)), None, Some(""), Some("Cola"));
        assert_eq!(filter.date_range, None);
        assert_eq!(filter.batch_code, None);
        assert_eq!(filter.variant_name.as_deref(), Some("Cola"));
    }

    #[test]
    fn test_from_form_whitespace_is_a_real_predicate() {
        let filter = ReportFilter::from_form(None, None, Some(" "), Some(" Cola"));
        assert_eq!(filter.batch_code.as_deref(), Some(" "));
        assert_eq!(filter.variant_name.as_deref(), Some(" Cola"));

        let report = ProductionReport::new(date(2024, 1, 1), "Cola", "B001");
        assert!(!filter.matches(&report));
    }

    #[test]
    fn test_delete_criteria_has_predicates() {
        assert!(!DeleteCriteria::default().has_predicates());
        assert!(!DeleteCriteria::all().has_predicates());
        assert!(DeleteCriteria::default().with_batch_code("B1").has_predicates());

        let multi_day = ReportFilter::new().with_date_range(date(2024, 1, 1), date(2024, 1, 2));
        assert!(!DeleteCriteria::from_filter(&multi_day).has_predicates());
    }

    #[test]
    fn test_text_match_is_exact() {
        let report = ProductionReport::new(date(2024, 1, 1), "Cola", "B001");
        assert!(ReportFilter::new().with_batch_code("B001").matches(&report));
        assert!(!ReportFilter::new().with_batch_code("b001").matches(&report));
        assert!(!ReportFilter::new().with_batch_code(" B001").matches(&report));
    }

    #[test]
    fn test_delete_criteria_from_filter_single_day_only() {
        let single = ReportFilter::new().with_date_range(date(2024, 1, 5), date(2024, 1, 5));
        assert_eq!(
            DeleteCriteria::from_filter(&single).date_equals,
            Some(date(2024, 1, 5))
        );

        let multi = ReportFilter::new()
            .with_date_range(date(2024, 1, 1), date(2024, 1, 5))
            .with_variant_name("Cola");
        let criteria = DeleteCriteria::from_filter(&multi);
        assert_eq!(criteria.date_equals, None);
        assert_eq!(criteria.variant_name.as_deref(), Some("Cola"));
        assert!(!criteria.all);
    }

    #[test]
    fn test_delete_criteria_without_predicates_matches_everything() {
        let report = ProductionReport::new(date(2024, 1, 1), "Cola", "B001");
        assert!(DeleteCriteria::default().matches(&report));
        assert!(DeleteCriteria::all().with_batch_code("X").matches(&report));
    }
}
