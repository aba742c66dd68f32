// ==========================================
// 罐装生产线日报系统 - 导出层
// ==========================================
// 职责: 将筛选后的日报集合导出为表格下载文件或分页报告文档
// 输入: 筛选引擎输出 + 派生指标
// ==========================================

pub mod csv_export;
pub mod report_document;

use thiserror::Error;

use crate::domain::criteria::DateRange;
use crate::repository::error::RepositoryError;

pub use csv_export::CsvExporter;
pub use report_document::{DocumentPage, DocumentTable, ReportDocument};

/// 导出错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 序列化失败: {0}")]
    CsvError(String),
}

impl From<RepositoryError> for ExportError {
    fn from(err: RepositoryError) -> Self {
        ExportError::CsvError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;

/// 导出文件名（按当前筛选的日期区间命名）
///
/// - 有区间: production_report_{start}_to_{end}.{ext}
/// - 无区间: production_report_all.{ext}
pub fn export_file_name(range: Option<&DateRange>, extension: &str) -> String {
    match range {
        Some(r) => format!("production_report_{}_to_{}.{}", r.start, r.end, extension),
        None => format!("production_report_all.{}", extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_export_file_name() {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        assert_eq!(
            export_file_name(Some(&range), "csv"),
            "production_report_2024-01-01_to_2024-01-31.csv"
        );
        assert_eq!(export_file_name(None, "txt"), "production_report_all.txt");
    }
}
