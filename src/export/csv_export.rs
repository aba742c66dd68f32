// ==========================================
// 罐装生产线日报系统 - CSV 下载导出
// ==========================================
// 格式与存储文件一致（21 列表头 + 数据行）
// ==========================================

use crate::domain::criteria::DateRange;
use crate::domain::report::ProductionReport;
use crate::export::{export_file_name, ExportResult};
use crate::repository::report_codec::write_reports;

pub struct CsvExporter;

impl CsvExporter {
    /// 序列化为 CSV 字节
    pub fn to_bytes(reports: &[ProductionReport]) -> ExportResult<Vec<u8>> {
        let mut buf = Vec::new();
        write_reports(&mut buf, reports)?;
        Ok(buf)
    }

    /// 下载文件名
    pub fn file_name(range: Option<&DateRange>) -> String {
        export_file_name(range, "csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::REPORT_COLUMNS;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export_layout() {
        let report = ProductionReport::new(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(), "Cola", "B1");
        let bytes = CsvExporter::to_bytes(&[report]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], REPORT_COLUMNS.join(","));
        assert!(lines[1].starts_with("2024-04-02,Cola,B1,0,"));
        assert_eq!(lines[1].split(',').count(), 21);
    }
}
