// ==========================================
// 罐装生产线日报系统 - 日报 CSV 编解码
// ==========================================
// 职责: 表头校验 / 逐列类型转换 / 行序列化
// 规则:
// - 数量列: 无法解析或缺失 -> 0（单元格错误不影响整体读取）
// - 日期列: 统一归一化为纯日期；无法解析视为结构错误
// - 表头: 必须与 REPORT_COLUMNS 完全一致（顺序敏感）
// ==========================================

use std::io::{Read, Write};

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::domain::report::{ProductionReport, QuantityField, REPORT_COLUMNS, TEXT_COLUMN_COUNT};
use crate::repository::error::{RepositoryError, RepositoryResult};

/// 写出时使用的日期格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// 读取时接受的纯日期格式
const DATE_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

// 读取时接受的时间戳格式（取日期部分）
const DATETIME_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

// ==========================================
// 单元格转换
// ==========================================

/// 数量列转换
///
/// - 整数文本 -> 原值
/// - 非负有限小数（如 "12.0"） -> 截断取整
/// - 空白 / 非数字 / 负数 / 缺失 -> 0
pub fn coerce_quantity(raw: Option<&str>) -> u64 {
    let value = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return 0,
    };

    if let Ok(n) = value.parse::<u64>() {
        return n;
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => f.trunc() as u64,
        _ => 0,
    }
}

/// 日期列解析
///
/// # 参数
/// - raw: 单元格原始文本
/// - row: 数据行号（1 起，用于错误信息）
pub fn parse_date(raw: Option<&str>, row: usize) -> RepositoryResult<NaiveDate> {
    let value = raw.map(str::trim).unwrap_or_default();

    for fmt in DATE_INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return Ok(date);
        }
    }
    for fmt in DATETIME_INPUT_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(ts.date());
        }
    }

    Err(RepositoryError::MalformedDate {
        row,
        value: value.to_string(),
    })
}

// ==========================================
// 表头
// ==========================================

/// 校验表头与固定列集合完全一致
pub fn check_header(headers: &StringRecord) -> RepositoryResult<()> {
    let actual: Vec<&str> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = h.trim();
            if i == 0 {
                h.trim_start_matches('\u{feff}')
            } else {
                h
            }
        })
        .collect();

    if actual != REPORT_COLUMNS {
        return Err(RepositoryError::SchemaMismatch {
            expected: REPORT_COLUMNS.join(","),
            actual: actual.join(","),
        });
    }
    Ok(())
}

// ==========================================
// 行编解码
// ==========================================

/// 解析一行数据
pub fn decode_row(record: &StringRecord, row: usize) -> RepositoryResult<ProductionReport> {
    let date = parse_date(record.get(0), row)?;
    let variant_name = record.get(1).unwrap_or_default().to_string();
    let batch_code = record.get(2).unwrap_or_default().to_string();

    let mut report = ProductionReport::new(date, variant_name, batch_code);
    for field in QuantityField::ALL {
        let raw = record.get(TEXT_COLUMN_COUNT + field.column_offset());
        let value = coerce_quantity(raw);
        if value == 0 && raw.map_or(true, |v| !v.trim().is_empty() && v.trim() != "0") {
            tracing::debug!(
                row,
                column = field.column_name(),
                raw = raw.unwrap_or("<missing>"),
                "数量单元格无法解析，按 0 处理"
            );
        }
        report.set_quantity(field, value);
    }
    Ok(report)
}

/// 序列化一行数据（列顺序同 REPORT_COLUMNS）
pub fn encode_row(report: &ProductionReport) -> Vec<String> {
    let mut row = Vec::with_capacity(REPORT_COLUMNS.len());
    row.push(report.date.format(DATE_FORMAT).to_string());
    row.push(report.variant_name.clone());
    row.push(report.batch_code.clone());
    for field in QuantityField::ALL {
        row.push(report.quantity(field).to_string());
    }
    row
}

// ==========================================
// 整表读写
// ==========================================

/// 读取全部日报
///
/// - 零字节输入 -> 空集合
/// - 仅表头 -> 空集合
/// - 表头不符 -> SchemaMismatch
pub fn read_reports<R: Read>(input: R) -> RepositoryResult<Vec<ProductionReport>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // 缺失的尾部单元格按缺失值处理
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    check_header(&headers)?;

    let mut reports = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;

        // 跳过完全空白的行
        if record.iter().all(|v| v.trim().is_empty()) {
            continue;
        }

        reports.push(decode_row(&record, idx + 1)?);
    }

    Ok(reports)
}

/// 写出全部日报（总是包含表头）
pub fn write_reports<W: Write>(output: W, reports: &[ProductionReport]) -> RepositoryResult<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);

    writer.write_record(REPORT_COLUMNS)?;
    for report in reports {
        writer.write_record(encode_row(report))?;
    }
    writer
        .flush()
        .map_err(|e| RepositoryError::FileWriteError(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_line() -> String {
        REPORT_COLUMNS.join(",")
    }

    #[test]
    fn test_coerce_quantity() {
        assert_eq!(coerce_quantity(Some("42")), 42);
        assert_eq!(coerce_quantity(Some(" 7 ")), 7);
        assert_eq!(coerce_quantity(Some("12.0")), 12);
        assert_eq!(coerce_quantity(Some("3.9")), 3);
        assert_eq!(coerce_quantity(Some("")), 0);
        assert_eq!(coerce_quantity(Some("abc")), 0);
        assert_eq!(coerce_quantity(Some("-5")), 0);
        assert_eq!(coerce_quantity(Some("NaN")), 0);
        assert_eq!(coerce_quantity(None), 0);
    }

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_date(Some("2024-03-15"), 1).unwrap(), expected);
        assert_eq!(parse_date(Some("2024/03/15"), 1).unwrap(), expected);
        assert_eq!(parse_date(Some("20240315"), 1).unwrap(), expected);
        assert_eq!(parse_date(Some("2024-03-15 00:00:00"), 1).unwrap(), expected);
        assert_eq!(parse_date(Some("2024-03-15T08:30:00"), 1).unwrap(), expected);
    }

    #[test]
    fn test_parse_date_malformed() {
        let err = parse_date(Some("15th March"), 3).unwrap_err();
        match err {
            RepositoryError::MalformedDate { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "15th March");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_date(None, 1).is_err());
    }

    #[test]
    fn test_read_zero_bytes_is_empty() {
        let reports = read_reports("".as_bytes()).unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn test_read_header_only_is_empty() {
        let input = format!("{}\n", header_line());
        let reports = read_reports(input.as_bytes()).unwrap();
        assert!(reports.is_empty());
    }

    #[test]
    fn test_read_wrong_header_is_fatal() {
        let input = "Date,Variant,Batch\n2024-01-01,Cola,B1\n";
        let err = read_reports(input.as_bytes()).unwrap_err();
        assert!(matches!(err, RepositoryError::SchemaMismatch { .. }));
        assert!(err.is_schema_error());
    }

    #[test]
    fn test_read_blank_qa_sample_is_zero() {
        // QASample 为第 19 列（下标 18）
        let mut cells = vec!["2024-01-02".to_string(), "Cola".to_string(), "B1".to_string()];
        cells.extend((0..18).map(|i| (i + 1).to_string()));
        cells[18] = String::new();
        let input = format!("{}\n{}\n", header_line(), cells.join(","));

        let reports = read_reports(input.as_bytes()).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].qa_sample, 0);
        assert_eq!(reports[0].total_case, 1);
        assert_eq!(reports[0].reject_shipper, 18);
    }

    #[test]
    fn test_read_short_row_missing_cells_are_zero() {
        let input = format!("{}\n2024-01-02,Cola,B1,100,5\n", header_line());
        let reports = read_reports(input.as_bytes()).unwrap();
        assert_eq!(reports[0].total_case, 100);
        assert_eq!(reports[0].loose_cans, 5);
        assert_eq!(reports[0].empty_rejection, 0);
        assert_eq!(reports[0].reject_shipper, 0);
    }

    #[test]
    fn test_write_then_read_preserves_values() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let report = ProductionReport::new(date, "Lemon, 250ml", "B\"7\"")
            .with_quantity(QuantityField::TotalCase, 120)
            .with_quantity(QuantityField::RejectShipper, 3);

        let mut buf = Vec::new();
        write_reports(&mut buf, std::slice::from_ref(&report)).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with(&header_line()));

        let loaded = read_reports(buf.as_slice()).unwrap();
        assert_eq!(loaded, vec![report]);
    }

    #[test]
    fn test_write_empty_keeps_header() {
        let mut buf = Vec::new();
        write_reports(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_end(), header_line());
    }
}
